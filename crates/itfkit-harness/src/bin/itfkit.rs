//! CLI entrypoint for itfkit trace-fixture tooling.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use itfkit_core::ItfTrace;
use itfkit_core::stubgen::{self, StubRange};
use itfkit_harness::CollectManifest;
use itfkit_harness::collect::{self, CollectConfig};

/// Trace-fixture tooling for model-based tests.
#[derive(Debug, Parser)]
#[command(name = "itfkit")]
#[command(about = "Trace-fixture tooling for model-based testing")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Emit one test-function stub per trace index in the range.
    GenStubs {
        /// First trace index (inclusive).
        #[arg(long, default_value_t = stubgen::DEFAULT_START)]
        start: u32,
        /// Last trace index (inclusive).
        #[arg(long, default_value_t = stubgen::DEFAULT_END)]
        end: u32,
        /// Output path (if omitted, prints to stdout).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Copy counterexample traces out of the model checker's output tree.
    CollectTraces {
        /// Model-checker output root (one subdirectory per configuration).
        #[arg(long, default_value = collect::DEFAULT_SOURCE_ROOT)]
        source_root: PathBuf,
        /// Destination directory for collected trace fixtures.
        #[arg(long, default_value = collect::DEFAULT_DEST)]
        dest: PathBuf,
        /// Optional manifest JSON output path.
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Print the copy plan without touching the destination.
        #[arg(long)]
        dry_run: bool,
    },
    /// Summarize an ITF trace file.
    Summarize {
        /// Trace JSON path.
        #[arg(long)]
        trace: PathBuf,
        /// Output path (if omitted, prints to stdout).
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenStubs { start, end, output } => {
            let body = stubgen::render_range(StubRange { start, end })?;
            write_or_print(output, &body)?;
        }
        Command::CollectTraces {
            source_root,
            dest,
            manifest,
            dry_run,
        } => {
            let config = CollectConfig { source_root, dest };
            let planned = collect::plan(&config)?;
            eprintln!(
                "Found {} configuration(s), {} matching trace file(s)",
                planned.configs,
                planned.items.len()
            );

            if dry_run {
                for item in &planned.items {
                    println!("{} -> {}", item.source.display(), item.dest.display());
                }
                return Ok(());
            }

            let report = collect::execute(&config, &planned)?;
            for trace in &report.copied {
                eprintln!("[{}] {} ({} bytes)", trace.config, trace.file_name, trace.bytes);
            }

            if let Some(path) = manifest {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                let doc = CollectManifest::from_report(&config, &report);
                doc.write(&path)?;
                eprintln!("Wrote manifest to {}", path.display());
            }
        }
        Command::Summarize { trace, output } => {
            let parsed = ItfTrace::from_file(&trace)?;
            let name = trace
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let summary = parsed.summarize(&name);
            let body = serde_json::to_string_pretty(&summary)?;
            write_or_print(output, &body)?;
        }
    }

    Ok(())
}

fn write_or_print(output: Option<PathBuf>, body: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, body)?;
        eprintln!("Wrote {}", path.display());
    } else {
        print!("{body}");
    }
    Ok(())
}
