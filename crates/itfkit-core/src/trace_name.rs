//! File-name predicate for model-checker counterexample traces.

const PREFIX: &str = "counterexample";
const SUFFIX: &str = ".itf.json";

fn digit_run(name: &str) -> Option<&str> {
    let rest = name.strip_prefix(PREFIX)?;
    let digits = rest.strip_suffix(SUFFIX)?;
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
}

/// True iff `name` is exactly `counterexample<digits>.itf.json`.
///
/// The whole name must match: no extra prefix or suffix, at least one digit,
/// literal dots.
#[must_use]
pub fn is_counterexample_name(name: &str) -> bool {
    digit_run(name).is_some()
}

/// Numeric suffix of a counterexample file name, if the name matches.
///
/// Used to order collected traces numerically rather than lexicographically.
#[must_use]
pub fn counterexample_index(name: &str) -> Option<u64> {
    digit_run(name)?.parse().ok()
}
