//! Test-stub generation for numbered trace fixtures.
//!
//! The test suite executes one checked-in trace fixture per test function;
//! the functions are pure boilerplate, so they are generated. Each stub is
//! fully determined by its trace index.

use thiserror::Error;

/// First trace index of the checked-in fixture set.
pub const DEFAULT_START: u32 = 13;
/// Last trace index of the checked-in fixture set.
pub const DEFAULT_END: u32 = 36;

#[derive(Debug, Error)]
pub enum StubError {
    #[error("empty stub range: start {start} is greater than end {end}")]
    EmptyRange { start: u32, end: u32 },
}

/// Inclusive range of trace indices to generate stubs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubRange {
    pub start: u32,
    pub end: u32,
}

impl Default for StubRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

impl StubRange {
    /// Number of indices covered by the range (zero when inverted).
    #[must_use]
    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Path of the trace fixture referenced by the stub for `index`.
#[must_use]
pub fn trace_path(index: u32) -> String {
    format!("traces/P{index}.json")
}

/// Render the single test-function block for `index`.
///
/// The emitted text is Go source consumed by the module's test suite; both
/// the function name and the fixture path are derived from the index. The
/// block ends with a newline so concatenated blocks stay line-separated.
#[must_use]
pub fn render_stub(index: u32) -> String {
    format!(
        "func TestTracesP{index}(t *testing.T) {{\n\tExecuteTraces(t, loadTraces(\"traces/P{index}.json\"))\n}}\n"
    )
}

/// Render all stub blocks for `range` in increasing index order.
pub fn render_range(range: StubRange) -> Result<String, StubError> {
    if range.is_empty() {
        return Err(StubError::EmptyRange {
            start: range.start,
            end: range.end,
        });
    }
    let mut out = String::new();
    for index in range.start..=range.end {
        out.push_str(&render_stub(index));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_block_matches_template() {
        let block = render_stub(13);
        assert_eq!(
            block,
            "func TestTracesP13(t *testing.T) {\n\tExecuteTraces(t, loadTraces(\"traces/P13.json\"))\n}\n"
        );
    }

    #[test]
    fn stub_references_its_trace_path() {
        for index in [0, 7, 13, 36, 1000] {
            let block = render_stub(index);
            assert!(block.contains(&trace_path(index)));
            assert!(block.contains(&format!("TestTracesP{index}")));
        }
    }

    #[test]
    fn two_element_range_renders_both_blocks_in_order() {
        let out = render_range(StubRange { start: 13, end: 14 }).expect("non-empty range");
        let p13 = out.find("traces/P13.json").expect("P13 block present");
        let p14 = out.find("traces/P14.json").expect("P14 block present");
        assert!(p13 < p14, "P13 should precede P14");
        assert_eq!(out.matches("func TestTracesP").count(), 2);
    }

    #[test]
    fn default_range_renders_one_block_per_index() {
        let range = StubRange::default();
        assert_eq!(range.len(), 24);

        let out = render_range(range).expect("non-empty range");
        assert_eq!(out.matches("func TestTracesP").count(), 24);

        // Increasing order, no gaps, no duplicates.
        let mut last = None;
        for index in range.start..=range.end {
            let needle = format!("func TestTracesP{index}(");
            let pos = out.find(&needle).expect("block for every index");
            assert_eq!(out.matches(&needle).count(), 1);
            if let Some(prev) = last {
                assert!(pos > prev, "blocks must appear in increasing index order");
            }
            last = Some(pos);
        }
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = render_range(StubRange { start: 14, end: 13 }).unwrap_err();
        assert!(matches!(err, StubError::EmptyRange { start: 14, end: 13 }));
    }

    #[test]
    fn single_index_range_renders_one_block() {
        let range = StubRange { start: 20, end: 20 };
        assert_eq!(range.len(), 1);
        let out = render_range(range).expect("non-empty range");
        assert_eq!(out, render_stub(20));
    }
}
