//! Indentation judgement over continuation lines.
//!
//! Lines whose content carries the marker glyph start a new logical block and
//! are excluded; the remainder are continuation lines expected to share the
//! indentation of the first one. Two comparisons run side by side:
//!
//! - growth is judged against the immediate predecessor (this is the
//!   cumulative-drift regression the tool exists to catch, and the only
//!   condition that sets the failure verdict)
//! - consistency is judged against the FIRST continuation line's indentation
//!   (informational only)
//!
//! The differing baselines are intentional; keep them that way.

use super::locate::MatchRecord;

/// Classification of one continuation line relative to its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentClass {
    /// Matches the expected indentation
    Consistent,
    /// Differs from the first line's indentation without growing
    Inconsistent { expected: usize },
    /// Indented further than the immediately preceding continuation line
    Growth { previous: usize },
}

/// Result of judging a continuation set with at least two members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgeOutcome {
    /// Indentation of the first continuation line
    pub expected_indent: usize,
    /// One classification per continuation line, index-aligned with the input
    pub checks: Vec<IndentClass>,
    /// True iff at least one line was classified as growth
    pub problem: bool,
}

/// Filter match records down to continuation lines.
///
/// A record whose trimmed content contains the marker glyph begins a new
/// logical block and does not participate in the comparison. Order is
/// inherited from the input.
#[must_use]
pub fn continuation_lines<'r, 'a>(
    matches: &'r [MatchRecord<'a>],
    marker: &str,
) -> Vec<&'r MatchRecord<'a>> {
    matches
        .iter()
        .filter(|m| !m.content.contains(marker))
        .collect()
}

/// Judge the continuation set for cumulative indentation drift.
///
/// Returns `None` for fewer than two continuation lines (insufficient data,
/// treated as the clean case by callers).
#[must_use]
pub fn judge_indentation(continuations: &[&MatchRecord<'_>]) -> Option<JudgeOutcome> {
    if continuations.len() < 2 {
        return None;
    }

    let expected = continuations[0].leading_spaces;
    let mut checks = Vec::with_capacity(continuations.len());
    let mut problem = false;

    for (i, rec) in continuations.iter().enumerate() {
        let class = if i > 0 && rec.leading_spaces > continuations[i - 1].leading_spaces {
            problem = true;
            IndentClass::Growth {
                previous: continuations[i - 1].leading_spaces,
            }
        } else if rec.leading_spaces != expected {
            IndentClass::Inconsistent { expected }
        } else {
            IndentClass::Consistent
        };
        checks.push(class);
    }

    Some(JudgeOutcome {
        expected_indent: expected,
        checks,
        problem,
    })
}
