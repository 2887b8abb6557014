//! Capture analysis pipeline
//!
//! Ties the four stages together: sanitize control sequences, split lines,
//! locate token-tagged lines, judge indentation. The sectioned report goes to
//! an explicit sink so tests can capture it without redirecting the process
//! stdout.

pub mod judge;
pub mod locate;

use std::io::Write;

pub use judge::{continuation_lines, judge_indentation, IndentClass, JudgeOutcome};
pub use locate::{leading_spaces, locate_matches, split_lines, MatchRecord};

use crate::config::Config;
use crate::sanitize::strip_controls;
use crate::Result;

/// Outcome of one capture analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSummary {
    /// True iff a cumulative-growth defect was found (the exit-level verdict)
    pub problem: bool,
    /// Number of lines matching a recognition token
    pub match_count: usize,
    /// Number of matches left after marker exclusion
    pub continuation_count: usize,
    /// First continuation line's indentation, when there was enough data
    pub expected_indent: Option<usize>,
}

/// Analyze a raw terminal capture, writing the diagnostic report to `out`.
///
/// Every input produces a verdict; the only errors are sink write failures.
pub fn analyze_capture<W: Write>(raw: &str, config: &Config, out: &mut W) -> Result<AnalysisSummary> {
    writeln!(out, "=== TERMINAL OUTPUT ANALYSIS ===")?;
    writeln!(out, "Raw output length: {} characters", raw.chars().count())?;

    let clean = strip_controls(raw);

    writeln!(out, "=== CLEANED OUTPUT ===")?;
    let lines = split_lines(&clean);
    for (i, line) in lines.iter().enumerate() {
        if !line.trim().is_empty() {
            writeln!(out, "Line {}: '{}' (len: {})", i + 1, line, line.chars().count())?;
        }
    }

    let matches = locate_matches(&lines, &config.tokens);

    writeln!(out, "\n=== TEST CONTENT ANALYSIS ===")?;
    if matches.is_empty() {
        writeln!(out, "No test content found!")?;
        return Ok(AnalysisSummary {
            problem: false,
            match_count: 0,
            continuation_count: 0,
            expected_indent: None,
        });
    }

    for m in &matches {
        writeln!(out, "Line {}: '{}' -> {} spaces", m.line_num, m.content, m.leading_spaces)?;
        writeln!(out, "  Raw: {:?}", m.raw)?;
    }

    let continuations = continuation_lines(&matches, &config.marker);

    writeln!(out, "\n=== INDENTATION CHECK ===")?;
    writeln!(out, "Found {} continuation lines", continuations.len())?;

    let Some(outcome) = judge_indentation(&continuations) else {
        writeln!(out, "Not enough continuation lines for analysis")?;
        return Ok(AnalysisSummary {
            problem: false,
            match_count: matches.len(),
            continuation_count: continuations.len(),
            expected_indent: None,
        });
    };

    writeln!(out, "Expected indentation: {} spaces", outcome.expected_indent)?;

    for (rec, check) in continuations.iter().zip(&outcome.checks) {
        match check {
            IndentClass::Growth { previous } => writeln!(
                out,
                "❌ CUMULATIVE INDENT FOUND: Line '{}' has {} spaces, more than previous line's {} spaces",
                rec.content, rec.leading_spaces, previous
            )?,
            IndentClass::Inconsistent { expected } => writeln!(
                out,
                "❌ INCONSISTENT INDENT: Line '{}' has {} spaces, expected {}",
                rec.content, rec.leading_spaces, expected
            )?,
            IndentClass::Consistent => writeln!(
                out,
                "✅ Line '{}' has correct {} spaces",
                rec.content, rec.leading_spaces
            )?,
        }
    }

    if !outcome.problem {
        writeln!(out, "✅ No cumulative indentation problem detected")?;
    }

    Ok(AnalysisSummary {
        problem: outcome.problem,
        match_count: matches.len(),
        continuation_count: continuations.len(),
        expected_indent: Some(outcome.expected_indent),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (AnalysisSummary, String) {
        let config = Config::default();
        let mut out = Vec::new();
        let summary = analyze_capture(input, &config, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_no_test_content() {
        let (summary, report) = run("just some output\nnothing tagged");
        assert!(!summary.problem);
        assert_eq!(summary.match_count, 0);
        assert!(report.contains("No test content found!"));
    }

    #[test]
    fn test_insufficient_continuation_lines() {
        let (summary, report) = run("    aaaa only one");
        assert!(!summary.problem);
        assert_eq!(summary.match_count, 1);
        assert_eq!(summary.continuation_count, 1);
        assert!(report.contains("Not enough continuation lines for analysis"));
    }

    #[test]
    fn test_marker_line_does_not_count_as_continuation() {
        let input = "✦ aaaa header\n    aaaa first";
        let (summary, _) = run(input);
        assert_eq!(summary.match_count, 2);
        assert_eq!(summary.continuation_count, 1);
        assert!(!summary.problem);
    }

    #[test]
    fn test_blank_lines_skipped_in_dump_but_numbered() {
        let (_, report) = run("aaaa one\n\n  aaaa two");
        assert!(report.contains("Line 1: 'aaaa one' (len: 8)"));
        assert!(!report.contains("Line 2:"));
        assert!(report.contains("Line 3: '  aaaa two' (len: 10)"));
    }

    #[test]
    fn test_raw_echo_is_escaped() {
        let (_, report) = run("    aaaa first\n    bbbb second");
        assert!(report.contains("  Raw: \"    aaaa first\""));
    }

    #[test]
    fn test_sanitization_feeds_measurement() {
        // Color codes around the indent must not inflate the space count.
        let input = "    \x1b[32maaaa first\x1b[0m\n    bbbb second";
        let (summary, _) = run(input);
        assert!(!summary.problem);
        assert_eq!(summary.expected_indent, Some(4));
    }
}
