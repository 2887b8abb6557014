//! Line splitting and test-content location.
//!
//! Works over sanitized text: splits it into lines (blank lines kept, nothing
//! trimmed) and picks out the lines containing any of the configured
//! recognition tokens, measuring their leading indentation.

/// One located test-content line.
///
/// Borrows from the sanitized text; order of records follows textual order,
/// which is what makes the downstream cumulative comparison meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord<'a> {
    /// 1-based line number in the sanitized text
    pub line_num: usize,
    /// Line with leading and trailing whitespace removed
    pub content: &'a str,
    /// Count of leading space characters (tabs are not counted or converted)
    pub leading_spaces: usize,
    /// The unmodified line, for diagnostic echo
    pub raw: &'a str,
}

/// Split sanitized text on newline characters.
///
/// Empty strings are preserved for blank lines; no content is trimmed.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Count leading space characters before the first non-space character.
///
/// Only `' '` counts; a tab stops the count without contributing to it.
#[must_use]
pub fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|&c| c == ' ').count()
}

/// Scan lines for recognition tokens and build ordered match records.
///
/// Containment is case-sensitive substring matching against the raw line.
#[must_use]
pub fn locate_matches<'a>(lines: &[&'a str], tokens: &[String]) -> Vec<MatchRecord<'a>> {
    let mut records = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if tokens.iter().any(|t| line.contains(t.as_str())) {
            records.push(MatchRecord {
                line_num: i + 1,
                content: line.trim(),
                leading_spaces: leading_spaces(line),
                raw: line,
            });
        }
    }
    records
}
