//! Control-sequence removal for captured terminal output.
//!
//! Captures taken from a live terminal carry CSI color/cursor sequences that
//! would throw off any column measurement. This strips them and nothing else:
//! other whitespace, control characters outside CSI sequences, and non-ASCII
//! glyphs all pass through untouched.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// CSI sequences: ESC, `[`, parameter digits/semicolons, one final letter.
static CSI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").unwrap());

/// Remove all CSI control sequences from a raw capture.
///
/// Pure transformation; input with no sequences is returned borrowed.
/// Idempotent: sanitized text contains nothing left to remove.
#[must_use]
pub fn strip_controls(raw: &str) -> Cow<'_, str> {
    CSI_RE.replace_all(raw, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_color_sequences() {
        let raw = "\x1b[32mgreen\x1b[0m plain";
        assert_eq!(strip_controls(raw), "green plain");
    }

    #[test]
    fn test_strips_multi_parameter_sequences() {
        let raw = "\x1b[1;31;40mbold red\x1b[0m";
        assert_eq!(strip_controls(raw), "bold red");
    }

    #[test]
    fn test_strips_cursor_movement() {
        let raw = "a\x1b[2Kb\x1b[10;20Hc";
        assert_eq!(strip_controls(raw), "abc");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let raw = "no sequences here";
        let clean = strip_controls(raw);
        assert_eq!(clean, raw);
        assert!(matches!(clean, Cow::Borrowed(_)));
    }

    #[test]
    fn test_idempotent() {
        let raw = "\x1b[32m✦ header\x1b[0m\n    aaaa first";
        let once = strip_controls(raw).into_owned();
        let twice = strip_controls(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_preserves_other_whitespace_and_unicode() {
        let raw = "\t  ✦ glyph\x1b[0m\r\n";
        assert_eq!(strip_controls(raw), "\t  ✦ glyph\r\n");
    }

    #[test]
    fn test_bare_escape_left_alone() {
        // Only the ESC-[ form is recognized; a lone ESC is not a CSI sequence.
        let raw = "\x1bplain";
        assert_eq!(strip_controls(raw), "\x1bplain");
    }
}
