//! Parsing of the user's menu choice.

/// Parse one input line as a menu selection.
///
/// Only a non-empty run of ASCII digits counts; anything else (blank line,
/// surrounding spaces, signs, letters, overflow) is "no selection".
pub fn parse_selection(line: &str) -> Option<usize> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    line.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_selections() {
        assert_eq!(parse_selection("0"), Some(0));
        assert_eq!(parse_selection("12"), Some(12));
        assert_eq!(parse_selection("007"), Some(7));
        assert_eq!(parse_selection("3\r\n"), Some(3));
    }

    #[test]
    fn everything_else_is_none() {
        for line in ["", " ", "abc", "-1", "+1", " 1", "1 ", "1.0", "١"] {
            assert_eq!(parse_selection(line), None, "input {line:?}");
        }
        assert_eq!(parse_selection("99999999999999999999999999"), None);
    }
}
