//! Normalisation of free-text input.

/// Trim `input` and collapse every internal run of whitespace to a single space.
///
/// Applied to every user text field before it is stored. Group and role
/// fields are stored as entered.
///
/// Whitespace is Unicode `White_Space` plus U+FEFF (BYTE ORDER MARK) and
/// minus U+0085 (NEXT LINE).
///
/// # Example
///
/// ```
/// use admin_console_shared::format_input;
///
/// assert_eq!(format_input("  Ar  un  "), "Ar un");
/// ```
pub fn format_input(input: &str) -> String {
    input
        .split(is_input_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_input_space(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{85}' => false,
        c => c.is_whitespace(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_collapses() {
        assert_eq!(format_input("  Ar  un  "), "Ar un");
    }

    #[test]
    fn test_collapses_tabs_and_newlines() {
        assert_eq!(format_input("first\t\tsecond\nthird"), "first second third");
    }

    #[test]
    fn test_blank_input_becomes_empty() {
        assert_eq!(format_input("   \t "), "");
        assert_eq!(format_input(""), "");
    }

    #[test]
    fn test_already_clean_input_is_unchanged() {
        assert_eq!(format_input("arun@example.com"), "arun@example.com");
    }

    #[test]
    fn test_unicode_spaces() {
        assert_eq!(format_input("\u{FEFF}Ar\u{3000}un\u{A0}"), "Ar un");
        assert_eq!(format_input("a\u{2028}b"), "a b");
        assert_eq!(format_input("a\u{85}b"), "a\u{85}b");
    }
}
