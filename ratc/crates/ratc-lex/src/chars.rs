//! Character classes for the Rat21F lexer.
//!
//! The start state dispatches on these predicates in a fixed order: comment
//! marker, letter, digit, separator, operator, quote, whitespace. Anything
//! else is an unrecognized character.

/// Starts a comment that runs to the end of the line.
pub const COMMENT_MARKER: char = '#';

/// Characters that form a one-character separator token.
pub const SEPARATORS: &str = "();{}[],";

/// Characters that start an operator token.
pub const OPERATORS: &str = "!&%+-*/\\|^=~:><.";

/// Operator pairs recognized by the one-character lookahead.
pub const TWO_CHAR_OPERATORS: [&str; 7] = ["++", "--", ">>", "<<", "==", "!=", "&&"];

/// Checks if a character can start an identifier (`[a-zA-Z]`).
///
/// # Example
///
/// ```
/// use ratc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(!is_ident_start('_'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier (`[a-zA-Z0-9_]`).
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a separator.
#[inline]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(c)
}

/// Checks if a character starts an operator.
#[inline]
pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(c)
}

/// Checks if a character opens (and closes) a string literal.
#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Checks if a character is skipped between tokens.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Checks if a character terminates a comment.
#[inline]
pub fn is_line_end(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Returns true when `first` followed by `second` is a two-character operator.
///
/// # Example
///
/// ```
/// use ratc_lex::chars::is_two_char_operator;
///
/// assert!(is_two_char_operator('=', '='));
/// assert!(!is_two_char_operator('<', '='));
/// ```
pub fn is_two_char_operator(first: char, second: char) -> bool {
    TWO_CHAR_OPERATORS.iter().any(|op| {
        let mut chars = op.chars();
        chars.next() == Some(first) && chars.next() == Some(second)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_disjoint() {
        for c in SEPARATORS.chars() {
            assert!(!is_operator(c), "{c:?} is both separator and operator");
        }
        for c in OPERATORS.chars().chain(SEPARATORS.chars()) {
            assert!(!is_ident_start(c));
            assert!(!c.is_ascii_digit());
            assert!(!is_quote(c));
            assert!(!is_whitespace(c));
            assert_ne!(c, COMMENT_MARKER);
        }
    }

    #[test]
    fn test_ident_continue() {
        assert!(is_ident_continue('_'));
        assert!(is_ident_continue('9'));
        assert!(is_ident_continue('Z'));
        assert!(!is_ident_continue('-'));
    }

    #[test]
    fn test_backslash_is_operator() {
        assert!(is_operator('\\'));
        assert!(is_operator('|'));
    }

    #[test]
    fn test_two_char_operators() {
        for op in TWO_CHAR_OPERATORS {
            let mut chars = op.chars();
            let (a, b) = (chars.next().unwrap(), chars.next().unwrap());
            assert!(is_two_char_operator(a, b), "{op}");
        }
        assert!(!is_two_char_operator('|', '|'));
        assert!(!is_two_char_operator('>', '='));
        assert!(!is_two_char_operator('^', '^'));
    }
}
