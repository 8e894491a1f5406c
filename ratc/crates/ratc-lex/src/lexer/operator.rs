//! Operator and separator lexing.
//!
//! Both use longest match over a one-character lookahead with no further
//! backtracking.

use crate::chars::is_two_char_operator;
use crate::lexer::Transition;
use crate::sink::TokenSink;
use crate::token::TokenKind;
use crate::Lexer;

impl<'src, S: TokenSink<'src>> Lexer<'src, S> {
    /// Lexes an operator.
    ///
    /// Handles: `++`, `--`, `>>`, `<<`, `==`, `!=`, `&&`; every other operator
    /// character is emitted on its own.
    pub(super) fn lex_operator(&mut self) -> Transition {
        if let Some(first) = self.cursor.bump() {
            if let Some(second) = self.cursor.peek() {
                if is_two_char_operator(first, second) {
                    self.cursor.bump();
                }
            }
        }

        self.emit(TokenKind::Operator);
        self.resume()
    }

    /// Lexes a separator.
    ///
    /// Separators are always one character: `()` is two tokens.
    pub(super) fn lex_separator(&mut self) -> Transition {
        self.cursor.bump();
        self.emit(TokenKind::Separator);
        self.resume()
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::tokenize;

    fn lexemes(source: &str) -> Vec<&str> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .filter(|t| !t.is_end())
            .map(|t| t.lexeme)
            .collect()
    }

    #[test]
    fn test_equals_equals_is_one_token() {
        let tokens = tokenize("==").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Operator);
        assert_eq!(tokens[0].lexeme, "==");
    }

    #[test]
    fn test_all_two_char_operators() {
        assert_eq!(
            lexemes("++ -- >> << == != &&"),
            vec!["++", "--", ">>", "<<", "==", "!=", "&&"]
        );
    }

    #[test]
    fn test_unlisted_pairs_split() {
        assert_eq!(lexemes("<="), vec!["<", "="]);
        assert_eq!(lexemes("||"), vec!["|", "|"]);
        assert_eq!(lexemes("=>"), vec!["=", ">"]);
    }

    #[test]
    fn test_longest_match_is_greedy_left_to_right() {
        assert_eq!(lexemes("==="), vec!["==", "="]);
        assert_eq!(lexemes("+++"), vec!["++", "+"]);
    }

    #[test]
    fn test_single_operator_at_end_of_input() {
        let tokens = tokenize("x =").unwrap();
        assert_eq!(tokens[1].lexeme, "=");
        assert!(tokens[2].is_end());
    }

    #[test]
    fn test_operator_before_separator() {
        let tokens = tokenize("!(").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Operator);
        assert_eq!(tokens[0].lexeme, "!");
        assert_eq!(tokens[1].kind, TokenKind::Separator);
    }

    #[test]
    fn test_separators_are_single_characters() {
        let tokens = tokenize("(){}[],;").unwrap();
        assert_eq!(tokens.len(), 9);
        assert!(tokens[..8]
            .iter()
            .all(|t| t.kind == TokenKind::Separator && t.lexeme.len() == 1));
    }
}
