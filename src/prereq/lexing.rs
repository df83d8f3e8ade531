//! Lexer
//!
//!     This module turns prerequisite text into a flat token stream. There is a single pass and
//!     no transformations: at each position the [lexicon](lexicon) rules are tried in order and
//!     the first match wins. Whitespace, commas and byte order marks are consumed without
//!     producing tokens.
//!
//! Source Ranges
//!
//!     Every token carries the byte range of its source text. The grammar never looks at it, but
//!     errors report positions from it, so it has to be preserved exactly.
//!
//! Free Text
//!
//!     Free text is the fallback rule, tried after keywords, course codes and grade phrases have
//!     had their chance. It runs until " and ", " or ", a parenthesis or a line break. Because it
//!     is a plain bounded scan rather than a lookahead regex, long inputs stay linear-ish.

pub mod lexicon;

use crate::prereq::error::LexError;
pub use crate::prereq::token::{Token, TokenSpan};
use lexicon::LEXICON;

/// Tokenize prerequisite text.
///
/// Fails only when no rule matches at some position, which the free text fallback makes
/// practically unreachable for any non-empty remainder.
pub fn tokenize(source: &str) -> Result<Vec<TokenSpan>, LexError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < source.len() {
        let rest = &source[pos..];
        let (rule, len) = LEXICON
            .iter()
            .find_map(|(rule, matcher)| matcher.match_len(rest).map(|len| (*rule, len)))
            .ok_or_else(|| LexError {
                text: rest.to_string(),
                position: pos,
            })?;

        let range = pos..pos + len;
        if let Some(token) = rule.emit(&source[range.clone()]) {
            log::trace!("token {} at {:?}", token, range);
            tokens.push((token, range));
        }
        pos += len;
    }

    log::trace!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize_kinds(source: &str) -> Result<Vec<Token>, LexError> {
        Ok(tokenize(source)?.into_iter().map(|(t, _)| t).collect())
    }

    fn course(code: &str) -> Token {
        Token::CourseCode(code.to_string())
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize("  ,, ").unwrap(), vec![]);
    }

    #[test]
    fn test_course_with_grade() {
        let tokens = tokenize("CS 101 with a minimum grade of C").unwrap();
        assert_eq!(
            tokens,
            vec![
                (course("CS 101"), 0..6),
                (
                    Token::GradeClause("with a minimum grade of C".to_string()),
                    7..32
                ),
            ]
        );
    }

    #[test]
    fn test_boolean_sequence() {
        let tokens = tokenize_kinds("CS 101 or (CS 102 and MATH 201)").unwrap();
        assert_eq!(
            tokens,
            vec![
                course("CS 101"),
                Token::Or,
                Token::LParen,
                course("CS 102"),
                Token::And,
                course("MATH 201"),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_commas_are_discarded() {
        let tokens = tokenize_kinds("CS 101, CS 102, and CS 103").unwrap();
        assert_eq!(
            tokens,
            vec![course("CS 101"), course("CS 102"), Token::And, course("CS 103")]
        );
    }

    #[test]
    fn test_freeform_stops_at_keywords() {
        let tokens = tokenize("permission of instructor or CS 101").unwrap();
        assert_eq!(
            tokens,
            vec![
                (Token::Freeform("permission of instructor".to_string()), 0..24),
                (Token::Or, 25..27),
                (course("CS 101"), 28..34),
            ]
        );
    }

    #[test]
    fn test_freeform_inside_group() {
        let tokens = tokenize_kinds("(consent of department)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LParen,
                Token::Freeform("consent of department".to_string()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_course_prefix_splits_off_trailing_text() {
        let tokens = tokenize_kinds("CS 101 or equivalent").unwrap();
        assert_eq!(
            tokens,
            vec![
                course("CS 101"),
                Token::Or,
                Token::Freeform("equivalent".to_string()),
            ]
        );
    }

    #[test]
    fn test_grade_variants() {
        for grade in [
            "with a grade of C",
            "with a minimum grade of B+",
            "with a grade C- or higher",
            "with a minimum grade of A or better",
        ] {
            let source = format!("CHEM 110 {grade}");
            let tokens = tokenize_kinds(&source).unwrap();
            assert_eq!(
                tokens,
                vec![course("CHEM 110"), Token::GradeClause(grade.to_string())],
                "grade phrase {grade:?}"
            );
        }
    }

    #[test]
    fn test_line_break_ends_freeform() {
        let tokens = tokenize_kinds("junior standing\nsenior standing").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Freeform("junior standing".to_string()),
                Token::Freeform("senior standing".to_string()),
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_split_off() {
        let tokens = tokenize_kinds("CS 101 or orientation").unwrap();
        assert_eq!(
            tokens,
            vec![
                course("CS 101"),
                Token::Or,
                Token::Or,
                Token::Freeform("ientation".to_string()),
            ]
        );
    }

    #[test]
    fn test_leading_byte_order_mark() {
        let tokens = tokenize("\u{FEFF}CS 101").unwrap();
        assert_eq!(tokens, vec![(course("CS 101"), 3..9)]);
    }
}
