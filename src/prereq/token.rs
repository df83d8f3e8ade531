//! Token definitions for prerequisite text
//!
//! Tokens are produced by the [lexing](crate::prereq::lexing) module. Whitespace and commas are
//! recognized by the lexer but never emitted, so every token here is significant to the grammar.
//!
//! Like the rest of the pipeline, tokens travel paired with the byte range of their source text.
//! The range is only used for error reporting; the grammar looks at the token alone.

use std::fmt;
use std::ops::Range;

/// A significant token in a prerequisite description.
///
/// Payload-carrying variants hold the text exactly as matched. For the keyword and
/// parenthesis variants the text is implied by the variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    And,
    Or,
    LParen,
    RParen,
    /// Department code plus number, e.g. "CS 101".
    CourseCode(String),
    /// Minimum grade phrase, e.g. "with a minimum grade of C".
    GradeClause(String),
    /// Text that is not otherwise classified, e.g. "permission of instructor".
    Freeform(String),
}

/// A token paired with its byte range in the input.
pub type TokenSpan = (Token, Range<usize>);

impl Token {
    /// Short name of the token kind, used in diagnostics and token dumps.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::And => "And",
            Token::Or => "Or",
            Token::LParen => "LParen",
            Token::RParen => "RParen",
            Token::CourseCode(_) => "CourseCode",
            Token::GradeClause(_) => "GradeClause",
            Token::Freeform(_) => "Freeform",
        }
    }

    /// The source text this token was matched from.
    pub fn text(&self) -> &str {
        match self {
            Token::And => "and",
            Token::Or => "or",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::CourseCode(text) | Token::GradeClause(text) | Token::Freeform(text) => text,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::And | Token::Or | Token::LParen | Token::RParen => {
                write!(f, "{} {:?}", self.kind_name(), self.text())
            }
            _ => write!(f, "{}({:?})", self.kind_name(), self.text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_of_keywords() {
        assert_eq!(Token::And.text(), "and");
        assert_eq!(Token::Or.text(), "or");
        assert_eq!(Token::LParen.text(), "(");
        assert_eq!(Token::RParen.text(), ")");
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::RParen.to_string(), "RParen \")\"");
        assert_eq!(
            Token::CourseCode("CS 101".to_string()).to_string(),
            "CourseCode(\"CS 101\")"
        );
    }
}
