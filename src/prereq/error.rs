//! Error types for prerequisite parsing
//!
//! Both kinds are terminal: the parser does no recovery and never returns a partial tree.
//! Positions are byte offsets into the input text.

use crate::prereq::parsing::parser::MAX_DEPTH;
use thiserror::Error;

/// No lexical rule matched at some input position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no token matches {text:?} at byte {position}")]
pub struct LexError {
    /// The unmatched remainder of the input.
    pub text: String,
    pub position: usize,
}

/// The grammar construct the parser required when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A parenthesized group, a course code, or free text.
    Atom,
    /// The `)` closing a group.
    CloseParen,
    /// Nothing: a complete expression was already parsed.
    EndOfInput,
    /// Anything but another `(`: groups are already nested as deep as allowed.
    ShallowerNesting,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Atom => write!(f, "a course, group or free text"),
            Expected::CloseParen => write!(f, "')'"),
            Expected::EndOfInput => write!(f, "end of input"),
            Expected::ShallowerNesting => write!(f, "at most {} nested groups", MAX_DEPTH),
        }
    }
}

/// The token sequence does not fit the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found} at byte {position}")]
pub struct SyntaxError {
    pub expected: Expected,
    /// Display form of the offending token, or "end of input".
    pub found: String,
    pub position: usize,
}

/// Any failure to parse a prerequisite description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("lexing error: {0}")]
    Lex(#[from] LexError),
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// Byte offset where the failure was detected.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Lex(e) => e.position,
            ParseError::Syntax(e) => e.position,
        }
    }
}

/// A serialized tree violates the structural invariants of [`Expression`].
///
/// [`Expression`]: crate::prereq::ast::Expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{connective}\" node needs at least two operands, found {found}")]
pub struct ShapeError {
    pub connective: &'static str,
    pub found: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_message() {
        let err = ParseError::from(SyntaxError {
            expected: Expected::CloseParen,
            found: "end of input".to_string(),
            position: 7,
        });
        assert_eq!(
            err.to_string(),
            "syntax error: expected ')', found end of input at byte 7"
        );
        assert_eq!(err.position(), 7);
    }

    #[test]
    fn test_lex_error_message() {
        let err = LexError {
            text: "\u{0}".to_string(),
            position: 3,
        };
        assert_eq!(err.to_string(), "no token matches \"\\0\" at byte 3");
    }
}
