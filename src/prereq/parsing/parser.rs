//! Recursive-descent parser for prerequisite token streams
//!
//! Grammar, one token of lookahead, no backtracking:
//!
//!     expression              := andExpression
//!     andExpression           := orExpression ( And orExpression )*
//!     orExpression            := atomicBooleanExpression ( Or atomicBooleanExpression )*
//!     atomicBooleanExpression := parenthesisExpression | courseExpression | Freeform
//!     courseExpression        := CourseCode GradeClause?
//!     parenthesisExpression   := LParen andExpression RParen GradeClause?
//!
//! Since `orExpression` is the operand of `andExpression`, `or` binds tighter than `and`:
//! "A and B or C" is `And(A, Or(B, C))`. Existing consumers rely on this shape.
//!
//! A `Parser` owns nothing but a cursor into a borrowed token slice. Each call to
//! [`parse_tokens`](super::parse_tokens) builds a fresh one, so concurrent parses never share state.
//!
//! Groups may nest at most [`MAX_DEPTH`] levels. Deeper input is rejected with a `SyntaxError`
//! instead of exhausting the stack.

use crate::prereq::ast::{collapse, Connective, Expression};
use crate::prereq::error::{Expected, SyntaxError};
use crate::prereq::token::{Token, TokenSpan};

/// Maximum number of nested parenthesized groups.
pub const MAX_DEPTH: usize = 256;

pub struct Parser<'t> {
    tokens: &'t [TokenSpan],
    cursor: usize,
    /// Groups currently open.
    depth: usize,
    /// Reported as the position of errors at end of input.
    input_len: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [TokenSpan], input_len: usize) -> Self {
        Self {
            tokens,
            cursor: 0,
            depth: 0,
            input_len,
        }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.cursor).map(|(token, _)| token)
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Consume the next token if it equals `expected`.
    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn error(&self, expected: Expected) -> SyntaxError {
        match self.tokens.get(self.cursor) {
            Some((token, range)) => SyntaxError {
                expected,
                found: token.to_string(),
                position: range.start,
            },
            None => SyntaxError {
                expected,
                found: "end of input".to_string(),
                position: self.input_len,
            },
        }
    }

    /// Parse a complete expression. Tokens left over afterwards are an error.
    pub fn expression(&mut self) -> Result<Expression, SyntaxError> {
        let expr = self.and_expression()?;
        if self.peek().is_some() {
            return Err(self.error(Expected::EndOfInput));
        }
        Ok(expr)
    }

    fn and_expression(&mut self) -> Result<Expression, SyntaxError> {
        let first = self.or_expression()?;
        let mut rest = Vec::new();
        while self.eat(&Token::And) {
            rest.push(self.or_expression()?);
        }
        Ok(collapse(Connective::And, first, rest))
    }

    fn or_expression(&mut self) -> Result<Expression, SyntaxError> {
        let first = self.atomic_expression()?;
        let mut rest = Vec::new();
        while self.eat(&Token::Or) {
            rest.push(self.atomic_expression()?);
        }
        Ok(collapse(Connective::Or, first, rest))
    }

    fn atomic_expression(&mut self) -> Result<Expression, SyntaxError> {
        log::trace!("atomic expression at token {}", self.cursor);
        match self.peek() {
            Some(Token::LParen) => self.parenthesis_expression(),
            Some(Token::CourseCode(code)) => {
                self.advance();
                Ok(Expression::Course {
                    code: code.clone(),
                    grade: self.optional_grade(),
                })
            }
            Some(Token::Freeform(text)) => {
                self.advance();
                Ok(Expression::Freeform { text: text.clone() })
            }
            _ => Err(self.error(Expected::Atom)),
        }
    }

    fn parenthesis_expression(&mut self) -> Result<Expression, SyntaxError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(Expected::ShallowerNesting));
        }
        if !self.eat(&Token::LParen) {
            return Err(self.error(Expected::Atom));
        }
        self.depth += 1;
        let inner = self.and_expression();
        self.depth -= 1;
        let inner = inner?;
        if !self.eat(&Token::RParen) {
            return Err(self.error(Expected::CloseParen));
        }
        Ok(Expression::Group {
            inner: Box::new(inner),
            grade: self.optional_grade(),
        })
    }

    /// A trailing grade clause, or `""` when there is none.
    fn optional_grade(&mut self) -> String {
        match self.peek() {
            Some(Token::GradeClause(grade)) => {
                self.advance();
                grade.clone()
            }
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prereq::lexing::tokenize;

    fn parse(source: &str) -> Result<Expression, SyntaxError> {
        let tokens = tokenize(source).unwrap();
        Parser::new(&tokens, source.len()).expression()
    }

    #[test]
    fn test_or_binds_tighter_than_and() {
        let expr = parse("CS 101 or CS 102 and CS 103 or CS 104").unwrap();
        assert_eq!(
            expr,
            Expression::And {
                operands: vec![
                    Expression::Or {
                        operands: vec![Expression::course("CS 101"), Expression::course("CS 102")]
                    },
                    Expression::Or {
                        operands: vec![Expression::course("CS 103"), Expression::course("CS 104")]
                    },
                ]
            }
        );
    }

    #[test]
    fn test_nested_groups() {
        let expr = parse("((CS 101))").unwrap();
        assert_eq!(
            expr,
            Expression::group(Expression::group(Expression::course("CS 101"), ""), "")
        );
    }

    #[test]
    fn test_nesting_limit() {
        let at_limit = format!("{}CS 101{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        let expr = parse(&at_limit).unwrap();
        assert_eq!(expr.depth(), MAX_DEPTH + 1);

        let too_deep = format!("{}CS 101{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        let err = parse(&too_deep).unwrap_err();
        assert_eq!(err.expected, Expected::ShallowerNesting);
        assert_eq!(err.position, MAX_DEPTH);
    }

    #[test]
    fn test_missing_close_paren() {
        let err = parse("(CS 101").unwrap_err();
        assert_eq!(
            err,
            SyntaxError {
                expected: Expected::CloseParen,
                found: "end of input".to_string(),
                position: 7,
            }
        );
    }

    #[test]
    fn test_stray_close_paren() {
        let err = parse("CS 101)").unwrap_err();
        assert_eq!(err.expected, Expected::EndOfInput);
        assert_eq!(err.found, "RParen \")\"");
        assert_eq!(err.position, 6);
    }

    #[test]
    fn test_dangling_connective() {
        let err = parse("CS 101 and").unwrap_err();
        assert_eq!(err.expected, Expected::Atom);
        assert_eq!(err.position, 10);
    }

    #[test]
    fn test_empty_group() {
        let err = parse("()").unwrap_err();
        assert_eq!(err.expected, Expected::Atom);
        assert_eq!(err.position, 1);
    }

    #[test]
    fn test_grade_without_course() {
        let err = parse("with a grade of C").unwrap_err();
        assert_eq!(err.expected, Expected::Atom);
        assert_eq!(err.position, 0);
        assert!(err.found.starts_with("GradeClause"));
    }

    #[test]
    fn test_two_atoms_without_connective() {
        let err = parse("CS 101 CS 102").unwrap_err();
        assert_eq!(err.expected, Expected::EndOfInput);
        assert_eq!(err.position, 7);
    }
}
