//! Parsing module for prerequisite descriptions
//!
//!     This module provides the pipeline from source text to expression tree:
//!         1. Lexing: Tokenization of the text. See [lexing](crate::prereq::lexing).
//!         2. Analysis: Recursive descent over the tokens. See [parser](parser).
//!         3. Building: Tree shaping happens inside the grammar actions through
//!            [collapse](crate::prereq::ast::collapse), so no separate pass is needed.
//!
//! Failure
//!
//!     Parsing is fail-fast. The first lexical or structural mismatch aborts the call with a
//!     [`ParseError`]; no partial tree is ever returned. Callers should treat any error as
//!     "this text is not parseable" and surface the original text for manual correction.
//!
//! Concurrency
//!
//!     The lexicon is compiled once and shared read-only. Everything else (token buffer, cursor)
//!     lives inside the call, so `parse` can be used from any number of threads at once.

pub mod parser;

use crate::prereq::ast::Expression;
pub use crate::prereq::error::{Expected, LexError, ParseError, SyntaxError};
use crate::prereq::lexing::tokenize;
use crate::prereq::token::TokenSpan;
use parser::Parser;

/// Parse a prerequisite description into an expression tree.
///
/// # Example
///
/// ```rust,ignore
/// use prereq::prereq::parsing::parse;
///
/// let expr = parse("CS 101 with a minimum grade of C or (CS 102 and MATH 201)")?;
/// ```
pub fn parse(text: &str) -> Result<Expression, ParseError> {
    let result = tokenize(text)
        .map_err(ParseError::from)
        .and_then(|tokens| parse_tokens(&tokens, text.len()).map_err(ParseError::from));

    match &result {
        Ok(expr) => log::debug!("parsed {:?} into {} nodes", text, expr.node_count()),
        Err(err) => log::debug!("failed to parse {:?}: {}", text, err),
    }
    result
}

/// Parse an already tokenized input. `input_len` is the byte length of the source text and is
/// used as the error position when input ends early.
pub fn parse_tokens(tokens: &[TokenSpan], input_len: usize) -> Result<Expression, SyntaxError> {
    Parser::new(tokens, input_len).expression()
}

/// Diagnostic helper: print the input and the pretty JSON form of its tree to stdout.
///
/// Not a stable output format.
pub fn pretty_print(text: &str) -> Result<Expression, ParseError> {
    println!("{text}");
    let expr = parse(text)?;
    match serde_json::to_string_pretty(&expr) {
        Ok(json) => println!("{json}"),
        Err(err) => log::warn!("could not serialize tree for {:?}: {}", text, err),
    }
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_parse_course() {
        init_logger();
        assert_eq!(parse("CS 101").unwrap(), Expression::course("CS 101"));
    }

    #[test]
    fn test_parse_empty_input() {
        init_logger();
        let err = parse("").unwrap_err();
        assert_eq!(
            err,
            ParseError::Syntax(SyntaxError {
                expected: Expected::Atom,
                found: "end of input".to_string(),
                position: 0,
            })
        );
    }

    #[test]
    fn test_parse_tokens_directly() {
        let tokens = tokenize("CS 101 or CS 102").unwrap();
        let expr = parse_tokens(&tokens, 16).unwrap();
        assert_eq!(expr.operands().len(), 2);
    }

    #[test]
    fn test_pretty_print_returns_tree() {
        init_logger();
        let expr = pretty_print("permission of instructor").unwrap();
        assert_eq!(expr, Expression::freeform("permission of instructor"));
        assert!(pretty_print("(CS 101").is_err());
    }

    #[test]
    fn test_parse_from_many_threads() {
        let inputs = [
            "CS 101 and CS 102",
            "(MATH 201 or MATH 202) with a grade of C",
            "permission of instructor",
            "CS 101 or",
        ];
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let input = inputs[i % inputs.len()];
                    scope.spawn(move || (input, parse(input)))
                })
                .collect();
            for handle in handles {
                let (input, result) = handle.join().unwrap();
                assert_eq!(result.is_ok(), input != "CS 101 or", "{input}");
            }
        });
    }
}
