//! Lexicon Definitions
//!
//! The lexicon is an ordered table of rules. At each input position the rules are tried in
//! declaration order and the first one that matches wins, so order is what resolves the
//! ambiguity between keywords, course codes, grade phrases and free text.
//!
//! # Lexicon Order
//!
//! 1. skip - whitespace, commas and byte order marks, never emitted
//! 2. and - keyword, exact literal with no word boundary
//! 3. or - keyword, exact literal with no word boundary
//! 4. course - department code plus number, before free text so codes are never swallowed
//! 5. grade - minimum grade phrase
//! 6. freeform - anything up to " and ", " or ", a parenthesis or a line break
//! 7. lparen / rparen - never reachable by freeform, which stops in front of them
//!
//! The table is compiled once on first use and shared read-only by every tokenize call.

use crate::prereq::token::Token;
use once_cell::sync::Lazy;
use regex::Regex;

/// What a matched rule produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Rule {
    Skip,
    And,
    Or,
    Course,
    Grade,
    Freeform,
    LParen,
    RParen,
}

impl Rule {
    /// Build the token for a match of this rule, or `None` for discarded input.
    pub(super) fn emit(self, text: &str) -> Option<Token> {
        match self {
            Rule::Skip => None,
            Rule::And => Some(Token::And),
            Rule::Or => Some(Token::Or),
            Rule::Course => Some(Token::CourseCode(text.to_string())),
            Rule::Grade => Some(Token::GradeClause(text.to_string())),
            Rule::Freeform => Some(Token::Freeform(text.to_string())),
            Rule::LParen => Some(Token::LParen),
            Rule::RParen => Some(Token::RParen),
        }
    }
}

/// How a rule recognizes its input.
pub(super) enum Matcher {
    /// An anchored regex.
    Pattern(Regex),
    /// An exact literal.
    Literal(&'static str),
    /// Bounded scan up to the nearest stop sequence.
    FreeformScan,
}

/// Substrings that end a freeform run.
const FREEFORM_STOPS: &[&str] = &[" and ", " or ", "(", ")"];

impl Matcher {
    /// Length in bytes of the match at the start of `rest`. Empty matches count as no match.
    pub(super) fn match_len(&self, rest: &str) -> Option<usize> {
        let len = match self {
            Matcher::Pattern(regex) => regex.find(rest).map(|m| m.end())?,
            Matcher::Literal(literal) => {
                if rest.starts_with(literal) {
                    literal.len()
                } else {
                    0
                }
            }
            Matcher::FreeformScan => scan_freeform(rest),
        };
        (len > 0).then_some(len)
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Length of the longest prefix of `rest` containing no stop sequence and no line break.
fn scan_freeform(rest: &str) -> usize {
    for (i, c) in rest.char_indices() {
        if is_line_terminator(c) {
            return i;
        }
        let tail = &rest[i..];
        if FREEFORM_STOPS.iter().any(|stop| tail.starts_with(stop)) {
            return i;
        }
    }
    rest.len()
}

fn anchored(pattern: &str) -> Matcher {
    // Patterns are fixed literals below; failing to compile one is a programming error.
    Matcher::Pattern(Regex::new(&format!("^(?:{pattern})")).unwrap())
}

/// Ordered lexicon, compiled on first use.
pub(super) static LEXICON: Lazy<Vec<(Rule, Matcher)>> = Lazy::new(|| {
    vec![
        (Rule::Skip, anchored(r"[\s,\x{FEFF}]+")),
        (Rule::And, Matcher::Literal("and")),
        (Rule::Or, Matcher::Literal("or")),
        (Rule::Course, anchored(r"[A-Z]+ [0-9][A-Z0-9][0-9]+")),
        (
            Rule::Grade,
            anchored(r"with a (?:minimum )*grade (?:of )*[ABC]-*\+*(?: or (?:higher|better))*"),
        ),
        (Rule::Freeform, Matcher::FreeformScan),
        (Rule::LParen, Matcher::Literal("(")),
        (Rule::RParen, Matcher::Literal(")")),
    ]
});
