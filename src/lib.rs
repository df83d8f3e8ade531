//! # prereq
//!
//! A parser for free-text course prerequisite descriptions.
//!
//! Turns text such as "CS 101 with a minimum grade of C or (CS 102 and MATH 201)" into a tree
//! of course references, grade clauses, boolean connectives and free text fallbacks, for tools
//! that build prerequisite graphs.
//!
//! File Layout
//!
//! src/prereq
//!   ├── token     Token kinds
//!   ├── lexing    Ordered lexicon and tokenizer
//!   ├── parsing   Recursive-descent grammar and the `parse` entry point
//!   ├── ast       Expression tree, shaping helper and serialized form
//!   ├── formats   json / yaml / treeviz output
//!   ├── config    Layered settings for the command-line tool
//!   └── error     Lexing and syntax errors
//!
//! Data flows one way: text → tokens → tree.

pub mod prereq;

pub use prereq::ast::Expression;
pub use prereq::parsing::{parse, pretty_print, ParseError};
