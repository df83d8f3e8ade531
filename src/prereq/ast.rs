//! Abstract Syntax Tree for prerequisite expressions
//!
//!     The tree is a plain value: built once per parse, returned to the caller, never mutated and
//!     never shared. Leaves are courses and free text; interior nodes are groups and the two
//!     boolean connectives.
//!
//! Shape Invariants
//!
//!     - `And` and `Or` nodes always hold two or more operands. A rule that collects a single
//!       operand returns that operand directly. [`collapse`] is the only place that decides this.
//!     - Grades are always strings. A missing grade is `""`, never absent.
//!
//! Serialized Form
//!
//!     Serde support goes through the [wire](wire) form, a nested-object layout with the keys
//!     `course`, `grade`, `courses`, `and`, `or` and a `"type": "special"` marker for free text.

pub mod wire;

use std::fmt;

/// Which boolean connective a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    /// The keyword as written in prerequisite text.
    pub fn keyword(self) -> &'static str {
        match self {
            Connective::And => "and",
            Connective::Or => "or",
        }
    }
}

/// A parsed prerequisite expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "wire::Wire", try_from = "wire::Wire")]
pub enum Expression {
    /// A course reference with its verbatim grade clause, or `""`.
    Course { code: String, grade: String },
    /// A parenthesized sub-expression with its own optional grade clause.
    Group {
        inner: Box<Expression>,
        grade: String,
    },
    And { operands: Vec<Expression> },
    Or { operands: Vec<Expression> },
    /// Text the grammar could not classify, e.g. "permission of instructor".
    Freeform { text: String },
}

/// Combine one or more operands under `connective`.
///
/// A lone operand is returned unwrapped, so no `And`/`Or` node ever has a single child.
pub fn collapse(connective: Connective, first: Expression, rest: Vec<Expression>) -> Expression {
    if rest.is_empty() {
        return first;
    }

    let mut operands = Vec::with_capacity(rest.len() + 1);
    operands.push(first);
    operands.extend(rest);

    match connective {
        Connective::And => Expression::And { operands },
        Connective::Or => Expression::Or { operands },
    }
}

impl Expression {
    pub fn course(code: impl Into<String>) -> Self {
        Expression::Course {
            code: code.into(),
            grade: String::new(),
        }
    }

    pub fn course_with_grade(code: impl Into<String>, grade: impl Into<String>) -> Self {
        Expression::Course {
            code: code.into(),
            grade: grade.into(),
        }
    }

    pub fn group(inner: Expression, grade: impl Into<String>) -> Self {
        Expression::Group {
            inner: Box::new(inner),
            grade: grade.into(),
        }
    }

    pub fn freeform(text: impl Into<String>) -> Self {
        Expression::Freeform { text: text.into() }
    }

    /// Build a conjunction, collapsing a single operand. Returns `None` for an empty list.
    pub fn all(operands: Vec<Expression>) -> Option<Self> {
        Self::combine(Connective::And, operands)
    }

    /// Build a disjunction, collapsing a single operand. Returns `None` for an empty list.
    pub fn any(operands: Vec<Expression>) -> Option<Self> {
        Self::combine(Connective::Or, operands)
    }

    fn combine(connective: Connective, operands: Vec<Expression>) -> Option<Self> {
        let mut iter = operands.into_iter();
        let first = iter.next()?;
        Some(collapse(connective, first, iter.collect()))
    }

    /// Operands of an `And`/`Or` node, or an empty slice for any other node.
    pub fn operands(&self) -> &[Expression] {
        match self {
            Expression::And { operands } | Expression::Or { operands } => operands,
            _ => &[],
        }
    }

    /// Every course code in the tree, in source order. Duplicates are kept.
    pub fn courses(&self) -> Vec<&str> {
        let mut codes = Vec::new();
        self.collect_courses(&mut codes);
        codes
    }

    fn collect_courses<'a>(&'a self, codes: &mut Vec<&'a str>) {
        match self {
            Expression::Course { code, .. } => codes.push(code),
            Expression::Group { inner, .. } => inner.collect_courses(codes),
            Expression::And { operands } | Expression::Or { operands } => {
                for operand in operands {
                    operand.collect_courses(codes);
                }
            }
            Expression::Freeform { .. } => {}
        }
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Expression::Course { .. } | Expression::Freeform { .. } => 1,
            Expression::Group { inner, .. } => 1 + inner.node_count(),
            Expression::And { operands } | Expression::Or { operands } => {
                1 + operands.iter().map(Expression::node_count).sum::<usize>()
            }
        }
    }

    /// Length of the longest root-to-leaf path, counting nodes. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Course { .. } | Expression::Freeform { .. } => 1,
            Expression::Group { inner, .. } => 1 + inner.depth(),
            Expression::And { operands } | Expression::Or { operands } => {
                1 + operands.iter().map(Expression::depth).max().unwrap_or(0)
            }
        }
    }

    /// True when every `And`/`Or` node in the tree has at least two operands.
    pub fn is_valid_shape(&self) -> bool {
        match self {
            Expression::Course { .. } | Expression::Freeform { .. } => true,
            Expression::Group { inner, .. } => inner.is_valid_shape(),
            Expression::And { operands } | Expression::Or { operands } => {
                operands.len() >= 2 && operands.iter().all(Expression::is_valid_shape)
            }
        }
    }

    /// Short label for the node kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Course { .. } => "Course",
            Expression::Group { .. } => "Group",
            Expression::And { .. } => "And",
            Expression::Or { .. } => "Or",
            Expression::Freeform { .. } => "Freeform",
        }
    }
}

fn write_grade(f: &mut fmt::Formatter<'_>, grade: &str) -> fmt::Result {
    if grade.is_empty() {
        Ok(())
    } else {
        write!(f, " {grade}")
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, operands: &[Expression], keyword: &str) -> fmt::Result {
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            write!(f, " {keyword} ")?;
        }
        write!(f, "{operand}")?;
    }
    Ok(())
}

/// Renders the tree back to prerequisite text.
///
/// Any tree returned by [`parse`](crate::prereq::parsing::parse) renders to text that parses
/// back to an equal tree. Hand-built trees with an `And` directly inside an `Or` have no such
/// text, since `or` binds tighter than `and` and parentheses always produce a `Group`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Course { code, grade } => {
                write!(f, "{code}")?;
                write_grade(f, grade)
            }
            Expression::Group { inner, grade } => {
                write!(f, "({inner})")?;
                write_grade(f, grade)
            }
            Expression::And { operands } => write_joined(f, operands, Connective::And.keyword()),
            Expression::Or { operands } => write_joined(f, operands, Connective::Or.keyword()),
            Expression::Freeform { text } => write!(f, "{text}"),
        }
    }
}
