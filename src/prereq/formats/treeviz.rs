//! Treeviz formatter for expression trees
//!
//! One line per node, nesting drawn with box connectors, 2 columns per level.
//!
//! So the format is :
//! <prefix><connector> <icon> <label> (label truncated to 40 characters)
//!
//! Example:
//!
//!   ∧ and
//!   ├─ § CS 101 with a minimum grade of C
//!   └─ ( group
//!     └─ ∨ or
//!       ├─ § CS 102
//!       └─ ¶ permission of instructor
//!
//! Icons
//!     And: ∧
//!     Or: ∨
//!     Group: (
//!     Course: §
//!     Freeform: ¶

use super::registry::{FormatError, Formatter};
use crate::prereq::ast::Expression;

const MAX_LABEL_CHARS: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(expr: &Expression) -> &'static str {
    match expr {
        Expression::And { .. } => "∧",
        Expression::Or { .. } => "∨",
        Expression::Group { .. } => "(",
        Expression::Course { .. } => "§",
        Expression::Freeform { .. } => "¶",
    }
}

fn with_grade(head: &str, grade: &str) -> String {
    if grade.is_empty() {
        head.to_string()
    } else {
        format!("{head} {grade}")
    }
}

fn label(expr: &Expression) -> String {
    let text = match expr {
        Expression::And { .. } => "and".to_string(),
        Expression::Or { .. } => "or".to_string(),
        Expression::Group { grade, .. } => with_grade("group", grade),
        Expression::Course { code, grade } => with_grade(code, grade),
        Expression::Freeform { text } => text.clone(),
    };
    truncate(&text, MAX_LABEL_CHARS)
}

fn children(expr: &Expression) -> Vec<&Expression> {
    match expr {
        Expression::Group { inner, .. } => vec![inner.as_ref()],
        Expression::And { operands } | Expression::Or { operands } => operands.iter().collect(),
        Expression::Course { .. } | Expression::Freeform { .. } => Vec::new(),
    }
}

fn format_children(expr: &Expression, prefix: &str, output: &mut String) {
    let kids = children(expr);
    let child_count = kids.len();

    for (i, child) in kids.into_iter().enumerate() {
        let is_last = i == child_count - 1;
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!(
            "{}{} {} {}\n",
            prefix,
            connector,
            get_icon(child),
            label(child)
        ));

        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        format_children(child, &child_prefix, output);
    }
}

pub fn to_treeviz_str(expr: &Expression) -> String {
    let mut output = format!("{} {}\n", get_icon(expr), label(expr));
    format_children(expr, "", &mut output);
    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, expr: &Expression) -> Result<String, FormatError> {
        Ok(to_treeviz_str(expr))
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors and Unicode icons"
    }
}
