//! Nested-object serialized form of [`Expression`]
//!
//! Layout per node:
//!
//!     Course   {"course": "CS 101", "grade": ""}
//!     Group    {"courses": <node>, "grade": "with a grade of C"}
//!     And      {"and": [<node>, <node>, ...]}
//!     Or       {"or": [<node>, <node>, ...]}
//!     Freeform {"course": "permission of instructor", "type": "special"}
//!
//! Nodes are distinguished by their keys, so the enum is untagged. Variant order matters for
//! deserialization: free text is tried before courses because both carry a `course` key.

use super::Expression;
use crate::prereq::error::ShapeError;
use serde::{Deserialize, Serialize};

/// Marker value carried by free text nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeMarker {
    #[serde(rename = "special")]
    Special,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Wire {
    And {
        and: Vec<Wire>,
    },
    Or {
        or: Vec<Wire>,
    },
    Group {
        courses: Box<Wire>,
        grade: String,
    },
    Freeform {
        course: String,
        #[serde(rename = "type")]
        marker: NodeMarker,
    },
    Course {
        course: String,
        grade: String,
    },
}

impl From<Expression> for Wire {
    fn from(expr: Expression) -> Self {
        match expr {
            Expression::Course { code, grade } => Wire::Course {
                course: code,
                grade,
            },
            Expression::Group { inner, grade } => Wire::Group {
                courses: Box::new(Wire::from(*inner)),
                grade,
            },
            Expression::And { operands } => Wire::And {
                and: operands.into_iter().map(Wire::from).collect(),
            },
            Expression::Or { operands } => Wire::Or {
                or: operands.into_iter().map(Wire::from).collect(),
            },
            Expression::Freeform { text } => Wire::Freeform {
                course: text,
                marker: NodeMarker::Special,
            },
        }
    }
}

fn operands(connective: &'static str, list: Vec<Wire>) -> Result<Vec<Expression>, ShapeError> {
    if list.len() < 2 {
        return Err(ShapeError {
            connective,
            found: list.len(),
        });
    }
    list.into_iter().map(Expression::try_from).collect()
}

impl TryFrom<Wire> for Expression {
    type Error = ShapeError;

    fn try_from(wire: Wire) -> Result<Self, Self::Error> {
        Ok(match wire {
            Wire::And { and } => Expression::And {
                operands: operands("and", and)?,
            },
            Wire::Or { or } => Expression::Or {
                operands: operands("or", or)?,
            },
            Wire::Group { courses, grade } => Expression::Group {
                inner: Box::new(Expression::try_from(*courses)?),
                grade,
            },
            Wire::Freeform { course, .. } => Expression::Freeform { text: course },
            Wire::Course { course, grade } => Expression::Course {
                code: course,
                grade,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_layout() {
        let value = serde_json::to_value(Expression::course("CS 101")).unwrap();
        assert_eq!(value, json!({"course": "CS 101", "grade": ""}));
    }

    #[test]
    fn test_freeform_layout() {
        let value = serde_json::to_value(Expression::freeform("consent")).unwrap();
        assert_eq!(value, json!({"course": "consent", "type": "special"}));
    }

    #[test]
    fn test_group_layout() {
        let expr = Expression::group(
            Expression::Or {
                operands: vec![Expression::course("CS 101"), Expression::course("CS 102")],
            },
            "with a grade of B",
        );
        let value = serde_json::to_value(expr).unwrap();
        assert_eq!(
            value,
            json!({
                "courses": {"or": [
                    {"course": "CS 101", "grade": ""},
                    {"course": "CS 102", "grade": ""}
                ]},
                "grade": "with a grade of B"
            })
        );
    }

    #[test]
    fn test_deserialize_distinguishes_freeform_from_course() {
        let course: Expression =
            serde_json::from_value(json!({"course": "CS 101", "grade": "with a grade of C"}))
                .unwrap();
        assert_eq!(
            course,
            Expression::course_with_grade("CS 101", "with a grade of C")
        );

        let free: Expression =
            serde_json::from_value(json!({"course": "consent", "type": "special"})).unwrap();
        assert_eq!(free, Expression::freeform("consent"));
    }

    #[test]
    fn test_deserialize_rejects_single_operand() {
        let result: Result<Expression, _> =
            serde_json::from_value(json!({"and": [{"course": "CS 101", "grade": ""}]}));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("at least two operands"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_unknown_marker() {
        let result: Result<Expression, _> =
            serde_json::from_value(json!({"course": "consent", "type": "other"}));
        assert!(result.is_err());
    }
}
