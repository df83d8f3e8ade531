//! Serde-backed formats: JSON and YAML renditions of the wire form.

use super::registry::{FormatError, Formatter};
use crate::prereq::ast::Expression;

/// JSON output, pretty-printed or on a single line.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        if self.pretty {
            "json"
        } else {
            "json-compact"
        }
    }

    fn serialize(&self, expr: &Expression) -> Result<String, FormatError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(expr)
        } else {
            serde_json::to_string(expr)
        };
        result
            .map(|json| json + "\n")
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        if self.pretty {
            "Nested-object JSON, indented"
        } else {
            "Nested-object JSON on one line"
        }
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, expr: &Expression) -> Result<String, FormatError> {
        serde_yaml::to_string(expr).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Nested-object YAML"
    }
}
