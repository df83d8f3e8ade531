//! Output formats for expression trees
//!
//! All formats are reachable through the [`FormatRegistry`]. `json` and `yaml` render the
//! nested-object wire form; `treeviz` is a one-line-per-node view meant for people.

pub mod registry;
pub mod serde_formats;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serde_formats::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
