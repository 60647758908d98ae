//! YAML for `config.yaml` and the recipe and store catalogs
//!
//! Parse failures carry the document text so miette can point at the bad line.

pub mod diagnostics;
pub mod parser;

pub use diagnostics::{YamlError, YamlSyntaxError};
pub use parser::{parse_yaml, parse_yaml_file};
