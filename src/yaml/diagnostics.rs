//! Source-annotated YAML errors

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A YAML document that failed to parse or did not fit the expected shape
#[derive(Debug, Error, Diagnostic)]
#[error("Invalid YAML in {filename}: {message}")]
#[diagnostic(
    code(larder::yaml::syntax),
    help("check indentation, quoting, and field names")
)]
pub struct YamlSyntaxError {
    pub filename: String,
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: Option<SourceSpan>,
}

impl YamlSyntaxError {
    /// Build from a serde_yml error, pointing at the reported location
    pub fn from_serde_error(err: &serde_yml::Error, content: &str, filename: &str) -> Self {
        let span = err.location().map(|loc| {
            let offset = loc.index().min(content.len());
            let len = usize::from(offset < content.len());
            SourceSpan::from((offset, len))
        });

        Self {
            filename: filename.to_string(),
            message: err.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            span,
        }
    }
}

/// Errors from loading YAML files
#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(YamlSyntaxError),

    #[error("Failed to read YAML file: {0}")]
    #[diagnostic(code(larder::yaml::io))]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_points_into_source() {
        let content = "name: ok\nvalue: [unclosed\n";
        let err = serde_yml::from_str::<serde_yml::Value>(content).unwrap_err();
        let diag = YamlSyntaxError::from_serde_error(&err, content, "broken.yaml");

        assert_eq!(diag.filename, "broken.yaml");
        if let Some(span) = diag.span {
            assert!(span.offset() <= content.len());
        }
        assert!(diag.to_string().contains("broken.yaml"));
    }
}
