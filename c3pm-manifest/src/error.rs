use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for c3pm-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A c3pm.json document together with the name it is reported under.
///
/// Parse and validation errors built here carry the document so miette can
/// point at the offending text.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Wrap a JSON syntax error, labelled at the line and column serde_json reports.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        // serde_json reports line 0 when the error has no position
        let span = (source.line() > 0).then(|| {
            let offset = SourceOffset::from_location(&self.src, source.line(), source.column());
            SourceSpan::new(offset, 0)
        });
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn invalid_manifest_error(
        &self,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidManifest {
            src: self.named_source(),
            span,
            reason: reason.into(),
        })
    }

    /// Span of a key (quotes included) of the outermost object.
    ///
    /// Keys of nested objects are skipped.
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        let bytes = self.src.as_bytes();
        let mut depth = 0usize;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'{' | b'[' => depth += 1,
                b'}' | b']' => depth = depth.saturating_sub(1),
                b'"' => {
                    let end = string_end(bytes, i)?;
                    let is_key = depth == 1
                        && &self.src[i + 1..end] == key
                        && followed_by_colon(bytes, end + 1);
                    if is_key {
                        return Some(SourceSpan::from((i, end + 1 - i)));
                    }
                    i = end;
                }
                _ => {}
            }
            i += 1;
        }
        None
    }
}

/// Index of the quote closing the string that opens at `start`.
fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

fn followed_by_colon(bytes: &[u8], from: usize) -> bool {
    bytes[from.min(bytes.len())..]
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        == Some(&b':')
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to access '{path}'")]
    #[diagnostic(code(c3pm::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' not found")]
    #[diagnostic(
        code(c3pm::not_found),
        help("run 'c3pm init' to create a new project")
    )]
    NotFound { path: PathBuf },

    #[error("failed to parse c3pm.json")]
    #[diagnostic(code(c3pm::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{reason}")]
    #[diagnostic(code(c3pm::invalid_manifest))]
    InvalidManifest {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        reason: String,
    },

    #[error("invalid {field}: {reason}")]
    #[diagnostic(
        code(c3pm::validation_error),
        help("names use lowercase latin letters, '-' and '_', and start and end with a letter")
    )]
    Validation { field: &'static str, reason: String },

    #[error("failed to read '{label}'")]
    #[diagnostic(code(c3pm::input))]
    Input {
        label: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Reason text of an invalid manifest or rejected field, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Error::InvalidManifest { reason, .. } | Error::Validation { reason, .. } => {
                Some(reason)
            }
            _ => None,
        }
    }

    /// Whether this error means the manifest file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
