//! Manifest parsing from files and strings.

use std::str::FromStr;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use super::Manifest;
use crate::{Error, MANIFEST_FILENAME, Result, error::SourceContext, rules::FieldRules};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILENAME)
    }
}

impl Manifest {
    /// Parse a c3pm.json from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let value: Value = serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    // A document that is not an object has no name key
    let document: IndexMap<String, Value> = match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => IndexMap::new(),
    };

    validate_document(&document, &source_ctx)?;
    debug!(filename, keys = document.len(), "parsed manifest");
    Ok(Manifest { document })
}

/// Run structural validation on a freshly parsed document.
fn validate_document(document: &IndexMap<String, Value>, ctx: &SourceContext) -> Result<()> {
    match FieldRules::new().check(document) {
        Some(violation) => Err(ctx.invalid_manifest_error(
            violation.reason,
            ctx.find_key_span(violation.field),
        )),
        None => Ok(()),
    }
}
