//! Serialization of manifests back to c3pm.json text.

use std::fmt;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::Manifest;

const INDENT: &[u8] = b"    ";

impl Manifest {
    /// Render the manifest as JSON with 4-space indentation.
    ///
    /// Keys are written in document order. No trailing newline is added.
    pub fn to_json_string(&self) -> String {
        let mut out = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut serializer)
            .expect("serialization cannot fail for string-keyed JSON values");
        String::from_utf8(out).expect("serde_json always produces UTF-8")
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}
