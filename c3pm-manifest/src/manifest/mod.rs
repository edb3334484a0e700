//! The c3pm.json manifest model.

mod file;
mod init;
mod parse;
mod serialize;

use indexmap::IndexMap;
pub use init::{ManifestFields, Prompter};
pub use parse::parse_manifest;
use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result, keys, rules};

/// Where a manifest comes from.
pub enum ManifestSource<'a> {
    /// Parse the given document text.
    Text(&'a str),
    /// Read `c3pm.json` from the working directory.
    File,
    /// Build a new manifest from answers given to a prompter.
    Fresh(&'a mut dyn Prompter),
}

/// A c3pm.json project manifest.
///
/// The document is kept as an insertion-ordered map so keys are written back
/// in the order they were read or created. The `name` key is always present
/// and valid.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    document: IndexMap<String, Value>,
}

impl Manifest {
    /// Construct a manifest from the given source.
    pub fn load(source: ManifestSource<'_>) -> Result<Self> {
        match source {
            ManifestSource::Text(content) => content.parse(),
            ManifestSource::File => Self::open(),
            ManifestSource::Fresh(prompter) => Self::init(prompter),
        }
    }

    /// Project name.
    pub fn name(&self) -> &str {
        self.text(keys::NAME).unwrap_or_default()
    }

    /// Set the project name.
    ///
    /// The name is checked first; a rejected name leaves the manifest untouched.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if let Some(problem) = rules::name_problem(&name) {
            return Err(Box::new(Error::Validation {
                field: keys::NAME,
                reason: problem.to_string(),
            }));
        }
        self.set_text(keys::NAME, name);
        Ok(())
    }

    pub fn author(&self) -> Option<&str> {
        self.text(keys::AUTHOR)
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.set_text(keys::AUTHOR, author);
    }

    /// Project version, free-form.
    pub fn version(&self) -> Option<&str> {
        self.text(keys::VERSION)
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.set_text(keys::VERSION, version);
    }

    pub fn description(&self) -> Option<&str> {
        self.text(keys::DESCRIPTION)
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.set_text(keys::DESCRIPTION, description);
    }

    /// Project homepage.
    pub fn url(&self) -> Option<&str> {
        self.text(keys::URL)
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.set_text(keys::URL, url);
    }

    /// Contact e-mail.
    pub fn email(&self) -> Option<&str> {
        self.text(keys::EMAIL)
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.set_text(keys::EMAIL, email);
    }

    pub fn license(&self) -> Option<&str> {
        self.text(keys::LICENSE)
    }

    /// Set or clear the license.
    ///
    /// `None` and the empty string both remove the key.
    pub fn set_license(&mut self, license: Option<String>) {
        match license.filter(|l| !l.is_empty()) {
            Some(license) => self.set_text(keys::LICENSE, license),
            None => {
                self.document.shift_remove(keys::LICENSE);
            }
        }
    }

    /// Dependency entries, in document order. Entries are not interpreted.
    pub fn dependencies(&self) -> &[Value] {
        self.document
            .get(keys::DEPENDENCIES)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Append a dependency entry, creating the list if needed.
    pub fn add_dependency(&mut self, dependency: Value) -> Result<()> {
        let entry = self
            .document
            .entry(keys::DEPENDENCIES.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        match entry {
            Value::Array(list) => {
                list.push(dependency);
                Ok(())
            }
            _ => Err(Box::new(Error::Validation {
                field: keys::DEPENDENCIES,
                reason: "dependencies is not a list".to_string(),
            })),
        }
    }

    /// Manifest grammar revision recorded in the document.
    pub fn schema_version(&self) -> Option<&str> {
        self.text(keys::SCHEMA_VERSION)
    }

    /// Provenance marker recorded in the document.
    pub fn generator(&self) -> Option<&str> {
        self.text(keys::GENERATOR)
    }

    /// Get the raw value stored under a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.document.keys().map(String::as_str)
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.document.get(key).and_then(Value::as_str)
    }

    // Replacing an existing key keeps its position; new keys go last.
    fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.document
            .insert(key.to_string(), Value::String(value.into()));
    }
}
