//! Parsing, validation and serialization of `c3pm.json` project manifests.
//!
//! A manifest is an ordered JSON object describing a project (name, author,
//! version, description, contact, license) and its dependency list. Key order
//! is part of the document and survives every parse/serialize round trip.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
pub mod rules;

pub use error::{Error, Result, SourceContext};
pub use manifest::{Manifest, ManifestFields, ManifestSource, Prompter, parse_manifest};
pub use rules::{
    FieldRule, FieldRules, FieldViolation, NameProblem, NameRule, is_valid_name, name_problem,
};

/// Well-known manifest file name, resolved against the working directory.
pub const MANIFEST_FILENAME: &str = "c3pm.json";

/// Revision of the manifest grammar written into every new manifest.
pub const SCHEMA_VERSION: &str = "v0.2";

/// Provenance string stamped into every manifest this tool creates.
pub const GENERATOR_MARKER: &str = "https://github.com/OlehKurachenko/c3pm";

/// Version given to freshly created projects.
pub const DEFAULT_VERSION: &str = "0.0.1";

/// Document keys, in canonical order for a fresh manifest.
pub mod keys {
    pub const NAME: &str = "name";
    pub const AUTHOR: &str = "author";
    pub const VERSION: &str = "version";
    pub const DESCRIPTION: &str = "description";
    pub const URL: &str = "url";
    pub const EMAIL: &str = "email";
    pub const LICENSE: &str = "license";
    pub const DEPENDENCIES: &str = "dependencies";
    pub const SCHEMA_VERSION: &str = "c3pm_version";
    pub const GENERATOR: &str = "whatIsC3pm";
}
