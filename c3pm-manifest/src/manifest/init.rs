//! Creation of new manifests.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use super::Manifest;
use crate::{
    DEFAULT_VERSION, Error, GENERATOR_MARKER, Result, SCHEMA_VERSION, keys, rules::name_problem,
};

const NAME_LABEL: &str = "Project name";
const AUTHOR_LABEL: &str = "Author";
const DESCRIPTION_LABEL: &str = "Description";
const URL_LABEL: &str = "Project URL";
const EMAIL_LABEL: &str = "Project e-mail";
const LICENSE_LABEL: &str = "License (empty line if not exist)";

/// Source of answers for interactive manifest creation.
pub trait Prompter {
    /// Ask for a single value.
    fn prompt(&mut self, label: &str) -> std::io::Result<String>;

    /// Show a message to the user. Has no effect on the flow of questions.
    fn report(&mut self, message: &str);
}

/// User supplied fields of a new manifest.
#[derive(Debug, Clone, Default)]
pub struct ManifestFields {
    pub name: String,
    pub author: String,
    pub description: String,
    pub url: String,
    pub email: String,
    /// Empty or `None` means no license key is written.
    pub license: Option<String>,
}

impl ManifestFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Manifest {
    /// Build a new manifest in canonical key order.
    ///
    /// Version, dependency list, schema version and generator marker get
    /// their default values.
    pub fn create(fields: ManifestFields) -> Result<Self> {
        if let Some(problem) = name_problem(&fields.name) {
            return Err(Box::new(Error::Validation {
                field: keys::NAME,
                reason: problem.to_string(),
            }));
        }

        let mut document = IndexMap::new();
        let mut put = |key: &str, value: Value| {
            document.insert(key.to_string(), value);
        };
        put(keys::NAME, fields.name.into());
        put(keys::AUTHOR, fields.author.into());
        put(keys::VERSION, DEFAULT_VERSION.into());
        put(keys::DESCRIPTION, fields.description.into());
        put(keys::URL, fields.url.into());
        put(keys::EMAIL, fields.email.into());
        if let Some(license) = fields.license.filter(|l| !l.is_empty()) {
            put(keys::LICENSE, license.into());
        }
        put(keys::DEPENDENCIES, Value::Array(Vec::new()));
        put(keys::SCHEMA_VERSION, SCHEMA_VERSION.into());
        put(keys::GENERATOR, GENERATOR_MARKER.into());

        Ok(Self { document })
    }

    /// Build a new manifest from answers given to `prompter`.
    ///
    /// The name is asked again until it is valid; every rejection is reported
    /// back through the prompter. Other answers are taken as given.
    pub fn init(prompter: &mut dyn Prompter) -> Result<Self> {
        let name = loop {
            let name = ask(prompter, NAME_LABEL)?;
            match name_problem(&name) {
                Some(problem) => {
                    debug!(%name, %problem, "rejected project name");
                    prompter.report(&format!("Bad name: {}", problem));
                }
                None => break name,
            }
        };

        let fields = ManifestFields {
            name,
            author: ask(prompter, AUTHOR_LABEL)?,
            description: ask(prompter, DESCRIPTION_LABEL)?,
            url: ask(prompter, URL_LABEL)?,
            email: ask(prompter, EMAIL_LABEL)?,
            license: Some(ask(prompter, LICENSE_LABEL)?),
        };
        Self::create(fields)
    }
}

fn ask(prompter: &mut dyn Prompter, label: &str) -> Result<String> {
    prompter.prompt(label).map_err(|source| {
        Box::new(Error::Input {
            label: label.to_string(),
            source,
        })
    })
}
