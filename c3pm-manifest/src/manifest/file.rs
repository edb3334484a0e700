use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{Manifest, parse::parse_manifest};
use crate::{Error, MANIFEST_FILENAME, Result};

impl Manifest {
    /// Read and parse `c3pm.json` from the working directory.
    pub fn open() -> Result<Self> {
        Self::open_in(".")
    }

    /// Read and parse `c3pm.json` from the given directory.
    pub fn open_in(dir: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_source_in(dir).map(|(manifest, _)| manifest)
    }

    /// Like [`Manifest::open`], also returning the file text as read.
    pub fn open_with_source() -> Result<(Self, String)> {
        Self::open_with_source_in(".")
    }

    /// Like [`Manifest::open_in`], also returning the file text as read.
    pub fn open_with_source_in(dir: impl AsRef<Path>) -> Result<(Self, String)> {
        let path = manifest_path(dir.as_ref());
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Box::new(Error::NotFound { path: path.clone() }),
            _ => Box::new(Error::Io {
                path: path.clone(),
                source: e,
            }),
        })?;
        debug!(path = %path.display(), "read manifest");
        let manifest = parse_manifest(&content, &path.display().to_string())?;
        Ok((manifest, content))
    }

    /// Write the manifest to `c3pm.json` in the working directory.
    pub fn write(&self) -> Result<()> {
        self.write_in(".")
    }

    /// Write the manifest to `c3pm.json` in the given directory, replacing
    /// any existing content.
    pub fn write_in(&self, dir: impl AsRef<Path>) -> Result<()> {
        let path = manifest_path(dir.as_ref());
        std::fs::write(&path, self.to_json_string()).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        debug!(path = %path.display(), name = self.name(), "wrote manifest");
        Ok(())
    }
}

/// Path of the manifest file inside `dir`.
fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILENAME)
}
