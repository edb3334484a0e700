use c3pm_manifest::{MANIFEST_FILENAME, Manifest, ManifestSource};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::load(ManifestSource::File).unwrap_or_exit();
        println!("{} is valid (project '{}')", MANIFEST_FILENAME, manifest.name());
        Ok(())
    }
}
