use std::path::Path;

use c3pm_manifest::{MANIFEST_FILENAME, Manifest, ManifestSource};
use clap::Args;
use eyre::Result;
use tracing::debug;

use super::UnwrapOrExit;
use crate::prompt::TerminalPrompter;

#[derive(Args)]
pub struct InitCommand {
    /// Overwrite an existing c3pm.json
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        if Path::new(MANIFEST_FILENAME).exists() && !self.force {
            eyre::bail!(
                "{} already exists. Use `c3pm init --force` to replace it.",
                MANIFEST_FILENAME
            );
        }

        debug!(force = self.force, "creating manifest");
        let mut prompter = TerminalPrompter::new();
        let manifest = Manifest::load(ManifestSource::Fresh(&mut prompter)).unwrap_or_exit();
        manifest.write().unwrap_or_exit();

        println!("Created {} for '{}'", MANIFEST_FILENAME, manifest.name());
        Ok(())
    }
}
