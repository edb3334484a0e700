use c3pm_manifest::Manifest;
use clap::Args;
use eyre::Result;
use tracing::debug;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct RenameCommand {
    /// New project name
    pub name: String,
}

impl RenameCommand {
    pub fn run(&self) -> Result<()> {
        let mut manifest = Manifest::open().unwrap_or_exit();

        let old_name = manifest.name().to_string();
        if old_name == self.name {
            eyre::bail!("Project is already named '{}'", self.name);
        }

        debug!(from = %old_name, to = %self.name, "renaming project");
        manifest.set_name(&self.name).unwrap_or_exit();
        manifest.write().unwrap_or_exit();

        println!("Renamed project '{}' to '{}'", old_name, self.name);
        Ok(())
    }
}
