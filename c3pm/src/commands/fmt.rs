use c3pm_manifest::{MANIFEST_FILENAME, Manifest};
use clap::Args;
use eyre::Result;
use tracing::debug;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct FmtCommand {
    /// Check if file is formatted without making changes (exit 1 if not)
    #[arg(long)]
    pub check: bool,
}

impl FmtCommand {
    pub fn run(&self) -> Result<()> {
        let (manifest, content) = Manifest::open_with_source().unwrap_or_exit();
        let formatted = manifest.to_json_string();
        debug!(unchanged = content == formatted, "formatted manifest");

        if self.check {
            if content != formatted {
                eprintln!("error: {} is not formatted", MANIFEST_FILENAME);
                eprintln!("Run `c3pm fmt` to fix.");
                std::process::exit(1);
            }
            println!("{} is formatted", MANIFEST_FILENAME);
        } else if content == formatted {
            println!("{} is already formatted", MANIFEST_FILENAME);
        } else {
            manifest.write().unwrap_or_exit();
            println!("Formatted {}", MANIFEST_FILENAME);
        }

        Ok(())
    }
}
