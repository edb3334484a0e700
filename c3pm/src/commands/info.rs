use c3pm_manifest::Manifest;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InfoCommand {}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::open().unwrap_or_exit();

        let fields = [
            ("Name", Some(manifest.name())),
            ("Version", manifest.version()),
            ("Author", manifest.author()),
            ("Description", manifest.description()),
            ("URL", manifest.url()),
            ("E-mail", manifest.email()),
            ("License", manifest.license()),
        ];
        for (label, value) in fields {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                println!("{:<12} {}", format!("{}:", label), value);
            }
        }

        let dependencies = manifest.dependencies();
        println!("{:<12} {}", "Dependencies:", dependencies.len());
        for dependency in dependencies {
            match dependency.as_str() {
                Some(s) => println!("  - {}", s),
                None => println!("  - {}", dependency),
            }
        }

        if let Some(schema) = manifest.schema_version() {
            println!("{:<12} {}", "Schema:", schema);
        }

        Ok(())
    }
}
