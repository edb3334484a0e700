mod check;
mod fmt;
mod info;
mod init;
mod rename;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use fmt::FmtCommand;
use info::InfoCommand;
use init::InitCommand;
use rename::RenameCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for c3pm_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "c3pm")]
#[command(version)]
#[command(about = "Manage c3pm.json project manifests")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Rename(cmd) => cmd.run(),
            Commands::Fmt(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create c3pm.json in the current directory
    Init(InitCommand),

    /// Validate c3pm.json
    Check(CheckCommand),

    /// Show project information
    Info(InfoCommand),

    /// Change the project name
    Rename(RenameCommand),

    /// Rewrite c3pm.json with canonical indentation
    Fmt(FmtCommand),
}
