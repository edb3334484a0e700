//! Terminal prompts for interactive manifest creation.

use std::io;

use c3pm_manifest::Prompter;
use dialoguer::{Input, theme::ColorfulTheme};

/// Asks questions on the terminal with dialoguer.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)
    }

    fn report(&mut self, message: &str) {
        eprintln!(
            "{} {}",
            self.theme.error_prefix,
            self.theme.error_style.apply_to(message)
        );
    }
}
