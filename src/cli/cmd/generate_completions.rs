use clap::{Command, Parser};
use clap_complete::{generate, Shell};

/// Generates completions for some shells.
#[derive(Parser, Debug)]
pub struct Input {
    #[arg(long, value_enum)]
    pub shell: Shell,
}

impl Input {
    pub fn print_completions(&self, app: &mut Command) {
        generate(self.shell, app, "edgectl", &mut std::io::stdout());
    }
}
