//! Shell completions generation.

use std::io::Write;

use clap::{Args, CommandFactory};
use clap_complete::Shell;

/// Generate shell completions
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `shell`.
pub fn generate(shell: Shell, out: &mut dyn Write) {
    let mut cmd = super::Cli::command();
    clap_complete::generate(shell, &mut cmd, "hexmap", out);
}

pub fn run(args: CompletionsArgs) -> crate::error::Result<()> {
    generate(args.shell, &mut std::io::stdout());
    Ok(())
}
