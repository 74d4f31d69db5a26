//! Command: print a shell completion script.
use clap::CommandFactory as _;

use crate::cli::{Cli, CompletionsOpts};

/// Write the completion script for the requested shell to stdout.
pub fn run(opts: &CompletionsOpts) {
    let mut cmd = Cli::command();
    clap_complete::generate(opts.shell, &mut cmd, "devtools-setup", &mut std::io::stdout());
}
