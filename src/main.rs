// SPDX-License-Identifier: MIT
//
// quill: command-line host for the quill text-buffer services.
//
// The editor window is one host of the core crates; this binary is another.
// Each subcommand opens files into a BufferRegistry and drives one service:
//
//   quill-syntax → per-line highlight tokens, keyword completion
//   quill-editor → buffers, search/replace, goto-line, recent files, options
//
// Flow:
//
//   argv → clap → --set directives → EditorConfig
//                 subcommand       → commands::run → stdout
//
// Diagnostics go to stderr through tracing; see logging.rs.

mod cli;
mod commands;
mod logging;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let config = commands::build_config(&cli.set, &mut out)?;
    commands::run(&cli.command, &config, &mut out)?;
    out.flush()?;
    Ok(())
}
