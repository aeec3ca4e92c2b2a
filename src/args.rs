// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    author,
    name = "ttyupper",
    about = "Convert string literals of C files to uppercase for teletype output.",
    after_help = "Format specifiers (like %d), escape sequences (like \\n) and strings \
        looking like file names or paths are kept unchanged."
)]
#[command(version)]
pub struct Cli {
    /// Directory containing the C files (*.c), not scanned recursively
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Display the files that would be modified, without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Output format.
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    /// Human readable text format
    Human,

    /// JSON
    Json,
}
