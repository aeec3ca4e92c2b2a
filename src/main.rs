// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ttyupper converts the string literals of C files to uppercase, so that programs
//! can print on teletypes which only have uppercase letters.
//!
//! All files `*.c` of the directory (default: current directory) are converted,
//! after confirmation. In each string literal:
//!
//! - format specifiers (like `%d` or `%-5.2f`) are kept as-is
//! - escape sequences (like `\n` or `\"`) are kept as-is
//! - all other characters are converted to uppercase.
//!
//! Strings looking like file names or paths (containing `.h`, `.c`, `/` or `\\`)
//! are not converted.
//!
//! Each modified file is first saved with the extension `.bak`; renaming the backup
//! file restores the original file.

mod args;
mod c;
mod converter;
mod dir;
mod result;

use clap::Parser;

use crate::args::Cli;
use crate::converter::run_convert;

fn main() {
    let args = Cli::parse();
    std::process::exit(run_convert(&args));
}
