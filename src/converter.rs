// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion of C files.

use std::{
    error::Error,
    ffi::OsString,
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use colored::Colorize;
use serde::Serialize;

use crate::{
    args::{Cli, OutputFormat},
    c::literal::convert_literals,
    dir::find_c_files,
    result::{display_banner, display_file_result, display_files, display_result},
};

const QUESTION: &str = "Convert all string literals to uppercase? (y/n): ";

#[derive(Debug, Default, Serialize)]
pub struct ConvertResult {
    pub path: PathBuf,
    pub literals: usize,
    pub converted: usize,
    pub modified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
}

/// Return the path of the backup file: the path with `.bak` appended.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".bak");
    PathBuf::from(name)
}

/// Convert the string literals of a C file.
///
/// If the content changes, the original bytes are saved in the backup file then the
/// file is overwritten (nothing is written with `dry_run`).
pub fn convert_file(path: &Path, dry_run: bool) -> Result<ConvertResult, Box<dyn Error>> {
    let data =
        fs::read(path).map_err(|err| format!("could not read file {}: {err}", path.display()))?;
    let Some(source) = encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(&data)
    else {
        return Err(format!("invalid UTF-8 data in file {}", path.display()).into());
    };
    let conversion = convert_literals(&source);
    let mut result = ConvertResult {
        path: PathBuf::from(path),
        literals: conversion.literals,
        converted: conversion.converted,
        modified: conversion.is_changed(),
        ..Default::default()
    };
    if result.modified && !dry_run {
        let backup = backup_path(path);
        fs::write(&backup, &data).map_err(|err| {
            format!("could not write backup file {}: {err}", backup.display())
        })?;
        fs::write(path, conversion.text)
            .map_err(|err| format!("could not write file {}: {err}", path.display()))?;
        result.backup = Some(backup);
    }
    Ok(result)
}

/// Ask a yes/no question, return `true` if the answer is "y" (case insensitive).
///
/// End of input is a negative answer.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "{QUESTION}")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Ask for confirmation on the terminal; the question is sent to stderr when the
/// output format is JSON, so that stdout only contains JSON.
fn confirm_stdin(output: &OutputFormat) -> io::Result<bool> {
    let mut stdin = io::stdin().lock();
    match output {
        OutputFormat::Human => confirm(&mut stdin, &mut io::stdout()),
        OutputFormat::Json => confirm(&mut stdin, &mut io::stderr()),
    }
}

/// Convert all C files of the directory and display the result.
pub fn run_convert(args: &Cli) -> i32 {
    let human = args.output == OutputFormat::Human;
    if human {
        display_banner();
    }
    let c_files = find_c_files(&args.dir);
    if c_files.is_empty() {
        eprintln!(
            "{}: no .c files found in directory {}",
            "Error".bright_red().bold(),
            args.dir.display()
        );
        return 1;
    }
    if human {
        display_files(&c_files);
    }
    if !args.yes && !args.dry_run {
        match confirm_stdin(&args.output) {
            Ok(true) => {}
            Ok(false) => {
                if human {
                    println!("Operation cancelled.");
                }
                return 0;
            }
            Err(err) => {
                eprintln!(
                    "{}: could not read answer: {err}",
                    "Error".bright_red().bold()
                );
                return 1;
            }
        }
    }
    if human {
        println!();
        println!("{}", "-".repeat(60));
    }
    let mut results = Vec::with_capacity(c_files.len());
    for path in &c_files {
        if human {
            println!("Processing {}...", path.display());
        }
        match convert_file(path, args.dry_run) {
            Ok(result) => {
                if human {
                    display_file_result(&result, args.dry_run);
                }
                results.push(result);
            }
            Err(err) => {
                eprintln!("{}: {err}", "Error".bright_red().bold());
                return 1;
            }
        }
    }
    display_result(&results, args)
}
