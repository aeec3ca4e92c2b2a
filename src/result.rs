// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display conversion result.

use std::path::PathBuf;

use colored::Colorize;

use crate::{
    args::{Cli, OutputFormat},
    converter::ConvertResult,
};

/// Display the banner.
pub fn display_banner() {
    println!("{}", "=".repeat(60));
    println!("{}", "UPPERCASE CONVERTER FOR TELETYPE OUTPUT".bold());
    println!("{}", "=".repeat(60));
    println!();
}

/// Display the C files found.
pub fn display_files(files: &[PathBuf]) {
    println!("Found {} C file(s):", files.len());
    for file in files {
        println!("  - {}", file.display());
    }
    println!();
}

fn literals_info(result: &ConvertResult) -> String {
    format!("{}/{} literals converted", result.converted, result.literals)
}

/// Display the result of the conversion of one file.
pub fn display_file_result(result: &ConvertResult, dry_run: bool) {
    if !result.modified {
        println!("  {} No changes needed", "-".dimmed());
        return;
    }
    if dry_run {
        println!(
            "  {} Would update: {} ({})",
            "✓".green(),
            result.path.display(),
            literals_info(result)
        );
        return;
    }
    if let Some(backup) = &result.backup {
        println!("  {} Backup created: {}", "✓".green(), backup.display());
    }
    println!(
        "  {} Updated: {} ({})",
        "✓".green(),
        result.path.display(),
        literals_info(result)
    );
}

/// Display the result of the conversion in JSON format.
fn display_result_json(result: &[ConvertResult]) {
    println!("{}", serde_json::to_string(result).unwrap_or_default());
}

/// Display the summary in human format.
fn display_summary_human(result: &[ConvertResult], dry_run: bool) {
    let modified = result.iter().filter(|r| r.modified).count();
    println!("{}", "-".repeat(60));
    println!();
    if dry_run {
        println!(
            "{} {modified} file(s) would be modified, nothing written.",
            "DRY RUN:".bold()
        );
        println!();
        return;
    }
    println!(
        "{} Modified {modified} file(s).",
        "COMPLETE!".bright_green().bold()
    );
    println!();
    println!("Backup files (.bak) have been created for all modified files.");
    println!("To restore original files, rename the .bak files.");
    println!();
}

/// Display the result of the conversion and return the exit code.
pub fn display_result(result: &[ConvertResult], args: &Cli) -> i32 {
    match args.output {
        OutputFormat::Human => display_summary_human(result, args.dry_run),
        OutputFormat::Json => display_result_json(result),
    }
    0
}
