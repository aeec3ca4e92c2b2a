// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory utilities.

use std::path::{Path, PathBuf};

use colored::Colorize;
use ignore::WalkBuilder;

/// Find all C files (names ending with `.c`) directly in the given directory, sorted
/// by name.
///
/// The directory is not scanned recursively; hidden files are included and ignore
/// rules are not applied.
// A file named `.c` must match, which `Path::extension` does not allow.
#[allow(clippy::case_sensitive_file_extension_comparisons)]
pub fn find_c_files(dir: &Path) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(dir);
    builder
        .max_depth(Some(1))
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(Ord::cmp);

    let mut files = Vec::new();
    for entry in builder.build() {
        match entry {
            Ok(dirent) => {
                if dirent.depth() == 1
                    && dirent.file_type().is_some_and(|ft| ft.is_file())
                    && dirent
                        .file_name()
                        .to_str()
                        .is_some_and(|name| name.ends_with(".c"))
                {
                    files.push(
                        dirent
                            .path()
                            .strip_prefix("./")
                            .unwrap_or(dirent.path())
                            .to_path_buf(),
                    );
                }
            }
            Err(err) => {
                eprintln!("{}: could not read entry: {err}", "Warning".yellow());
            }
        }
    }
    files
}
