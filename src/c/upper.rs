// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion of the content of C string literals to uppercase.

use std::borrow::Cow;

use crate::c::run::{RunKind, RunPos};

/// Substrings found in file names and paths: `.h`, `.c`, `/` and an escaped
/// backslash (`\\` in the source, like in `"C:\\dir"`).
const PATH_MARKERS: [&str; 4] = [".h", ".c", "/", "\\\\"];

pub trait UpperLiteralExt {
    fn is_path_like(&self) -> bool;
    fn upper_runs(&self) -> String;
    fn upper_literal(&self) -> Cow<'_, str>;
}

impl UpperLiteralExt for str {
    /// Return `true` if the string looks like a file name or a path.
    ///
    /// The check is coarse: any string containing one of the markers, even in the
    /// middle of a sentence, is considered a path.
    fn is_path_like(&self) -> bool {
        PATH_MARKERS.iter().any(|marker| self.contains(marker))
    }

    /// Convert plain text to uppercase, keeping format specifiers and escape
    /// sequences unchanged.
    fn upper_runs(&self) -> String {
        let mut out = String::with_capacity(self.len());
        for run in RunPos::new(self) {
            match run.kind {
                RunKind::Format | RunKind::Escape => out.push_str(run.s),
                RunKind::Plain => out.extend(run.s.chars().flat_map(char::to_uppercase)),
            }
        }
        out
    }

    /// Convert the content of a string literal (without the double quotes) to
    /// uppercase, unless it looks like a file name or a path.
    fn upper_literal(&self) -> Cow<'_, str> {
        if self.is_path_like() {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(self.upper_runs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_like() {
        assert!("stdio.h".is_path_like());
        assert!("main.c".is_path_like());
        assert!("see main.c for details".is_path_like());
        assert!("/dev/tty".is_path_like());
        assert!("and/or".is_path_like());
        assert!("C:\\\\temp".is_path_like());
        assert!(!"hello world".is_path_like());
        assert!(!"line1\\nline2".is_path_like());
        assert!(!"%d.%d".is_path_like());
        assert!(!"file.txt".is_path_like());
    }

    #[test]
    fn test_plain() {
        assert_eq!("".upper_literal(), "");
        assert_eq!("hello world".upper_literal(), "HELLO WORLD");
        assert_eq!("Already UPPER 123!".upper_literal(), "ALREADY UPPER 123!");
    }

    #[test]
    fn test_path_unchanged() {
        for s in [
            "stdio.h",
            "see main.c for details",
            "output/result.txt",
            "C:\\\\games\\\\ship",
            "check the .header",
        ] {
            assert!(matches!(s.upper_literal(), Cow::Borrowed(_)));
            assert_eq!(s.upper_literal(), s);
        }
    }

    #[test]
    fn test_formats_kept() {
        assert_eq!("hello %s".upper_literal(), "HELLO %s");
        assert_eq!(
            "x=%d, y=%5.2f, p=%p".upper_literal(),
            "X=%d, Y=%5.2f, P=%p"
        );
        assert_eq!("%lu bytes".upper_literal(), "%lu BYTES");
        assert_eq!("%x%X%o".upper_literal(), "%x%X%O");
    }

    #[test]
    fn test_formats_greedy() {
        // Letters of the format alphabet following a specifier are kept as-is.
        assert_eq!(
            "value: %-5.2fd done".upper_literal(),
            "VALUE: %-5.2fd dONE"
        );
        assert_eq!("%d items".upper_literal(), "%d iTEMS");
        assert_eq!("100%% done".upper_literal(), "100%% dONE");
    }

    #[test]
    fn test_format_alphabet_outside_format() {
        assert_eq!("s d c f".upper_literal(), "S D C F");
    }

    #[test]
    fn test_trailing_percent() {
        assert_eq!("%".upper_literal(), "%");
        assert_eq!("done 100%".upper_literal(), "DONE 100%");
    }

    #[test]
    fn test_escapes_kept() {
        assert_eq!("line1\\nline2".upper_literal(), "LINE1\\nLINE2");
        assert_eq!("\\tindent\\r\\n".upper_literal(), "\\tINDENT\\r\\n");
        assert_eq!("say \\\"hi\\\"".upper_literal(), "SAY \\\"HI\\\"");
        assert_eq!("\\x1b[0m reset".upper_literal(), "\\x1B[0M RESET");
        assert_eq!("trailing \\".upper_literal(), "TRAILING \\");
    }

    #[test]
    fn test_unicode() {
        assert_eq!("héllo, мир! 你好".upper_literal(), "HÉLLO, МИР! 你好");
        assert_eq!("straße".upper_literal(), "STRASSE");
        assert_eq!("%é".upper_literal(), "%É");
    }

    #[test]
    fn test_idempotent() {
        for s in [
            "hello world",
            "line1\\nline2",
            "value: %-5.2fd done",
            "score: %3d/%3d",
            "%s: turn %d, %c%c\\n",
            "trailing %",
        ] {
            let once = s.upper_literal().into_owned();
            assert_eq!(once.upper_literal(), once, "not idempotent for {s:?}");
        }
    }
}
