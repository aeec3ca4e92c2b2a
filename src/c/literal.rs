// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! String literals in C source files.

use memchr::{memchr, memchr2};

use crate::c::upper::UpperLiteralExt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchLiteral<'a> {
    /// Content of the literal, without the double quotes.
    pub content: &'a str,
    /// Position of the opening double quote.
    pub start: usize,
    /// Position after the closing double quote.
    pub end: usize,
}

/// Iterator on the string literals of a C source, from left to right, without
/// overlap.
///
/// A backslash escapes the next character (except a line feed), so `\"` does not end
/// the literal. When no closing quote can be found for a double quote, the search
/// restarts just after it.
pub struct LiteralPos<'a> {
    s: &'a str,
    len: usize,
    pos: usize,
}

impl<'a> LiteralPos<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            len: s.len(),
            pos: 0,
        }
    }

    /// Find the closing double quote of a literal whose content starts at `pos`.
    fn find_closing_quote(&self, pos: usize) -> Option<usize> {
        let bytes = self.s.as_bytes();
        let mut pos_end = pos;
        loop {
            pos_end += memchr2(b'"', b'\\', &bytes[pos_end..])?;
            if bytes[pos_end] == b'"' {
                return Some(pos_end);
            }
            match self.s[pos_end + 1..].chars().next() {
                Some(c) if c != '\n' => pos_end += 1 + c.len_utf8(),
                _ => return None,
            }
        }
    }
}

impl<'a> Iterator for LiteralPos<'a> {
    type Item = MatchLiteral<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.len {
            let start = self.pos + memchr(b'"', &self.s.as_bytes()[self.pos..])?;
            if let Some(end_quote) = self.find_closing_quote(start + 1) {
                self.pos = end_quote + 1;
                return Some(MatchLiteral {
                    content: &self.s[start + 1..end_quote],
                    start,
                    end: self.pos,
                });
            }
            self.pos = start + 1;
        }
        None
    }
}

/// Result of the conversion of a C source.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Conversion {
    pub text: String,
    /// Number of string literals found.
    pub literals: usize,
    /// Number of string literals changed by the conversion.
    pub converted: usize,
}

impl Conversion {
    pub fn is_changed(&self) -> bool {
        self.converted > 0
    }
}

/// Convert all string literals of a C source to uppercase.
pub fn convert_literals(source: &str) -> Conversion {
    let mut conv = Conversion {
        text: String::with_capacity(source.len()),
        ..Default::default()
    };
    let mut pos = 0;
    for literal in LiteralPos::new(source) {
        conv.literals += 1;
        let upper = literal.content.upper_literal();
        if upper != literal.content {
            conv.converted += 1;
        }
        conv.text.push_str(&source[pos..literal.start]);
        conv.text.push('"');
        conv.text.push_str(&upper);
        conv.text.push('"');
        pos = literal.end;
    }
    conv.text.push_str(&source[pos..]);
    conv
}
