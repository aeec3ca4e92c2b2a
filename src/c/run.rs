// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run iterator: split the content of a string literal into format specifiers,
//! escape sequences and plain text.

use memchr::memchr2;

/// Characters consumed after `%`: flags, width, precision, length modifiers and
/// conversion letters.
const FORMAT_CHARS: &[u8] = b"sdcfxXeEgGpnui-+ #0123456789.lLhz";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunKind {
    /// `%` followed by any number of format characters, kept as-is.
    Format,
    /// Backslash followed by one character, kept as-is.
    Escape,
    /// Anything else, converted.
    Plain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRun<'a> {
    pub s: &'a str,
    pub kind: RunKind,
}

pub struct RunPos<'a> {
    s: &'a str,
    len: usize,
    pos: usize,
}

impl<'a> RunPos<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            len: s.len(),
            pos: 0,
        }
    }

    /// Return the kind of the run starting at `pos`.
    ///
    /// A `%` or a backslash on the last character is plain text.
    #[inline]
    fn kind_at(&self, pos: usize) -> RunKind {
        if pos + 1 >= self.len {
            return RunKind::Plain;
        }
        match self.s.as_bytes()[pos] {
            b'%' => RunKind::Format,
            b'\\' => RunKind::Escape,
            _ => RunKind::Plain,
        }
    }

    /// Find the end of the format specifier starting with `%` at `pos`.
    #[inline]
    fn find_end_format(&self, pos: usize) -> usize {
        let bytes = self.s.as_bytes();
        let mut pos_end = pos + 1;
        while pos_end < self.len && FORMAT_CHARS.contains(&bytes[pos_end]) {
            pos_end += 1;
        }
        pos_end
    }

    /// Find the end of the escape sequence starting with a backslash at `pos`.
    #[inline]
    fn find_end_escape(&self, pos: usize) -> usize {
        match self.s[pos + 1..].chars().next() {
            Some(c) => pos + 1 + c.len_utf8(),
            None => self.len,
        }
    }

    /// Find the end of the plain text starting at `pos`: it stops on the next `%` or
    /// backslash which is not the last character.
    fn find_end_plain(&self, pos: usize) -> usize {
        let next = pos + self.s[pos..].chars().next().map_or(1, char::len_utf8);
        match memchr2(b'%', b'\\', &self.s.as_bytes()[next..]) {
            Some(idx) if next + idx + 1 < self.len => next + idx,
            _ => self.len,
        }
    }
}

impl<'a> Iterator for RunPos<'a> {
    type Item = MatchRun<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.len {
            return None;
        }
        let start = self.pos;
        let kind = self.kind_at(start);
        self.pos = match kind {
            RunKind::Format => self.find_end_format(start),
            RunKind::Escape => self.find_end_escape(start),
            RunKind::Plain => self.find_end_plain(start),
        };
        Some(MatchRun {
            s: &self.s[start..self.pos],
            kind,
        })
    }
}
