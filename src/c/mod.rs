// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lexical support for C source files: string literals and their content.

pub mod literal;
pub mod run;
pub mod upper;
