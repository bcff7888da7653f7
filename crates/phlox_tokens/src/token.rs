//! Token Definition
//!
//! A token is the smallest classified unit of PHP source text. Tokens are
//! immutable once constructed; a stream edit replaces a token wholesale
//! rather than mutating its content in place.

use std::fmt;

/// Classification of a token.
///
/// The fixer rules only care about a token being an opening marker, part
/// of the directive shape, or trivia; every other kind is just "some
/// meaningful token" to them. The lexer still distinguishes the full set
/// so that serialization is lossless and rules stay extensible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `<?php` plus the single whitespace character that follows it.
    OpenTag,
    /// `<?=` short echo tag. Never a candidacy marker.
    EchoTag,
    /// `?>` close tag.
    CloseTag,
    /// Raw text outside any PHP tag.
    InlineHtml,
    /// Reserved word (`declare`, `namespace`, ...). Lookup is
    /// case-insensitive; the content keeps the author's casing.
    Keyword,
    /// Identifier such as a function or constant name.
    Ident,
    /// `$`-prefixed variable.
    Variable,
    /// Integer or float literal.
    Number,
    /// Single- or double-quoted string literal, quotes included.
    Str,
    /// `//`, `#`, or `/* ... */` comment. Line comments do not include
    /// their terminating newline.
    Comment,
    /// Maximal run of spaces, tabs, and newlines.
    Whitespace,
    /// Any operator or delimiter, including `;`, `(`, `)`, and `=`.
    Punct,
}

impl TokenKind {
    /// Whitespace and comments are skipped when searching for meaningful
    /// tokens and when matching the directive sequence.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// An atomic lexical unit: a kind plus its literal source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    content: String,
}

impl Token {
    pub fn new(kind: TokenKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Case-insensitive content comparison, used for keyword and
    /// identifier matching (PHP keywords are case-insensitive).
    #[inline]
    pub fn content_eq_ignore_case(&self, other: &str) -> bool {
        self.content.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
