//! Mutable token stream for one source file.
//!
//! The stream is the unit a rule transforms: an ordered, index-addressable
//! sequence of tokens. Edits are positional (replace, insert a run,
//! remove-and-merge); searches skip trivia. Serializing the stream
//! concatenates every token's content, so an untouched stream reproduces
//! its source byte-for-byte.
//!
//! # Invariant
//!
//! The lexer never emits two adjacent whitespace tokens, and
//! [`TokenStream::remove_and_merge`] re-establishes that after deletions.
//! Rules may therefore treat "the whitespace between two meaningful
//! tokens" as a single token.

use smallvec::SmallVec;

use crate::matcher::TokenMatcher;
use crate::token::{Token, TokenKind};

/// A removed-token run rarely exceeds a directive's worth of tokens.
type IndexRun = SmallVec<[usize; 8]>;

/// Ordered, mutable sequence of tokens representing one file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&Token> {
        self.tokens.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Replace the token at `index` wholesale.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; rules only replace positions
    /// they just located.
    pub fn replace(&mut self, index: usize, token: Token) {
        self.tokens[index] = token;
    }

    /// Splice a run of tokens in at `index`, shifting the rest right.
    pub fn insert_at(&mut self, index: usize, run: impl IntoIterator<Item = Token>) {
        self.tokens.splice(index..index, run);
    }

    /// Remove the tokens at `indices`, then merge whitespace tokens that
    /// became adjacent so no seam is visible in the serialized output.
    ///
    /// Callers removing a statement leave its interior whitespace tokens
    /// out of `indices`; their content then flows into the surrounding
    /// whitespace instead of vanishing.
    pub fn remove_and_merge(&mut self, indices: &[usize]) {
        let mut removed: IndexRun = indices.iter().copied().collect();
        removed.sort_unstable();
        removed.dedup();

        let mut out: Vec<Token> = Vec::with_capacity(self.tokens.len());
        for (index, token) in self.tokens.drain(..).enumerate() {
            if removed.binary_search(&index).is_ok() {
                continue;
            }
            if token.is_whitespace() {
                if let Some(previous) = out.last().filter(|t| t.is_whitespace()) {
                    let merged = format!("{}{}", previous.content(), token.content());
                    let last = out.len() - 1;
                    out[last] = Token::new(TokenKind::Whitespace, merged);
                    continue;
                }
            }
            out.push(token);
        }
        self.tokens = out;
    }

    /// Index of the first non-trivia token strictly after `index`.
    pub fn next_meaningful(&self, index: usize) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, token)| !token.is_trivia())
            .map(|(found, _)| found)
    }

    /// Find the first occurrence of `pattern` at or after `start`.
    ///
    /// Trivia is allowed between matched elements but never inside one:
    /// a match is a run of meaningful tokens satisfying the matchers in
    /// order, with only whitespace/comment tokens interleaved. Returns
    /// the inclusive index span of the match, trivia included.
    pub fn find_sequence(
        &self,
        pattern: &[TokenMatcher],
        start: usize,
    ) -> Option<(usize, usize)> {
        if pattern.is_empty() {
            return None;
        }
        let mut candidate = start;
        loop {
            let first = (candidate..self.tokens.len())
                .find(|&index| !self.tokens[index].is_trivia())?;
            if let Some(end) = self.match_at(first, pattern) {
                return Some((first, end));
            }
            candidate = first + 1;
        }
    }

    /// Attempt to match `pattern` with its first element exactly at
    /// `start` (which must be meaningful). Returns the index of the last
    /// matched element.
    fn match_at(&self, start: usize, pattern: &[TokenMatcher]) -> Option<usize> {
        let mut index = start;
        for (position, matcher) in pattern.iter().enumerate() {
            if position > 0 {
                index = self.next_meaningful(index)?;
            }
            if !matcher.matches(&self.tokens[index]) {
                return None;
            }
        }
        Some(index)
    }

    /// Serialize the stream back to source text.
    pub fn source(&self) -> String {
        let capacity = self.tokens.iter().map(|t| t.content().len()).sum();
        let mut out = String::with_capacity(capacity);
        for token in &self.tokens {
            out.push_str(token.content());
        }
        out
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
