//! The `declare_equal_normalize` rule.
//!
//! Enforces the configured spacing around the `=` inside every
//! `declare(...)` statement, whichever directive it carries. Runs after
//! `declare_strict_types` (lower priority): it must see the directive's
//! final position and casing.

use phlox_tokens::{Token, TokenKind, TokenMatcher, TokenStream, WhitespacePolicy};

use crate::config::{EqualNormalizeConfig, EqualsSpace};
use crate::rule::Rule;

/// `declare` followed by its opening parenthesis.
const DECLARE_OPENER: [TokenMatcher; 2] = [
    TokenMatcher::keyword("declare"),
    TokenMatcher::punct("("),
];

/// Collect the indices of every top-level `=` inside `declare(...)`
/// parentheses, across the whole stream.
fn collect_declare_equals(stream: &TokenStream) -> Vec<usize> {
    let mut equals = Vec::new();
    let mut search = 0;
    while let Some((_, open_paren)) = stream.find_sequence(&DECLARE_OPENER, search) {
        let mut depth = 1_u32;
        let mut index = open_paren + 1;
        while index < stream.len() && depth > 0 {
            if let Some(token) = stream.get(index) {
                if token.is_kind(TokenKind::Punct) {
                    match token.content() {
                        "(" => depth += 1,
                        ")" => depth -= 1,
                        "=" if depth == 1 => equals.push(index),
                        _ => {}
                    }
                }
            }
            index += 1;
        }
        search = index;
    }
    equals
}

fn is_whitespace_at(stream: &TokenStream, index: usize) -> bool {
    stream.get(index).is_some_and(Token::is_whitespace)
}

/// Drop the whitespace token at `index` if there is one.
fn strip_whitespace_at(stream: &mut TokenStream, index: usize) {
    if is_whitespace_at(stream, index) {
        stream.remove_and_merge(&[index]);
    }
}

/// Force exactly one space at `check`, inserting a fresh token at
/// `insert_at` when `check` holds something meaningful. The two differ
/// on the before side of `=`: the space to fix sits at `index - 1`, but
/// a missing one is inserted at `index`.
fn single_space_at(stream: &mut TokenStream, check: usize, insert_at: usize) {
    if is_whitespace_at(stream, check) {
        if stream.get(check).is_some_and(|t| t.content() != " ") {
            stream.replace(check, Token::new(TokenKind::Whitespace, " "));
        }
    } else {
        stream.insert_at(insert_at, [Token::new(TokenKind::Whitespace, " ")]);
    }
}

/// Normalize spacing around `=` in `declare(...)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclareEqualNormalize {
    config: EqualNormalizeConfig,
}

impl DeclareEqualNormalize {
    pub fn new(config: EqualNormalizeConfig) -> Self {
        Self { config }
    }
}

impl Rule for DeclareEqualNormalize {
    fn name(&self) -> &'static str {
        "declare_equal_normalize"
    }

    /// After `declare_strict_types` (priority 2).
    fn priority(&self) -> i32 {
        0
    }

    fn is_applicable(&self, stream: &TokenStream) -> bool {
        stream
            .iter()
            .any(|t| t.is_kind(TokenKind::Keyword) && t.content_eq_ignore_case("declare"))
    }

    fn apply(&self, stream: &mut TokenStream, _policy: &WhitespacePolicy) {
        let equals = collect_declare_equals(stream);
        // Highest index first: each edit only shifts positions above it.
        for &index in equals.iter().rev() {
            tracing::trace!(index, "normalizing spacing around declare '='");
            match self.config.space {
                EqualsSpace::None => {
                    // After side first so the before side's removal does
                    // not shift it.
                    strip_whitespace_at(stream, index + 1);
                    strip_whitespace_at(stream, index - 1);
                }
                EqualsSpace::Single => {
                    single_space_at(stream, index + 1, index + 1);
                    single_space_at(stream, index - 1, index);
                }
            }
        }
    }
}
