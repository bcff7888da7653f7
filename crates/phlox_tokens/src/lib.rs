//! Phlox Token Model
//!
//! Data model shared by the lexer and the fixer rules: tokens, the
//! mutable token stream a rule rewrites, declarative sequence matchers,
//! and the injected whitespace policy.
//!
//! # Modules
//!
//! - [`token`]: `Token` and `TokenKind`
//! - [`stream`]: `TokenStream` with positional edit operations
//! - [`matcher`]: `TokenMatcher` for sequence search
//! - [`policy`]: `WhitespacePolicy` and `LineEnding`

pub mod matcher;
pub mod policy;
pub mod stream;
pub mod token;

pub use matcher::{ContentMatch, TokenMatcher};
pub use policy::{LineEnding, WhitespacePolicy};
pub use stream::TokenStream;
pub use token::{Token, TokenKind};
