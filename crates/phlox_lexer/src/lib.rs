//! Phlox Lexer
//!
//! Hand-written tokenizer turning raw PHP source into a
//! [`TokenStream`], and the only component that knows source text
//! exists. The scanner is lossless: every input byte lands in exactly
//! one token, so `tokenize(src)?.source() == src` for any accepted
//! input.
//!
//! The lexer covers the PHP subset a style fixer meets in practice:
//! inline HTML, open/echo/close tags, line and block comments, single-
//! and double-quoted strings, numeric literals, variables, identifiers
//! with case-insensitive keyword resolution, and the operator set.
//! Heredocs and attributes are out of scope.

mod error;
mod keywords;
mod scanner;

pub use error::LexError;
pub use keywords::is_keyword;

use phlox_tokens::TokenStream;
use scanner::Scanner;

/// Tokenize one file's source text.
///
/// Returns an error for inputs no valid PHP file contains (an
/// unterminated string or block comment, a null byte); everything
/// else tokenizes, including files with no PHP tag at all.
pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
    Scanner::new(source).run()
}
