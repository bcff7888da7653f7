//! CLI subcommand implementations.

mod fix;
mod tokens;

pub use fix::{run_fix, FileOutcome, FixOptions};
pub use tokens::run_tokens;
