//! The `tokens` command: dump a file's token stream.
//!
//! Debugging aid for rule development; the output format is not stable.

use std::path::Path;

/// Print one line per token. Returns the process exit code.
pub fn run_tokens(path: &str) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: cannot read {path}: {error}");
            return 1;
        }
    };
    match phlox_lexer::tokenize(&source) {
        Ok(stream) => {
            for (index, token) in stream.iter().enumerate() {
                let kind = format!("{:?}", token.kind());
                println!("{index:4}  {kind:<12} {:?}", token.content());
            }
            0
        }
        Err(error) => {
            let name = Path::new(path)
                .file_name()
                .map_or_else(|| path.to_string(), |n| n.to_string_lossy().into_owned());
            eprintln!("error: {name}: {error}");
            1
        }
    }
}
