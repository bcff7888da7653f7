//! Keyword resolution.
//!
//! PHP reserved words are case-insensitive (`DECLARE` and `declare` are
//! the same keyword), so lookup lowercases first and then matches inside
//! a length bucket for fast rejection. The token keeps the author's
//! original casing; only the classification is affected.
//!
//! `true`, `false`, and `null` are deliberately absent: PHP lexes them
//! as plain identifiers, and so do we.

/// Check whether `text` is a PHP reserved word, ignoring ASCII case.
pub fn is_keyword(text: &str) -> bool {
    let len = text.len();
    // All reserved words are 2-12 chars of ASCII letters/underscore.
    if !(2..=12).contains(&len) || !text.bytes().all(|b| b.is_ascii_alphabetic() || b == b'_') {
        return false;
    }
    let lower = text.to_ascii_lowercase();
    match len {
        2 => matches!(lower.as_str(), "as" | "do" | "fn" | "if" | "or"),
        3 => matches!(
            lower.as_str(),
            "and" | "die" | "for" | "new" | "try" | "use" | "var" | "xor"
        ),
        4 => matches!(
            lower.as_str(),
            "case" | "echo" | "else" | "enum" | "eval" | "exit" | "goto" | "list"
        ),
        5 => matches!(
            lower.as_str(),
            "array" | "break" | "catch" | "class" | "clone" | "const" | "empty" | "endif"
                | "final" | "isset" | "match" | "print" | "throw" | "trait" | "unset" | "while"
                | "yield"
        ),
        6 => matches!(
            lower.as_str(),
            "elseif" | "endfor" | "global" | "public" | "return" | "static" | "switch"
        ),
        7 => matches!(
            lower.as_str(),
            "declare" | "default" | "extends" | "finally" | "foreach" | "include" | "private"
                | "require"
        ),
        8 => matches!(
            lower.as_str(),
            "abstract" | "callable" | "continue" | "endwhile" | "function" | "readonly"
        ),
        9 => matches!(
            lower.as_str(),
            "endswitch" | "insteadof" | "interface" | "namespace" | "protected"
        ),
        10 => matches!(
            lower.as_str(),
            "enddeclare" | "endforeach" | "implements" | "instanceof"
        ),
        12 => matches!(lower.as_str(), "include_once" | "require_once"),
        _ => false,
    }
}
