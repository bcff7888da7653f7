//! The `declare_strict_types` rule.
//!
//! Forces a canonical `declare(strict_types=1);` at the top of every
//! candidate file: inserts it when missing, lowercases the keyword and
//! identifier and coerces the value to `1` when present, and optionally
//! moves a directive that is not the first statement to sit directly
//! after the opening tag.
//!
//! The rule is risky: coercing an existing `strict_types=0` to `1`
//! changes how the runtime handles type juggling, so the registry only
//! runs it when the consumer opted in.
//!
//! Must run before rules that normalize blank lines after the opening
//! tag, spacing around the declare `=`, or file header comments: they
//! all assume the directive's final position and casing.

use std::sync::OnceLock;

use smallvec::SmallVec;

use phlox_tokens::{Token, TokenKind, TokenMatcher, TokenStream, WhitespacePolicy};

use crate::config::{RelocateTo, StrictTypesConfig};
use crate::rule::Rule;

/// Structural shape of the directive: trivia may sit between elements,
/// casing of the keyword and identifier is free, the value is any
/// numeric literal.
const DIRECTIVE_PATTERN: [TokenMatcher; 6] = [
    TokenMatcher::keyword("declare"),
    TokenMatcher::punct("("),
    TokenMatcher::ident("strict_types"),
    TokenMatcher::punct("="),
    TokenMatcher::any_number(),
    TokenMatcher::punct(")"),
];

/// The canonical directive, without its terminating `;`. Built once,
/// immutable afterwards, shared by every stream processed in the
/// process.
fn canonical_run() -> &'static [Token] {
    static RUN: OnceLock<[Token; 6]> = OnceLock::new();
    RUN.get_or_init(|| {
        [
            Token::new(TokenKind::Keyword, "declare"),
            Token::new(TokenKind::Punct, "("),
            Token::new(TokenKind::Ident, "strict_types"),
            Token::new(TokenKind::Punct, "="),
            Token::new(TokenKind::Number, "1"),
            Token::new(TokenKind::Punct, ")"),
        ]
    })
}

/// Where the directive was found, if anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LocateResult {
    /// Nothing meaningful follows the opening tag.
    Empty,
    /// Meaningful tokens exist but none of them start the directive.
    NoMatch,
    /// The directive occupies this inclusive index span (interior trivia
    /// included).
    Matched { start: usize, end: usize },
}

/// Find the directive anywhere at or after the first meaningful token.
fn locate(stream: &TokenStream) -> LocateResult {
    let Some(first) = stream.next_meaningful(0) else {
        return LocateResult::Empty;
    };
    match stream.find_sequence(&DIRECTIVE_PATTERN, first) {
        Some((start, end)) => LocateResult::Matched { start, end },
        None => LocateResult::NoMatch,
    }
}

/// Lowercase the keyword and identifier, coerce the value to `1`.
///
/// The value rewrite is unconditional: any literal, even an explicit
/// `0`, becomes `1`. This is the rewrite that makes the rule risky.
fn normalize(stream: &mut TokenStream, start: usize, end: usize) {
    for index in start..=end {
        let Some(token) = stream.get(index) else { break };
        match token.kind() {
            TokenKind::Keyword | TokenKind::Ident => {
                if token.content().bytes().any(|b| b.is_ascii_uppercase()) {
                    let lowered = token.content().to_ascii_lowercase();
                    let kind = token.kind();
                    stream.replace(index, Token::new(kind, lowered));
                }
            }
            TokenKind::Number => {
                if token.content() != "1" {
                    stream.replace(index, Token::new(TokenKind::Number, "1"));
                }
                // The literal is the last element that needs rewriting.
                break;
            }
            _ => {}
        }
    }
}

/// Splice `run` plus a terminator directly after the opening tag and
/// re-flow the surrounding whitespace.
fn insert_run(stream: &mut TokenStream, run: &[Token], policy: &WhitespacePolicy) {
    let Some(marker) = stream.first() else { return };
    let marker_kind = marker.kind();
    let original = marker.content().to_string();

    // The directive needs its own line before any same-line adjustment.
    stream.replace(
        0,
        Token::new(
            marker_kind,
            format!("{}{}", original.trim_end(), policy.line_ending()),
        ),
    );

    let mut spliced: SmallVec<[Token; 8]> = SmallVec::from_iter(run.iter().cloned());
    spliced.push(Token::new(TokenKind::Punct, ";"));
    let inserted = spliced.len();
    stream.insert_at(1, spliced);

    // A tag that already spanned onto a new line keeps the file compact:
    // the directive joins the tag's line instead.
    if original.contains('\n') {
        stream.replace(0, Token::new(marker_kind, format!("{} ", original.trim_end())));
    }

    let after = 1 + inserted;
    if after >= stream.len() {
        // Nothing follows the directive; end-of-file blank lines are
        // another rule's concern.
        return;
    }
    let Some(next) = stream.get(after) else { return };
    if next.is_whitespace() {
        // Keep the following content's blank line and indentation, on a
        // fresh line after the directive.
        let content = format!("{}{}", policy.line_ending(), next.content());
        stream.replace(after, Token::new(TokenKind::Whitespace, content));
    } else {
        stream.insert_at(
            after,
            [Token::new(TokenKind::Whitespace, policy.line_ending())],
        );
    }
}

/// Move the matched directive to sit directly after the opening tag.
///
/// Interior comments travel with the directive; interior whitespace and
/// the old terminator dissolve into the whitespace around the old site.
fn relocate(
    stream: &mut TokenStream,
    start: usize,
    end: usize,
    policy: &WhitespacePolicy,
) {
    let run: Vec<Token> = (start..=end)
        .filter_map(|index| stream.get(index))
        .filter(|token| !token.is_whitespace())
        .cloned()
        .collect();

    let mut doomed: Vec<usize> = (start..=end)
        .filter(|&index| stream.get(index).is_some_and(|t| !t.is_whitespace()))
        .collect();
    if let Some(terminator) = stream.next_meaningful(end) {
        if stream
            .get(terminator)
            .is_some_and(|t| t.is_kind(TokenKind::Punct) && t.content() == ";")
        {
            doomed.push(terminator);
        }
    }
    stream.remove_and_merge(&doomed);

    insert_run(stream, &run, policy);
}

/// Force the opening tag to end per the configured placement mode.
fn fix_marker_placement(stream: &mut TokenStream, mode: RelocateTo, policy: &WhitespacePolicy) {
    let tail = match mode {
        RelocateTo::None => return,
        RelocateTo::NextLine => policy.line_ending(),
        RelocateTo::SameLine => " ",
    };
    let Some(marker) = stream.first() else { return };
    let kind = marker.kind();
    let content = format!("{}{}", marker.content().trim_end(), tail);
    if marker.content() != content {
        stream.replace(0, Token::new(kind, content));
    }
}

/// Force `declare(strict_types=1);` as the file's first statement.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclareStrictTypes {
    config: StrictTypesConfig,
}

impl DeclareStrictTypes {
    pub fn new(config: StrictTypesConfig) -> Self {
        Self { config }
    }
}

impl Rule for DeclareStrictTypes {
    fn name(&self) -> &'static str {
        "declare_strict_types"
    }

    /// Before `blank_line_after_opening_tag` (priority 1),
    /// `declare_equal_normalize` and `header_comment` (priority 0).
    fn priority(&self) -> i32 {
        2
    }

    /// Forcing strict types stops non-strict code from working.
    fn is_risky(&self) -> bool {
        true
    }

    /// Only files whose very first token is an opening tag are
    /// candidates; markup prefixes and `<?=` openers are left alone.
    fn is_applicable(&self, stream: &TokenStream) -> bool {
        stream.first().is_some_and(|t| t.is_kind(TokenKind::OpenTag))
    }

    fn apply(&self, stream: &mut TokenStream, policy: &WhitespacePolicy) {
        if !self.is_applicable(stream) {
            return;
        }
        match locate(stream) {
            LocateResult::Empty | LocateResult::NoMatch => {
                if self.config.add_missing {
                    tracing::debug!("inserting missing strict_types directive");
                    insert_run(stream, canonical_run(), policy);
                    fix_marker_placement(stream, self.config.relocate_to, policy);
                }
            }
            LocateResult::Matched { start, end } => {
                if self.config.add_missing {
                    normalize(stream, start, end);
                }
                // Position and value are orthogonal: a directive can be
                // corrected without moving, or moved without being wrong.
                if self.config.relocate_to != RelocateTo::None && start != 1 {
                    tracing::debug!(start, end, "relocating strict_types directive");
                    relocate(stream, start, end, policy);
                    fix_marker_placement(stream, self.config.relocate_to, policy);
                }
            }
        }
    }
}
