//! The rule interface.
//!
//! Rules are composed behind this trait rather than inheriting from a
//! shared base: each one answers the scheduling questions (`priority`,
//! `is_risky`), guards itself with `is_applicable`, and rewrites the
//! stream in `apply`. The whitespace policy is injected per call so no
//! rule holds process-global formatting state.

use phlox_tokens::{TokenStream, WhitespacePolicy};

/// A single stream-rewriting fixer rule.
pub trait Rule {
    /// Stable snake_case rule name, used in configuration and reports.
    fn name(&self) -> &'static str;

    /// Scheduling weight. Higher runs earlier; rules whose output a rule
    /// depends on must carry a strictly higher priority.
    fn priority(&self) -> i32;

    /// Whether applying the rule can change program behavior (not just
    /// formatting). Risky rules only run when the consumer opted in.
    fn is_risky(&self) -> bool {
        false
    }

    /// Cheap gate deciding whether `apply` is worth calling. Must not
    /// mutate the stream.
    fn is_applicable(&self, stream: &TokenStream) -> bool;

    /// Rewrite the stream in place. Must be idempotent: applying twice
    /// yields the same stream as applying once.
    fn apply(&self, stream: &mut TokenStream, policy: &WhitespacePolicy);
}
