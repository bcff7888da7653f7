//! Rule registry and scheduler.
//!
//! Rules run in descending priority order (name as tiebreak, so a run
//! is deterministic). Risky rules are skipped unless the consumer
//! opted in.

use rustc_hash::FxHashSet;

use phlox_tokens::{TokenStream, WhitespacePolicy};

use crate::config::FixConfig;
use crate::equal_normalize::DeclareEqualNormalize;
use crate::rule::Rule;
use crate::strict_types::DeclareStrictTypes;

/// An ordered collection of fixer rules.
#[derive(Default)]
pub struct Registry {
    rules: Vec<Box<dyn Rule + Send + Sync>>,
    names: FxHashSet<&'static str>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in rule, configured from `config`.
    pub fn with_default_rules(config: &FixConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(DeclareStrictTypes::new(
            config.rules.declare_strict_types,
        )));
        registry.register(Box::new(DeclareEqualNormalize::new(
            config.rules.declare_equal_normalize,
        )));
        registry
    }

    /// Add a rule, keeping the collection sorted by scheduling order.
    ///
    /// # Panics
    ///
    /// Panics if a rule with the same name is already registered.
    pub fn register(&mut self, rule: Box<dyn Rule + Send + Sync>) {
        assert!(
            self.names.insert(rule.name()),
            "duplicate rule name: {}",
            rule.name()
        );
        self.rules.push(rule);
        self.rules
            .sort_by_key(|rule| (std::cmp::Reverse(rule.priority()), rule.name()));
    }

    /// Rule names in scheduling order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every applicable rule over the stream, in order. Returns the
    /// names of the rules that changed it.
    pub fn apply(
        &self,
        stream: &mut TokenStream,
        policy: &WhitespacePolicy,
        allow_risky: bool,
    ) -> Vec<&'static str> {
        let mut changed = Vec::new();
        for rule in &self.rules {
            if rule.is_risky() && !allow_risky {
                tracing::debug!(rule = rule.name(), "skipping risky rule without opt-in");
                continue;
            }
            if !rule.is_applicable(stream) {
                continue;
            }
            let before = stream.clone();
            rule.apply(stream, policy);
            if before != *stream {
                tracing::debug!(rule = rule.name(), "rule changed the stream");
                changed.push(rule.name());
            }
        }
        changed
    }
}
