//! Fixer configuration.
//!
//! Deserialized from `phlox.toml` by the driver; every field has a
//! default so an absent file means "defaults everywhere". Unknown keys
//! are rejected rather than silently ignored.

use serde::Deserialize;

use phlox_tokens::{LineEnding, WhitespacePolicy};

/// Placement of the strict-types directive relative to the opening tag.
///
/// A closed three-way enum; there is no sentinel "unset" value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelocateTo {
    /// Leave a misplaced directive where it is.
    #[default]
    None,
    /// Move it onto the same source line as the opening tag.
    SameLine,
    /// Move it onto its own line right after the opening tag.
    NextLine,
}

/// Options for the `declare_strict_types` rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrictTypesConfig {
    /// Insert a missing directive, and correct the casing and value of
    /// an existing one.
    pub add_missing: bool,
    /// Whether and where to move a directive that is not the first
    /// statement.
    pub relocate_to: RelocateTo,
}

impl Default for StrictTypesConfig {
    fn default() -> Self {
        Self {
            add_missing: true,
            relocate_to: RelocateTo::None,
        }
    }
}

/// Spacing around the `=` inside `declare(...)` statements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EqualsSpace {
    /// `declare(strict_types=1)` (default).
    #[default]
    None,
    /// `declare(strict_types = 1)`.
    Single,
}

/// Options for the `declare_equal_normalize` rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EqualNormalizeConfig {
    /// Spacing to enforce around the assignment operator.
    pub space: EqualsSpace,
}

/// Per-rule option tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    pub declare_strict_types: StrictTypesConfig,
    pub declare_equal_normalize: EqualNormalizeConfig,
}

/// Line ending as written in configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineEndingConfig {
    #[default]
    Lf,
    Crlf,
}

impl From<LineEndingConfig> for LineEnding {
    fn from(value: LineEndingConfig) -> Self {
        match value {
            LineEndingConfig::Lf => LineEnding::Lf,
            LineEndingConfig::Crlf => LineEnding::CrLf,
        }
    }
}

fn default_indent() -> String {
    "    ".to_string()
}

/// Top-level fixer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixConfig {
    /// Run rules that can change program behavior. Off by default; the
    /// strict-types rule will not run without it.
    pub allow_risky: bool,
    /// Line ending written by whitespace-aware rules.
    pub line_ending: LineEndingConfig,
    /// Indent unit written by whitespace-aware rules.
    #[serde(default = "default_indent")]
    pub indent: String,
    /// Per-rule options.
    pub rules: RulesConfig,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            allow_risky: false,
            line_ending: LineEndingConfig::Lf,
            indent: default_indent(),
            rules: RulesConfig::default(),
        }
    }
}

impl FixConfig {
    /// Resolve the whitespace policy rules receive.
    pub fn whitespace_policy(&self) -> WhitespacePolicy {
        WhitespacePolicy::new(self.line_ending.into(), self.indent.clone())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn defaults_match_the_documented_table() {
        let config = FixConfig::default();
        assert!(!config.allow_risky);
        assert!(config.rules.declare_strict_types.add_missing);
        assert_eq!(
            config.rules.declare_strict_types.relocate_to,
            RelocateTo::None
        );
        assert_eq!(config.whitespace_policy().line_ending(), "\n");
    }

    #[test]
    fn snake_case_keys_deserialize() {
        let config: FixConfig = toml::from_str(
            "allow_risky = true\nline_ending = \"crlf\"\n\n[rules.declare_strict_types]\nadd_missing = true\nrelocate_to = \"next-line\"\n\n[rules.declare_equal_normalize]\nspace = \"single\"\n",
        )
        .unwrap();
        assert!(config.allow_risky);
        assert_eq!(config.whitespace_policy().line_ending(), "\r\n");
        assert_eq!(
            config.rules.declare_strict_types.relocate_to,
            RelocateTo::NextLine
        );
        assert_eq!(
            config.rules.declare_equal_normalize.space,
            EqualsSpace::Single
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed: Result<FixConfig, _> = toml::from_str("no_such_option = 1\n");
        assert!(parsed.is_err());
    }
}
