//! Phlox Rules
//!
//! The fixer rules and their scheduling machinery.
//!
//! # Architecture
//!
//! Each rule is a struct implementing the [`Rule`] trait: a candidacy
//! gate, a scheduling priority, a risk flag, and an in-place stream
//! rewrite. The [`Registry`] owns configured rule instances, orders them
//! by priority, and enforces the risky opt-in. Configuration is plain
//! data ([`FixConfig`]) deserialized by the driver and passed down at
//! construction; the line-ending/indent policy is injected per `apply`
//! call.
//!
//! # Rules
//!
//! - [`DeclareStrictTypes`]: force `declare(strict_types=1);` as the
//!   first statement (risky, priority 2)
//! - [`DeclareEqualNormalize`]: spacing around `=` in `declare(...)`
//!   (priority 0, depends on the directive's final position)

pub mod config;
mod equal_normalize;
pub mod registry;
pub mod rule;
mod strict_types;

pub use config::{
    EqualNormalizeConfig, EqualsSpace, FixConfig, LineEndingConfig, RelocateTo, RulesConfig,
    StrictTypesConfig,
};
pub use equal_normalize::DeclareEqualNormalize;
pub use registry::Registry;
pub use rule::Rule;
pub use strict_types::DeclareStrictTypes;
