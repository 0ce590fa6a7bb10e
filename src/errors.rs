//! Error Types
//!
//! This module defines the error types used throughout the baker.
//!
//! # Overview
//!
//! The main error type [`BakeError`] covers all failure modes:
//! - Malformed wanted-variant specifications
//! - Shader names that cannot be resolved by the external lookup
//! - Capability-oracle failures
//!
//! Configuration-level errors (`InvalidVariantSpec`, `UnresolvedShader`) are
//! recoverable: the offending unit is logged and skipped so the rest of the
//! run completes. `OracleFailure` is fatal — once the oracle itself cannot
//! evaluate a combination, the validity of the whole output is unknown and
//! the build aborts.
//!
//! All public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, BakeError>`.

use thiserror::Error;

use crate::pass::PassType;

/// The main error type for variant baking.
#[derive(Error, Debug)]
pub enum BakeError {
    // ========================================================================
    // Configuration Errors (recoverable: log and skip the offending unit)
    // ========================================================================
    /// A wanted variant's option-group string yields zero choices.
    #[error("invalid wanted variant for pass {pass}: option group '{group}' has no choices")]
    InvalidVariantSpec {
        /// The render pass of the offending wanted variant
        pass: PassType,
        /// The raw option-group string that produced no choices
        group: String,
    },

    /// A configured shader name could not be resolved by the external lookup.
    #[error("could not find shader '{0}'")]
    UnresolvedShader(String),

    // ========================================================================
    // Oracle Errors (fatal: abort the build)
    // ========================================================================
    /// The capability oracle failed to evaluate a combination (distinct from
    /// rejecting it).
    #[error("capability oracle failure: {0}")]
    OracleFailure(String),
}

/// Alias for `Result<T, BakeError>`.
pub type Result<T> = std::result::Result<T, BakeError>;
