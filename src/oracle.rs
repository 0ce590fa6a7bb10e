//! Capability Oracle & Variant Validation
//!
//! The baker never implements shader compilation itself; whether a
//! (shader, pass, keywords) combination is actually compilable is answered by
//! a [`CapabilityOracle`] supplied by the hosting environment. The oracle
//! returns an explicit two-outcome [`Capability`] — rejection is an expected,
//! silent result, never an error or an exception in disguise.
//!
//! On top of the oracle, [`VariantValidator`] applies the empty-set allowlist:
//! certain internal fallback shaders are intentionally queried with no
//! keywords, and the oracle's rejection of that specific form is a false
//! negative. The allowlist only ever fires for the empty keyword set; a
//! rejected non-empty combination is invalid, no exceptions.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::keywords::KeywordSet;
use crate::pass::PassType;
use crate::shader::ShaderId;

/// Outcome of a capability query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The combination compiles; a variant can be emitted for it.
    Valid,
    /// The shader does not support this combination. Expected and silent.
    Invalid,
}

/// External authority answering "does compiling `shader`, pass `pass`, with
/// exactly these keywords succeed?".
///
/// `Ok(Capability::Invalid)` is the normal rejection path. `Err` means the
/// oracle itself failed to evaluate the combination; that surfaces as
/// [`BakeError::OracleFailure`] and aborts the build.
///
/// [`BakeError::OracleFailure`]: crate::errors::BakeError::OracleFailure
pub trait CapabilityOracle {
    /// Evaluates one (shader, pass, keywords) combination.
    fn check(
        &self,
        shader: ShaderId,
        pass: PassType,
        keywords: &KeywordSet,
    ) -> Result<Capability>;
}

/// Special-case shader names used by the validation and override policy.
///
/// Configuration data, not core logic: the defaults carry the platform's
/// internal shader names but every field can be overridden.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialShaders {
    /// Shaders whose oracle-rejected *empty* keyword set is forced valid.
    pub empty_set_allowlist: Vec<String>,
    /// The internal error fallback shader; its zero-keyword form is always
    /// emitted, bypassing validation entirely.
    pub fallback_shader: String,
    /// The video decode shader; exempt from the stereo keyword append.
    pub video_decode_shader: String,
}

impl Default for SpecialShaders {
    fn default() -> Self {
        Self {
            empty_set_allowlist: vec![
                "Hidden/InternalErrorShader".to_string(),
                "Hidden/VideoDecodeAndroid".to_string(),
            ],
            fallback_shader: "Hidden/InternalErrorShader".to_string(),
            video_decode_shader: "Hidden/VideoDecodeAndroid".to_string(),
        }
    }
}

/// Validates candidate combinations against the oracle, with the empty-set
/// allowlist as deterministic fallback.
pub struct VariantValidator<'a> {
    oracle: &'a dyn CapabilityOracle,
    allowlist: FxHashSet<ShaderId>,
}

impl<'a> VariantValidator<'a> {
    /// Creates a validator over an oracle and the special-case configuration.
    #[must_use]
    pub fn new(oracle: &'a dyn CapabilityOracle, special: &SpecialShaders) -> Self {
        let allowlist = special
            .empty_set_allowlist
            .iter()
            .map(|name| ShaderId::from_name(name))
            .collect();
        Self { oracle, allowlist }
    }

    /// Checks whether a combination should produce a variant.
    ///
    /// The oracle is authoritative. When it rejects, an *empty* keyword set
    /// is still valid for allowlisted shaders. Oracle errors propagate.
    pub fn is_valid(
        &self,
        shader: ShaderId,
        pass: PassType,
        keywords: &KeywordSet,
    ) -> Result<bool> {
        match self.oracle.check(shader, pass, keywords)? {
            Capability::Valid => Ok(true),
            Capability::Invalid => {
                if keywords.is_empty() && self.allowlist.contains(&shader) {
                    return Ok(true);
                }
                log::debug!("shader {shader} pass {pass} keywords '{keywords}' not found");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BakeError;

    struct RejectAll;

    impl CapabilityOracle for RejectAll {
        fn check(
            &self,
            _shader: ShaderId,
            _pass: PassType,
            _keywords: &KeywordSet,
        ) -> Result<Capability> {
            Ok(Capability::Invalid)
        }
    }

    struct Failing;

    impl CapabilityOracle for Failing {
        fn check(
            &self,
            _shader: ShaderId,
            _pass: PassType,
            _keywords: &KeywordSet,
        ) -> Result<Capability> {
            Err(BakeError::OracleFailure("device lost".to_string()))
        }
    }

    #[test]
    fn test_allowlist_fires_only_for_empty_sets() {
        let special = SpecialShaders::default();
        let validator = VariantValidator::new(&RejectAll, &special);
        let listed = ShaderId::from_name("Hidden/InternalErrorShader");

        let empty = KeywordSet::new();
        assert!(
            validator
                .is_valid(listed, PassType::ForwardBase, &empty)
                .unwrap()
        );

        let non_empty = KeywordSet::from_tokens(["LIGHTMAP_ON"]);
        assert!(
            !validator
                .is_valid(listed, PassType::ForwardBase, &non_empty)
                .unwrap()
        );
    }

    #[test]
    fn test_unlisted_shader_rejected_even_when_empty() {
        let special = SpecialShaders::default();
        let validator = VariantValidator::new(&RejectAll, &special);
        let unlisted = ShaderId::from_name("Custom/Water");

        let empty = KeywordSet::new();
        assert!(
            !validator
                .is_valid(unlisted, PassType::ForwardBase, &empty)
                .unwrap()
        );
    }

    #[test]
    fn test_oracle_error_propagates() {
        let special = SpecialShaders::default();
        let validator = VariantValidator::new(&Failing, &special);
        let shader = ShaderId::from_name("Custom/Water");

        let result = validator.is_valid(shader, PassType::ForwardBase, &KeywordSet::new());
        assert!(matches!(result, Err(BakeError::OracleFailure(_))));
    }
}
