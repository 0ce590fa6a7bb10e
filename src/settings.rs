//! Bake Settings & Entry Point
//!
//! [`BakeSettings`] is the deserializable request: which shaders to always
//! include, which variants are wanted, and the special-case shader names for
//! the override policy. [`bake`] wires a request, a shader resolver, content
//! roots and a capability oracle into one generation run.

use serde::{Deserialize, Serialize};

use crate::collection::{VariantCollection, VariantCollectionBuilder};
use crate::errors::Result;
use crate::oracle::{CapabilityOracle, SpecialShaders};
use crate::scan::{ContentNode, ScanState};
use crate::shader::ShaderResolver;
use crate::utils::interner;
use crate::variant_spec::WantedVariantDesc;

/// Configuration for one bake run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeSettings {
    /// Hidden/internal shader names to include even though no content
    /// references them.
    pub additional_hidden_shaders: Vec<String>,
    /// Additional shader names to include alongside the scanned ones.
    pub additional_shaders: Vec<String>,
    /// The wanted variants to expand for every referenced shader.
    pub wanted_variants: Vec<WantedVariantDesc>,
    /// Special-case shader names for validation and the override policy.
    pub special_shaders: SpecialShaders,
}

/// Runs one complete bake: seed configured shaders, scan content roots, then
/// generate the variant collection.
///
/// `scan` carries any pre-registered state (typically surface exclusions);
/// pass `ScanState::new()` when there is none. Configured shader names are
/// added before content is walked, so they lead the discovery order.
/// Unresolved names and malformed wanted variants are logged and skipped; an
/// oracle failure aborts with an error.
pub fn bake(
    settings: &BakeSettings,
    resolver: &dyn ShaderResolver,
    mut scan: ScanState,
    roots: &[&dyn ContentNode],
    oracle: &dyn CapabilityOracle,
) -> Result<VariantCollection> {
    interner::preload_common_keywords();

    for name in settings
        .additional_hidden_shaders
        .iter()
        .chain(&settings.additional_shaders)
    {
        scan.add_shader_name(resolver, name);
    }

    for root in roots {
        scan.walk(*root);
    }

    let (shaders, catalogue) = scan.finish();
    log::info!(
        "scan found {} shaders, {} with observed keywords",
        shaders.len(),
        catalogue.len()
    );

    let builder = VariantCollectionBuilder::new(oracle, &settings.special_shaders);
    builder.build(&shaders, &settings.wanted_variants, &catalogue)
}
