//! Variant Collection & Builder
//!
//! The orchestration core: for each referenced shader × wanted variant ×
//! expanded combination × observed keyword set, build a candidate, run it
//! through validation and the override policy, and append survivors to the
//! output collection.
//!
//! # Ordering
//!
//! Output order is fully deterministic for reproducible builds: shaders in
//! discovery order, wanted variants in configured order, combinations in
//! expansion index order, observed sets in catalogue order.
//!
//! # Deduplication
//!
//! Dedup happens at generation time only (catalogue record dedup, expansion
//! structure). No terminal dedup pass runs on the collection: identical
//! records appended by independent (wanted variant, observed set) pairs are
//! accepted, since downstream consumers treat the collection as a build
//! manifest that tolerates repeats.

use crate::catalogue::ObservedKeywordCatalogue;
use crate::errors::Result;
use crate::keywords::KeywordSet;
use crate::oracle::{CapabilityOracle, SpecialShaders, VariantValidator};
use crate::pass::PassType;
use crate::shader::ShaderId;
use crate::utils::interner::{self, Symbol};
use crate::variant_spec::{WantedVariant, WantedVariantDesc};

/// Keyword appended to valid candidates for stereo multiview rendering.
pub const STEREO_MULTIVIEW_ON: &str = "STEREO_MULTIVIEW_ON";

/// Keyword marking depth-only shadow variants, which are exempt from the
/// stereo append.
pub const SHADOWS_DEPTH: &str = "SHADOWS_DEPTH";

/// One generated variant: shader, pass and final keyword set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    /// The shader the variant belongs to.
    pub shader: ShaderId,
    /// The render pass the variant targets.
    pub pass: PassType,
    /// The final keyword set, after the override policy.
    pub keywords: KeywordSet,
}

/// Ordered, append-only collection of generated variants.
#[derive(Debug, Clone, Default)]
pub struct VariantCollection {
    records: Vec<VariantRecord>,
}

impl VariantCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record. No dedup: emission order and repeats are preserved.
    pub fn push(&mut self, record: VariantRecord) {
        self.records.push(record);
    }

    /// The records in emission order.
    #[must_use]
    pub fn records(&self) -> &[VariantRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the records in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &VariantRecord> {
        self.records.iter()
    }

    /// Consumes the collection, returning the records.
    #[must_use]
    pub fn into_records(self) -> Vec<VariantRecord> {
        self.records
    }
}

impl IntoIterator for VariantCollection {
    type Item = VariantRecord;
    type IntoIter = std::vec::IntoIter<VariantRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Drives variant generation for one build invocation.
///
/// Owns no shared state: shaders, wanted variants and the catalogue are
/// supplied per [`build`](Self::build) call, and the output collection is
/// exclusively owned by that call for its duration.
pub struct VariantCollectionBuilder<'a> {
    validator: VariantValidator<'a>,
    fallback_shader: ShaderId,
    video_decode_shader: ShaderId,
    stereo_multiview: Symbol,
    shadows_depth: Symbol,
}

impl<'a> VariantCollectionBuilder<'a> {
    /// Creates a builder over a capability oracle and the special-case shader
    /// configuration.
    #[must_use]
    pub fn new(oracle: &'a dyn CapabilityOracle, special: &SpecialShaders) -> Self {
        Self {
            validator: VariantValidator::new(oracle, special),
            fallback_shader: ShaderId::from_name(&special.fallback_shader),
            video_decode_shader: ShaderId::from_name(&special.video_decode_shader),
            stereo_multiview: interner::intern(STEREO_MULTIVIEW_ON),
            shadows_depth: interner::intern(SHADOWS_DEPTH),
        }
    }

    /// Generates the variant collection for a set of referenced shaders.
    ///
    /// Malformed wanted variants are logged and skipped once per build; all
    /// other wanted variants and shaders still process. An oracle failure
    /// aborts immediately.
    pub fn build(
        &self,
        shaders: &[ShaderId],
        wanted: &[WantedVariantDesc],
        catalogue: &ObservedKeywordCatalogue,
    ) -> Result<VariantCollection> {
        // Parse (and reject) each wanted variant once, not per shader.
        let parsed: Vec<Option<WantedVariant>> = wanted
            .iter()
            .map(|desc| match WantedVariant::parse(desc) {
                Ok(variant) => Some(variant),
                Err(err) => {
                    log::error!("skipping wanted variant: {err}");
                    None
                }
            })
            .collect();

        let mut collection = VariantCollection::new();
        for &shader in shaders {
            for variant in parsed.iter().flatten() {
                self.add_variations(&mut collection, shader, variant, catalogue)?;
            }
        }

        log::info!(
            "generated {} variant records for {} shaders",
            collection.len(),
            shaders.len()
        );
        Ok(collection)
    }

    /// Expands one wanted variant for one shader and crosses each combination
    /// with the shader's observed keyword sets.
    fn add_variations(
        &self,
        collection: &mut VariantCollection,
        shader: ShaderId,
        variant: &WantedVariant,
        catalogue: &ObservedKeywordCatalogue,
    ) -> Result<()> {
        let observed = catalogue.get(shader);
        for combination in variant.expand() {
            if observed.is_empty() {
                // No catalogue entry: the expanded keywords are the sole
                // candidate.
                self.add_candidate(collection, shader, variant.pass(), combination)?;
            } else {
                for seen in observed {
                    let candidate = combination.merged_with(seen);
                    self.add_candidate(collection, shader, variant.pass(), candidate)?;
                }
            }
        }
        Ok(())
    }

    /// Applies the post-union override policy to one candidate and emits the
    /// surviving record, if any.
    fn add_candidate(
        &self,
        collection: &mut VariantCollection,
        shader: ShaderId,
        pass: PassType,
        candidate: KeywordSet,
    ) -> Result<()> {
        // The fallback shader's zero-keyword form is always present in the
        // collection, oracle or not.
        if shader == self.fallback_shader && candidate.is_empty() {
            collection.push(VariantRecord {
                shader,
                pass,
                keywords: KeywordSet::new(),
            });
            return Ok(());
        }

        if self.validator.is_valid(shader, pass, &candidate)? {
            let mut keywords = candidate;
            if shader != self.video_decode_shader
                && !keywords.contains_symbol(self.shadows_depth)
            {
                keywords.insert_symbol(self.stereo_multiview);
            }
            collection.push(VariantRecord {
                shader,
                pass,
                keywords,
            });
        }
        Ok(())
    }
}
