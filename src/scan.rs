//! Content Scan State
//!
//! The collaborator side of a bake: walking content to collect the set of
//! referenced shaders (in discovery order) and the observed keyword catalogue.
//! The actual traversal of an engine's scene format stays with the embedding;
//! this module supplies the explicit state value it threads through the walk
//! and a generic outgoing-reference traversal over a polymorphic
//! [`ContentNode`] abstraction.
//!
//! State is a single [`ScanState`] value, not ambient fields, so a scan is
//! reentrant and testable in isolation from any particular scene format.

use rustc_hash::FxHashSet;

use crate::catalogue::ObservedKeywordCatalogue;
use crate::errors::BakeError;
use crate::keywords::KeywordSet;
use crate::shader::{ShaderId, ShaderResolver};

/// Opaque identity of a visual surface (a renderer, a UI image, ...), used
/// only for exclusion bookkeeping. Assigned by the embedding traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// A material as bound to a surface slot: its shader (if any) and its active
/// keywords.
#[derive(Debug, Clone, Default)]
pub struct MaterialBinding {
    /// The material's shader; `None` for materials with a missing shader.
    pub shader: Option<ShaderId>,
    /// The material's active keyword set.
    pub keywords: KeywordSet,
}

/// A visual surface on a content node: its identity plus its material slots.
/// Unbound slots are `None` and tolerated.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    /// Surface identity for exclusion checks.
    pub id: SurfaceId,
    /// Material slots; `None` entries are skipped.
    pub materials: Vec<Option<MaterialBinding>>,
}

/// Polymorphic view of a content node for the generic reference walk.
///
/// Implemented by the embedding over its scene/prefab/asset types. References
/// cover both hierarchy children and cross-asset references; the walk guards
/// against cycles and shared nodes via [`ContentNode::id`].
pub trait ContentNode {
    /// Stable identity of this node, for cycle detection.
    fn id(&self) -> u64;

    /// Visual surfaces directly on this node.
    fn surfaces(&self) -> &[Surface];

    /// Outgoing references: children plus referenced external objects.
    fn references(&self) -> Vec<&dyn ContentNode>;
}

/// Accumulated scan results: referenced shaders in discovery order, surface
/// exclusions, and the observed keyword catalogue.
#[derive(Debug, Default)]
pub struct ScanState {
    shaders: Vec<ShaderId>,
    seen: FxHashSet<ShaderId>,
    excluded: FxHashSet<SurfaceId>,
    catalogue: ObservedKeywordCatalogue,
}

impl ScanState {
    /// Creates an empty scan state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shader to the referenced set, preserving discovery order.
    ///
    /// Returns `true` if the shader was newly added.
    pub fn add_shader(&mut self, shader: ShaderId) -> bool {
        if self.seen.insert(shader) {
            self.shaders.push(shader);
            true
        } else {
            false
        }
    }

    /// Resolves a configured shader name and adds it.
    ///
    /// An unresolved name is logged and skipped (returns `false`); it does
    /// not fail the scan.
    pub fn add_shader_name(&mut self, resolver: &dyn ShaderResolver, name: &str) -> bool {
        match resolver.resolve(name) {
            Some(shader) => {
                self.add_shader(shader);
                true
            }
            None => {
                log::error!("{}", BakeError::UnresolvedShader(name.to_string()));
                false
            }
        }
    }

    /// Marks a surface as excluded from the scan (e.g. surfaces consumed by
    /// a texture-baking step that will never render with their own shader).
    pub fn exclude_surface(&mut self, surface: SurfaceId) {
        self.excluded.insert(surface);
    }

    /// Checks whether a surface is excluded.
    #[must_use]
    pub fn is_excluded(&self, surface: SurfaceId) -> bool {
        self.excluded.contains(&surface)
    }

    /// Records a material: its shader joins the referenced set and its
    /// keywords the catalogue. Materials without a shader are skipped.
    pub fn add_material(&mut self, material: &MaterialBinding) {
        let Some(shader) = material.shader else {
            return;
        };
        self.add_shader(shader);
        self.catalogue.record(shader, material.keywords.clone());
    }

    /// Records every bound material of a surface, unless the surface is
    /// excluded.
    pub fn add_surface(&mut self, surface: &Surface) {
        if self.is_excluded(surface.id) {
            log::debug!("excluding surface {:?}", surface.id);
            return;
        }
        for material in surface.materials.iter().flatten() {
            self.add_material(material);
        }
    }

    /// Walks a content root, recording every surface reachable through
    /// outgoing references. Shared nodes and cycles are visited once.
    pub fn walk(&mut self, root: &dyn ContentNode) {
        let mut visited = FxHashSet::default();
        self.walk_inner(root, &mut visited);
    }

    fn walk_inner(&mut self, node: &dyn ContentNode, visited: &mut FxHashSet<u64>) {
        if !visited.insert(node.id()) {
            return;
        }
        for surface in node.surfaces() {
            self.add_surface(surface);
        }
        for reference in node.references() {
            self.walk_inner(reference, visited);
        }
    }

    /// The referenced shaders, in discovery order.
    #[must_use]
    pub fn shaders(&self) -> &[ShaderId] {
        &self.shaders
    }

    /// The observed keyword catalogue accumulated so far.
    #[must_use]
    pub fn catalogue(&self) -> &ObservedKeywordCatalogue {
        &self.catalogue
    }

    /// Freezes the scan into its results: the discovery-ordered shader list
    /// and the catalogue.
    #[must_use]
    pub fn finish(self) -> (Vec<ShaderId>, ObservedKeywordCatalogue) {
        (self.shaders, self.catalogue)
    }
}
