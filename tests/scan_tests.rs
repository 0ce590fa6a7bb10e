//! Content Scan Tests
//!
//! Tests for:
//! - Discovery-order shader accumulation and deduplication
//! - Unresolved shader names: logged, skipped, non-fatal
//! - Surface exclusion
//! - Generic outgoing-reference walk with shared-node guarding

use std::collections::HashSet;

use variant_baker::{
    ContentNode, KeywordSet, MaterialBinding, ScanState, ShaderId, ShaderResolver, Surface,
    SurfaceId,
};

// ============================================================================
// Stubs
// ============================================================================

struct KnownShaders(HashSet<String>);

impl KnownShaders {
    fn new(names: &[&str]) -> Self {
        Self(names.iter().map(ToString::to_string).collect())
    }
}

impl ShaderResolver for KnownShaders {
    fn resolve(&self, name: &str) -> Option<ShaderId> {
        self.0.contains(name).then(|| ShaderId::from_name(name))
    }
}

struct TestNode {
    id: u64,
    surfaces: Vec<Surface>,
    children: Vec<TestNode>,
}

impl TestNode {
    fn new(id: u64) -> Self {
        Self {
            id,
            surfaces: Vec::new(),
            children: Vec::new(),
        }
    }

    fn with_surface(mut self, surface: Surface) -> Self {
        self.surfaces.push(surface);
        self
    }

    fn with_child(mut self, child: TestNode) -> Self {
        self.children.push(child);
        self
    }
}

impl ContentNode for TestNode {
    fn id(&self) -> u64 {
        self.id
    }

    fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    fn references(&self) -> Vec<&dyn ContentNode> {
        self.children
            .iter()
            .map(|child| child as &dyn ContentNode)
            .collect()
    }
}

fn surface(id: u64, shader: &str, keywords: &[&str]) -> Surface {
    Surface {
        id: SurfaceId(id),
        materials: vec![Some(MaterialBinding {
            shader: Some(ShaderId::from_name(shader)),
            keywords: KeywordSet::from_tokens(keywords.iter().copied()),
        })],
    }
}

// ============================================================================
// Shader Accumulation
// ============================================================================

#[test]
fn shaders_accumulate_in_discovery_order_without_duplicates() {
    let a = ShaderId::from_name("Scan/A");
    let b = ShaderId::from_name("Scan/B");
    let mut scan = ScanState::new();

    assert!(scan.add_shader(b));
    assert!(scan.add_shader(a));
    assert!(!scan.add_shader(b), "duplicate is not re-added");

    assert_eq!(scan.shaders(), &[b, a]);
}

#[test]
fn unresolved_shader_name_is_skipped() {
    let resolver = KnownShaders::new(&["Scan/Known"]);
    let mut scan = ScanState::new();

    assert!(scan.add_shader_name(&resolver, "Scan/Known"));
    assert!(!scan.add_shader_name(&resolver, "Scan/Missing"));

    assert_eq!(scan.shaders().len(), 1);
}

#[test]
fn materials_without_shader_are_skipped() {
    let mut scan = ScanState::new();

    scan.add_material(&MaterialBinding {
        shader: None,
        keywords: KeywordSet::from_tokens(["A"]),
    });

    assert!(scan.shaders().is_empty());
    assert!(scan.catalogue().is_empty());
}

#[test]
fn material_keywords_are_recorded_against_the_shader() {
    let shader = ShaderId::from_name("Scan/Recorded");
    let mut scan = ScanState::new();

    scan.add_material(&MaterialBinding {
        shader: Some(shader),
        keywords: KeywordSet::from_tokens(["A", "B"]),
    });

    assert_eq!(scan.shaders(), &[shader]);
    assert_eq!(scan.catalogue().get(shader).len(), 2);
}

// ============================================================================
// Exclusion
// ============================================================================

#[test]
fn excluded_surfaces_contribute_nothing() {
    let mut scan = ScanState::new();
    scan.exclude_surface(SurfaceId(7));

    scan.add_surface(&surface(7, "Scan/Excluded", &["A"]));
    scan.add_surface(&surface(8, "Scan/Included", &[]));

    let (shaders, _) = scan.finish();
    assert_eq!(shaders, vec![ShaderId::from_name("Scan/Included")]);
}

#[test]
fn unbound_material_slots_are_tolerated() {
    let mut scan = ScanState::new();

    scan.add_surface(&Surface {
        id: SurfaceId(1),
        materials: vec![None, None],
    });

    assert!(scan.shaders().is_empty());
}

// ============================================================================
// Reference Walk
// ============================================================================

#[test]
fn walk_visits_surfaces_through_references() {
    let root = TestNode::new(1)
        .with_surface(surface(10, "Scan/Root", &[]))
        .with_child(TestNode::new(2).with_surface(surface(20, "Scan/Child", &["A"])));

    let mut scan = ScanState::new();
    scan.walk(&root);

    let (shaders, catalogue) = scan.finish();
    assert_eq!(
        shaders,
        vec![
            ShaderId::from_name("Scan/Root"),
            ShaderId::from_name("Scan/Child"),
        ]
    );
    assert_eq!(
        catalogue.get(ShaderId::from_name("Scan/Child")).len(),
        2,
        "seeded empty set plus the observed set"
    );
}

#[test]
fn walk_visits_shared_nodes_once() {
    // Two references to the same node identity: only the first is scanned.
    let root = TestNode::new(1)
        .with_child(TestNode::new(2).with_surface(surface(20, "Scan/SharedFirst", &[])))
        .with_child(TestNode::new(2).with_surface(surface(21, "Scan/SharedSecond", &[])));

    let mut scan = ScanState::new();
    scan.walk(&root);

    assert_eq!(scan.shaders(), &[ShaderId::from_name("Scan/SharedFirst")]);
}

#[test]
fn walk_respects_pre_registered_exclusions() {
    let root = TestNode::new(1).with_surface(surface(10, "Scan/WalkExcluded", &[]));

    let mut scan = ScanState::new();
    scan.exclude_surface(SurfaceId(10));
    scan.walk(&root);

    assert!(scan.shaders().is_empty());
}
