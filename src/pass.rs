//! Render Pass Types
//!
//! The named rendering sub-stages a shader program can be invoked for. A
//! variant is always generated for a specific pass; the pass is configuration
//! data supplied with each wanted variant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named rendering sub-stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassType {
    /// Unlit / fixed-function style pass.
    Normal,
    /// Per-vertex lit pass.
    Vertex,
    /// Per-vertex lit pass with lightmaps.
    VertexLM,
    /// Per-vertex lit pass with RGBM-encoded lightmaps.
    VertexLMRGBM,
    /// Main forward rendering pass (directional light, lightmaps, ambient).
    ForwardBase,
    /// Additive forward pass, one per additional pixel light.
    ForwardAdd,
    /// Legacy deferred lighting base pass.
    LightPrePassBase,
    /// Legacy deferred lighting final pass.
    LightPrePassFinal,
    /// Depth rendering for shadow maps and depth textures.
    ShadowCaster,
    /// Deferred shading G-buffer pass.
    Deferred,
    /// Lightmap baking metadata pass.
    Meta,
    /// Per-object motion vector pass.
    MotionVectors,
    /// Custom pass used by a scriptable render pipeline.
    ScriptableRenderPipeline,
    /// Default unlit pass used by a scriptable render pipeline.
    ScriptableRenderPipelineDefaultUnlit,
}

impl PassType {
    /// Returns the pass name as used in configuration and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Vertex => "Vertex",
            Self::VertexLM => "VertexLM",
            Self::VertexLMRGBM => "VertexLMRGBM",
            Self::ForwardBase => "ForwardBase",
            Self::ForwardAdd => "ForwardAdd",
            Self::LightPrePassBase => "LightPrePassBase",
            Self::LightPrePassFinal => "LightPrePassFinal",
            Self::ShadowCaster => "ShadowCaster",
            Self::Deferred => "Deferred",
            Self::Meta => "Meta",
            Self::MotionVectors => "MotionVectors",
            Self::ScriptableRenderPipeline => "ScriptableRenderPipeline",
            Self::ScriptableRenderPipelineDefaultUnlit => "ScriptableRenderPipelineDefaultUnlit",
        }
    }
}

impl fmt::Display for PassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
