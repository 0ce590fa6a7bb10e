//! Shader Identity
//!
//! The baker never loads or inspects shader programs; it only needs a stable,
//! cheap identity to key catalogues and output records with. A [`ShaderId`]
//! is the interned shader name. Resolution of configured names against the
//! hosting environment's shader database goes through the [`ShaderResolver`]
//! seam.

use std::fmt;

use crate::utils::interner::{self, Symbol};

/// Opaque identity of an externally-owned shader program.
///
/// Copyable, comparable and hashable; equality is name equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderId(Symbol);

impl ShaderId {
    /// Creates the identity for a shader name.
    #[inline]
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(interner::intern(name))
    }

    /// Returns the shader name.
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        interner::resolve(self.0)
    }

    /// Returns the interned name symbol.
    #[inline]
    #[must_use]
    pub fn symbol(self) -> Symbol {
        self.0
    }
}

impl fmt::Display for ShaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// External lookup from shader name to shader identity.
///
/// Implemented by the hosting environment (asset database, shader registry).
/// Returning `None` means the name does not resolve to a loadable shader;
/// callers report it as [`BakeError::UnresolvedShader`] and skip the name.
///
/// [`BakeError::UnresolvedShader`]: crate::errors::BakeError::UnresolvedShader
pub trait ShaderResolver {
    /// Resolves a shader name, or `None` if no such shader exists.
    fn resolve(&self, name: &str) -> Option<ShaderId>;
}
