//! Global String Interner
//!
//! Converts keyword and shader-name strings into compact integer [`Symbol`]s
//! for cheap comparison and hashing. Keyword sets are compared and unioned
//! constantly during variant generation, so symbols keep the hot path free of
//! string work.

use lasso::{Spur, ThreadedRodeo};
use once_cell::sync::Lazy;

/// Global interner instance.
static INTERNER: Lazy<ThreadedRodeo> = Lazy::new(ThreadedRodeo::new);

/// A compact integer identifier for an interned string.
pub type Symbol = Spur;

/// Interns a string, returning its [`Symbol`].
///
/// Returns the existing symbol if the string was interned before.
#[inline]
pub fn intern(s: &str) -> Symbol {
    INTERNER.get_or_intern(s)
}

/// Looks up the [`Symbol`] of an already-interned string.
///
/// Returns `None` without allocating if the string was never interned.
#[inline]
#[must_use]
pub fn get(s: &str) -> Option<Symbol> {
    INTERNER.get(s)
}

/// Resolves a [`Symbol`] back to its string.
///
/// # Panics
/// Panics if the symbol did not come from this interner (does not normally
/// happen).
#[inline]
#[must_use]
pub fn resolve(sym: Symbol) -> &'static str {
    INTERNER.resolve(&sym)
}

/// Pre-interns keyword tokens common in rendering content.
///
/// Called once at the start of a bake so that the override policy and typical
/// material keywords never intern on the hot path.
pub fn preload_common_keywords() {
    let common = [
        // Override policy tokens
        "STEREO_MULTIVIEW_ON",
        "SHADOWS_DEPTH",
        // Lighting
        "DIRECTIONAL",
        "POINT",
        "SPOT",
        "POINT_COOKIE",
        "DIRECTIONAL_COOKIE",
        "VERTEXLIGHT_ON",
        // Lightmapping
        "LIGHTMAP_ON",
        "DIRLIGHTMAP_COMBINED",
        "DYNAMICLIGHTMAP_ON",
        // Shadows
        "SHADOWS_SCREEN",
        "SHADOWS_CUBE",
        "SHADOWS_SOFT",
        // Fog
        "FOG_LINEAR",
        "FOG_EXP",
        "FOG_EXP2",
        // Common material toggles
        "_ALPHATEST_ON",
        "_ALPHABLEND_ON",
        "_ALPHAPREMULTIPLY_ON",
        "_EMISSION",
        "_NORMALMAP",
        "SOFTPARTICLES_ON",
    ];

    for name in common {
        intern(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let s1 = intern("hello");
        let s2 = intern("hello");
        let s3 = intern("world");

        assert_eq!(s1, s2);
        assert_ne!(s1, s3);

        assert_eq!(resolve(s1), "hello");
        assert_eq!(resolve(s3), "world");
    }

    #[test]
    fn test_get() {
        let _ = intern("existing");

        assert!(get("existing").is_some());
        assert!(get("non_existing").is_none());
    }
}
