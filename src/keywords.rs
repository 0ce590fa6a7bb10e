//! Shader Keyword Sets
//!
//! Canonical, order-independent representation of a group of shader feature
//! keywords. Two sets are equal iff their token sets are equal, irrespective
//! of insertion order.
//!
//! # Architecture
//!
//! Tokens are interned [`Symbol`]s stored in a **sorted** small vector, so:
//!
//! - **Memory efficiency**: duplicate strings share storage
//! - **Fast comparison**: equality is a slice compare over integers
//! - **Consistent hashing**: identical sets always hash identically
//!
//! # Usage
//!
//! ```rust
//! use variant_baker::KeywordSet;
//!
//! let a = KeywordSet::from_tokens(["LIGHTMAP_ON", "SHADOWS_SCREEN"]);
//! let b = KeywordSet::from_tokens(["SHADOWS_SCREEN", "LIGHTMAP_ON"]);
//! assert_eq!(a, b);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use crate::utils::interner::{self, Symbol};

/// Separator inside a compound choice ("`A+B`" contributes both `A` and `B`).
pub const COMPOUND_SEPARATOR: char = '+';

/// An unordered, duplicate-free collection of keyword tokens.
///
/// The empty set is valid and meaningful: it represents "no extra keywords".
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    /// Sorted interned tokens; sorted order makes equality and hashing
    /// insertion-order independent.
    tokens: SmallVec<[Symbol; 4]>,
}

impl KeywordSet {
    /// Creates the empty keyword set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokens: SmallVec::new(),
        }
    }

    /// Builds a set from an iterator of tokens, dropping empty tokens.
    #[must_use]
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = Self::new();
        for token in tokens {
            set.insert(token);
        }
        set
    }

    /// Splits a `+`-joined compound choice into a keyword set.
    ///
    /// `"A+B"` yields `{A, B}`; empty fragments are dropped, so `"A+"` yields
    /// `{A}` and `""` yields the empty set.
    #[must_use]
    pub fn split_compound(raw: &str) -> Self {
        Self::from_tokens(raw.split(COMPOUND_SEPARATOR))
    }

    /// Inserts a token (no-op for empty tokens and duplicates).
    pub fn insert(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        self.insert_symbol(interner::intern(token));
    }

    /// Inserts an already-interned token, keeping the storage sorted.
    #[inline]
    pub fn insert_symbol(&mut self, token: Symbol) {
        if let Err(idx) = self.tokens.binary_search(&token) {
            self.tokens.insert(idx, token);
        }
    }

    /// Checks whether the set contains a token.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        interner::get(token).is_some_and(|sym| self.contains_symbol(sym))
    }

    /// Checks whether the set contains an already-interned token.
    #[inline]
    #[must_use]
    pub fn contains_symbol(&self, token: Symbol) -> bool {
        self.tokens.binary_search(&token).is_ok()
    }

    /// Merges all tokens from another set into this one (set union).
    pub fn merge(&mut self, other: &KeywordSet) {
        for &token in &other.tokens {
            self.insert_symbol(token);
        }
    }

    /// Returns the union of this set and another as a new set.
    #[must_use]
    pub fn merged_with(&self, other: &KeywordSet) -> KeywordSet {
        let mut result = self.clone();
        result.merge(other);
        result
    }

    /// Number of tokens in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Checks whether the set is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates the tokens as [`Symbol`]s, in sorted symbol order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.tokens.iter().copied()
    }

    /// Iterates the tokens as strings.
    #[inline]
    pub fn iter_strings(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tokens.iter().map(|&sym| interner::resolve(sym))
    }

    /// Computes the content hash of the set.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        use std::hash::BuildHasher;

        rustc_hash::FxBuildHasher.hash_one(self)
    }

    /// Returns the sorted token slice (for direct access).
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Symbol] {
        &self.tokens
    }
}

impl Hash for KeywordSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tokens.hash(state);
    }
}

impl PartialEq for KeywordSet {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for KeywordSet {}

/// Create a `KeywordSet` from a token slice.
impl From<&[&str]> for KeywordSet {
    fn from(tokens: &[&str]) -> Self {
        Self::from_tokens(tokens.iter().copied())
    }
}

/// Space-joined token list, matching the display form content tools log.
impl fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.iter_strings().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}
