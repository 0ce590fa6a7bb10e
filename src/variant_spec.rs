//! Wanted Variant Specification & Expansion
//!
//! A wanted variant names a render pass and a list of option groups; each
//! group is one independently-varying axis of keyword choices. Expansion
//! enumerates the full Cartesian product of choices as a lazy, finite,
//! deterministic sequence of [`KeywordSet`]s.
//!
//! # Grammar
//!
//! One group per string; within a group, choices are space-separated. Each
//! choice is either the sentinel `_` ("no keywords from this group") or a
//! `+`-joined compound of keyword tokens:
//!
//! ```text
//! "_ LIGHTMAP_ON LIGHTMAP_ON+SHADOWS_SCREEN"
//! ```
//!
//! A group string yielding zero choices is a configuration error
//! ([`BakeError::InvalidVariantSpec`]); a wanted variant with zero groups
//! expands to exactly one combination, the empty set.

use serde::{Deserialize, Serialize};

use crate::errors::{BakeError, Result};
use crate::keywords::KeywordSet;
use crate::pass::PassType;

/// Sentinel choice contributing no keywords to a combination.
pub const NO_KEYWORDS_SENTINEL: &str = "_";

/// One choice within an option group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// The `_` sentinel: contribute nothing.
    NoKeywords,
    /// A concrete (possibly compound) keyword set to contribute.
    Keywords(KeywordSet),
}

impl Choice {
    /// Parses a single choice token.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == NO_KEYWORDS_SENTINEL {
            Self::NoKeywords
        } else {
            Self::Keywords(KeywordSet::split_compound(raw))
        }
    }
}

/// An ordered, non-empty sequence of choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    choices: Vec<Choice>,
}

impl OptionGroup {
    /// Parses a space-separated group string.
    ///
    /// Returns `None` when the string yields zero choices (empty or
    /// whitespace-only input).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let choices: Vec<Choice> = raw.split_whitespace().map(Choice::parse).collect();
        if choices.is_empty() {
            None
        } else {
            Some(Self { choices })
        }
    }

    /// Number of choices in the group (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Always `false`: parsing rejects empty groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// The ordered choices.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }
}

/// Raw configuration form of a wanted variant: a pass plus one string per
/// option group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WantedVariantDesc {
    /// Render pass to generate variants for.
    pub pass: PassType,
    /// One space-separated option-group string per keyword axis.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A parsed wanted variant: a render pass plus its option groups.
#[derive(Debug, Clone)]
pub struct WantedVariant {
    pass: PassType,
    groups: Vec<OptionGroup>,
}

impl WantedVariant {
    /// Parses a raw descriptor, validating every option group.
    pub fn parse(desc: &WantedVariantDesc) -> Result<Self> {
        let mut groups = Vec::with_capacity(desc.keywords.len());
        for raw in &desc.keywords {
            let group = OptionGroup::parse(raw).ok_or_else(|| BakeError::InvalidVariantSpec {
                pass: desc.pass,
                group: raw.clone(),
            })?;
            groups.push(group);
        }
        Ok(Self {
            pass: desc.pass,
            groups,
        })
    }

    /// The render pass this variant targets.
    #[must_use]
    pub fn pass(&self) -> PassType {
        self.pass
    }

    /// The parsed option groups.
    #[must_use]
    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    /// Total number of combinations `expand` will yield: the product of the
    /// group sizes (one, for zero groups).
    #[must_use]
    pub fn combination_count(&self) -> usize {
        self.groups.iter().map(OptionGroup::len).product()
    }

    /// Lazily enumerates the Cartesian product of the option groups.
    ///
    /// Combinations are indexed as mixed-radix numbers with the **first**
    /// group as the fastest-varying digit; enumeration order is by index.
    /// The iterator is finite and restartable (call `expand` again).
    #[must_use]
    pub fn expand(&self) -> Combinations<'_> {
        Combinations {
            groups: &self.groups,
            total: self.combination_count(),
            index: 0,
        }
    }
}

/// Lazy iterator over the expanded keyword combinations of a
/// [`WantedVariant`].
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    groups: &'a [OptionGroup],
    total: usize,
    index: usize,
}

impl Iterator for Combinations<'_> {
    type Item = KeywordSet;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.total {
            return None;
        }

        // Decompose the index into one digit per group, first group fastest.
        let mut keywords = KeywordSet::new();
        let mut rest = self.index;
        for group in self.groups {
            let digit = rest % group.len();
            rest /= group.len();
            if let Choice::Keywords(set) = &group.choices()[digit] {
                keywords.merge(set);
            }
        }

        self.index += 1;
        Some(keywords)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Combinations<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(pass: PassType, keywords: &[&str]) -> WantedVariantDesc {
        WantedVariantDesc {
            pass,
            keywords: keywords.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_choice_parse_sentinel() {
        assert_eq!(Choice::parse("_"), Choice::NoKeywords);
    }

    #[test]
    fn test_choice_parse_compound() {
        let Choice::Keywords(set) = Choice::parse("A+B") else {
            panic!("expected keywords choice");
        };
        assert_eq!(set, KeywordSet::from_tokens(["A", "B"]));
    }

    #[test]
    fn test_option_group_rejects_empty_string() {
        assert!(OptionGroup::parse("").is_none());
        assert!(OptionGroup::parse("   ").is_none());
    }

    #[test]
    fn test_parse_reports_offending_group() {
        let err = WantedVariant::parse(&desc(PassType::ForwardBase, &["A B", " "])).unwrap_err();
        match err {
            BakeError::InvalidVariantSpec { pass, group } => {
                assert_eq!(pass, PassType::ForwardBase);
                assert_eq!(group, " ");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_groups_expand_to_one_empty_combination() {
        let variant = WantedVariant::parse(&desc(PassType::Normal, &[])).unwrap();

        assert_eq!(variant.combination_count(), 1);
        let combos: Vec<_> = variant.expand().collect();
        assert_eq!(combos, vec![KeywordSet::new()]);
    }
}
