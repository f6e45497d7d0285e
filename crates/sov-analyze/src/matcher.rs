//! Brand mention matching.
//!
//! Each brand name compiles to a case-insensitive pattern whose tokens are
//! joined by an optional single whitespace-or-hyphen, so brand "Smart Fan"
//! matches "smart fan", "smart-fan", and "smartfan". Word boundaries apply
//! at the outer ends of the whole joined pattern: a match must not sit
//! immediately next to an ASCII alphanumeric character.

use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};

use sov_core::BrandSet;

use crate::MatchError;

/// Compiled mention matchers for an ordered brand set.
#[derive(Debug, Clone)]
pub struct BrandMatcher {
    brands: Vec<String>,
    patterns: Vec<Regex>,
}

impl BrandMatcher {
    /// Compile one pattern per brand, in brand-set order.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Pattern`] if a brand name produces an invalid
    /// pattern.
    pub fn compile(brands: &BrandSet) -> Result<Self, MatchError> {
        let mut patterns = Vec::with_capacity(brands.len());
        for name in brands {
            let pattern = brand_pattern(name);
            let re = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| MatchError::Pattern {
                    brand: name.clone(),
                    source,
                })?;
            patterns.push(re);
        }
        Ok(Self {
            brands: brands.names().to_vec(),
            patterns,
        })
    }

    #[must_use]
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Count non-overlapping mentions of every brand in `text`.
    ///
    /// Returns an entry for every brand, in brand-set order; empty text
    /// yields all-zero counts.
    #[must_use]
    pub fn count_mentions(&self, text: &str) -> IndexMap<String, u32> {
        self.brands
            .iter()
            .zip(&self.patterns)
            .map(|(brand, re)| (brand.clone(), count_matches(re, text)))
            .collect()
    }
}

/// Join whitespace-split tokens with an optional single separator char.
fn brand_pattern(name: &str) -> String {
    name.split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"[\s-]?")
}

/// Count matches that pass the outer word-boundary rule.
///
/// The regex crate has no lookaround, so the boundary is checked on the
/// characters adjacent to each candidate. A rejected candidate resumes the
/// scan one character later; an accepted match resumes after its end, which
/// keeps counting non-overlapping.
fn count_matches(re: &Regex, text: &str) -> u32 {
    let mut count = 0;
    let mut at = 0;
    while at <= text.len() {
        let Some(m) = re.find_at(text, at) else {
            break;
        };
        if boundary_ok(text, m.start(), m.end()) {
            count += 1;
            at = m.end().max(next_char_boundary(text, m.start()));
        } else {
            at = next_char_boundary(text, m.start());
        }
    }
    count
}

fn boundary_ok(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(|c| c.is_ascii_alphanumeric())
        && !after.is_some_and(|c| c.is_ascii_alphanumeric())
}

/// Byte offset one char past `at`, or past-the-end when `at` is the end.
fn next_char_boundary(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| at + c.len_utf8())
}
