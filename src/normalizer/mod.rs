//! Text normalization and field extraction
//!
//! Pure-function cleanup of raw fragrance listings:
//! 1. Noise stripping and character cleanup (`normalize`)
//! 2. Exclusion-term detection on the raw text (`find_exclusions`)
//! 3. Structured field extraction: concentration, size, year, target,
//!    flanker (`extract_components`)
//!
//! Everything here is deterministic, synchronous, and free of shared
//! mutable state; the only configuration is the exclusion list, fixed at
//! construction.

pub mod patterns;

use crate::schema::InputSummary;
use patterns::{
    CONCENTRATION_PATTERNS, DEFAULT_EXCLUSIONS, FLANKER_TERMS, NOISE_PATTERNS, OZ_TO_ML,
    SIZE_ML_RE, SIZE_OZ_RE, SPECIAL_CHARS_RE, TARGET_PATTERNS, WHITESPACE_RE, YEAR_RE,
};

/// Text normalization and extraction engine.
///
/// Immutable after construction; safe to share across threads.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    exclusions: Vec<String>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect())
    }
}

impl TextNormalizer {
    /// Build a normalizer with a custom exclusion list.
    ///
    /// Terms are lowercased; their listed order is the detection order.
    pub fn new(exclusions: Vec<String>) -> Self {
        Self {
            exclusions: exclusions.into_iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    /// The configured exclusion terms, in detection order.
    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }

    /// Normalize input text for matching.
    ///
    /// Lowercases, strips noise terms (whole-word), removes characters
    /// outside word/whitespace/`-`/`.`/`/`, collapses whitespace, trims.
    /// Idempotent: re-applying never changes the output further.
    ///
    /// Removing one noise term can assemble another ("new sealed in box"
    /// yields "new in box" once "sealed" is gone), so the strip/collapse
    /// cycle repeats until the text stops changing. Each cycle only
    /// shrinks the text, so the loop terminates.
    pub fn normalize(&self, text: &str) -> String {
        let mut result = text.to_lowercase();

        loop {
            let mut pass = result.clone();
            for pattern in NOISE_PATTERNS.iter() {
                pass = pattern.replace_all(&pass, "").into_owned();
            }
            let pass = SPECIAL_CHARS_RE.replace_all(&pass, " ");
            let pass = WHITESPACE_RE.replace_all(&pass, " ");
            let pass = pass.trim().to_string();

            if pass == result {
                return pass;
            }
            result = pass;
        }
    }

    /// Find exclusion terms in the raw (not normalized) text.
    ///
    /// Case-insensitive substring containment; each term reported at most
    /// once, in exclusion-set order. Substring matching is deliberate and
    /// can false-positive on products literally named after a term
    /// (e.g. "Mini"); deployments hitting that override the list in config.
    pub fn find_exclusions(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();
        let mut found: Vec<String> = Vec::new();
        for exclusion in &self.exclusions {
            if text_lower.contains(exclusion.as_str()) && !found.contains(exclusion) {
                found.push(exclusion.clone());
            }
        }
        found
    }

    /// Extract structured fragrance fields from text.
    ///
    /// Brand and core name are never filled here; they belong to an
    /// external catalog/LLM collaborator.
    pub fn extract_components(&self, text: &str) -> InputSummary {
        let text_lower = text.to_lowercase();
        let mut summary = InputSummary::default();

        // First matching pattern wins, in table precedence order.
        for (pattern, concentration) in CONCENTRATION_PATTERNS.iter() {
            if pattern.is_match(&text_lower) {
                summary.concentration = Some((*concentration).to_string());
                break;
            }
        }

        summary.size_ml = extract_size_ml(&text_lower);

        if let Some(cap) = YEAR_RE.captures(text) {
            if let Ok(year) = cap[1].parse::<i32>() {
                summary.year = Some(year);
            }
        }

        // First matching class wins; "for men ... unisex" resolves to men.
        for (pattern, target) in TARGET_PATTERNS.iter() {
            if pattern.is_match(&text_lower) {
                summary.target = Some((*target).to_string());
                break;
            }
        }

        for flanker in FLANKER_TERMS {
            if text_lower.contains(flanker) {
                summary.flanker = Some(title_case(flanker));
                break;
            }
        }

        summary
    }

    /// Build a site-scoped search query from extracted fields.
    ///
    /// Absent fields are skipped; the core name is quoted.
    pub fn build_search_query(&self, summary: &InputSummary, site: &str) -> String {
        let mut parts = vec![format!("site:{}", site), "Perfumes".to_string()];

        if let Some(brand) = &summary.brand {
            parts.push(brand.clone());
        }
        if let Some(name) = &summary.name {
            parts.push(format!("\"{}\"", name));
        }
        if let Some(flanker) = &summary.flanker {
            parts.push(flanker.clone());
        }
        if let Some(concentration) = &summary.concentration {
            parts.push(concentration.clone());
        }

        parts.join(" ")
    }
}

/// Extract a size in milliliters, ml literals first, then ounces.
///
/// Only one of the two patterns ever applies. Ounce values are converted
/// with the fixed factor and truncated toward zero.
fn extract_size_ml(text_lower: &str) -> Option<u32> {
    if let Some(cap) = SIZE_ML_RE.captures(text_lower) {
        let value: f64 = cap[1].parse().ok()?;
        return Some(value as u32);
    }

    if let Some(cap) = SIZE_OZ_RE.captures(text_lower) {
        let value: f64 = cap[1].parse().ok()?;
        return Some((value * OZ_TO_ML) as u32);
    }

    None
}

/// Title-case a (possibly multi-word) vocabulary term.
fn title_case(term: &str) -> String {
    term.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
