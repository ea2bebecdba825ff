//! Static catalog matcher
//!
//! Matches the normalized listing title against an in-memory catalog of
//! known fragrances. Deterministic token-containment scoring, no network:
//! suitable for fixture catalogs, offline deployments, and tests.

use super::{MatchOutcome, Matcher};
use crate::error::{FragMapperError, Result};
use crate::schema::{AlternateMatch, DebugInfo, InputSummary, MAX_ALTERNATES};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One known fragrance in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub brand: String,
    pub name: String,
    /// Concentration class (EDP/EDT/EDC/Parfum), if the entry is specific.
    #[serde(default)]
    pub concentration: Option<String>,
    /// Explicit page URL; built from brand/name slugs when absent.
    #[serde(default)]
    pub url: Option<String>,
}

impl CatalogEntry {
    fn resolved_url(&self, host: &str) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| catalog_url(host, &self.brand, &self.name))
    }
}

/// Build a catalog page URL from brand and fragrance name.
///
/// Pattern: `https://{host}/Perfumes/{Brand}/{Name}`, spaces as `_`.
pub fn catalog_url(host: &str, brand: &str, name: &str) -> String {
    let brand_slug = brand.replace(' ', "_");
    let name_slug = name.replace(' ', "_");
    format!("https://{}/Perfumes/{}/{}", host, brand_slug, name_slug)
}

/// In-memory catalog lookup.
///
/// An entry matches when every token of its brand and name appears in the
/// normalized title. Concentration agreement raises confidence, a stated
/// mismatch lowers it. One surviving entry is a confident match; several
/// become ranked candidates (catalog order breaks ties, capped at 5).
#[derive(Debug, Clone)]
pub struct StaticCatalogMatcher {
    host: String,
    entries: Vec<CatalogEntry>,
}

// Confidence levels by concentration agreement.
const CONFIDENCE_AGREES: f64 = 0.95;
const CONFIDENCE_UNSTATED: f64 = 0.9;
const CONFIDENCE_DISAGREES: f64 = 0.7;

impl StaticCatalogMatcher {
    pub fn new(host: impl Into<String>, entries: Vec<CatalogEntry>) -> Self {
        Self {
            host: host.into(),
            entries,
        }
    }

    /// Load a catalog from a JSON array of entries.
    pub fn from_json_file(host: impl Into<String>, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&content)
            .map_err(|e| FragMapperError::Config(format!("invalid catalog file: {}", e)))?;
        Ok(Self::new(host, entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn score(&self, entry: &CatalogEntry, title_tokens: &HashSet<&str>, summary: &InputSummary) -> Option<f64> {
        let brand_lower = entry.brand.to_lowercase();
        let name_lower = entry.name.to_lowercase();
        let all_present = brand_lower
            .split_whitespace()
            .chain(name_lower.split_whitespace())
            .all(|token| title_tokens.contains(token));
        if !all_present {
            return None;
        }

        let confidence = match (&entry.concentration, &summary.concentration) {
            (Some(a), Some(b)) if a == b => CONFIDENCE_AGREES,
            (Some(_), Some(_)) => CONFIDENCE_DISAGREES,
            _ => CONFIDENCE_UNSTATED,
        };
        Some(confidence)
    }
}

impl Matcher for StaticCatalogMatcher {
    fn name(&self) -> &'static str {
        "static-catalog"
    }

    fn find(&self, summary: &InputSummary, debug: &mut DebugInfo) -> Result<MatchOutcome> {
        let title = debug.normalized_title.clone().unwrap_or_default();
        if title.is_empty() {
            return Ok(MatchOutcome::NoResult);
        }

        debug
            .search_queries_used
            .push(format!("catalog:{} {}", self.host, title));

        let title_tokens: HashSet<&str> = title.split_whitespace().collect();

        let mut hits: Vec<(f64, &CatalogEntry)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                self.score(entry, &title_tokens, summary)
                    .map(|confidence| (confidence, entry))
            })
            .collect();

        // Best first; catalog order breaks ties (sort is stable).
        hits.sort_by(|a, b| b.0.total_cmp(&a.0));

        match hits.len() {
            0 => Ok(MatchOutcome::NoResult),
            1 => {
                let (confidence, entry) = &hits[0];
                Ok(MatchOutcome::Confident {
                    url: entry.resolved_url(&self.host),
                    confidence: *confidence,
                })
            }
            _ => {
                let candidates = hits
                    .iter()
                    .take(MAX_ALTERNATES)
                    .map(|(confidence, entry)| {
                        AlternateMatch::new(
                            entry.resolved_url(&self.host),
                            *confidence,
                            Some(format!("{} {}", entry.brand, entry.name)),
                        )
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(MatchOutcome::Candidates(candidates))
            }
        }
    }
}
