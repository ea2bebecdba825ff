//! Catalog matcher collaborators
//!
//! The mode handlers delegate the actual catalog lookup to a `Matcher`.
//! A matcher resolves extracted fields to exactly one of three outcomes;
//! how it does so (web search, static database, nothing at all) is its
//! own business. Confidence values must lie in [0, 1] and a candidate
//! list must not exceed 5 entries; violations are surfaced as
//! `FragMapperError::MatcherContract` by the handler, never repaired.

pub mod null;
pub mod static_catalog;
pub mod web_search;

pub use null::NullMatcher;
pub use static_catalog::{CatalogEntry, StaticCatalogMatcher};
pub use web_search::WebSearchMatcher;

use crate::error::Result;
use crate::schema::{AlternateMatch, DebugInfo, InputSummary};

/// The three-way result every matcher must produce.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// A single confident match.
    Confident { url: String, confidence: f64 },
    /// Up to 5 ranked candidates, best first.
    Candidates(Vec<AlternateMatch>),
    /// Nothing found.
    NoResult,
}

/// A catalog lookup collaborator, one per target catalog.
///
/// `find` is a single synchronous request with a single response; any
/// retry or timeout policy lives inside the implementation. Matchers may
/// record the queries they attempted in `debug.search_queries_used`.
pub trait Matcher: Send + Sync {
    /// Short identifier used in diagnostics and NO_MATCH notes.
    fn name(&self) -> &'static str;

    /// Resolve extracted fields to a match outcome.
    fn find(&self, summary: &InputSummary, debug: &mut DebugInfo) -> Result<MatchOutcome>;
}
