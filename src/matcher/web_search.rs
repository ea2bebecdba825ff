//! Web-search matcher (placeholder)
//!
//! Builds the site-scoped search query a production integration would
//! issue and records it for diagnostics, then reports no result. Wiring
//! in an actual search backend replaces only `find`; the query format
//! and the recorded diagnostics stay as they are.

use super::{MatchOutcome, Matcher};
use crate::error::Result;
use crate::normalizer::TextNormalizer;
use crate::schema::{DebugInfo, InputSummary};

/// Query-building placeholder for a live catalog search.
#[derive(Debug, Clone)]
pub struct WebSearchMatcher {
    site: String,
    normalizer: TextNormalizer,
}

impl WebSearchMatcher {
    /// `site` is the catalog host the query is scoped to,
    /// e.g. `parfumo.com`.
    pub fn new(site: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            normalizer: TextNormalizer::default(),
        }
    }
}

impl Matcher for WebSearchMatcher {
    fn name(&self) -> &'static str {
        "web-search (placeholder)"
    }

    fn find(&self, summary: &InputSummary, debug: &mut DebugInfo) -> Result<MatchOutcome> {
        // Nothing usable to search for: no query, no result.
        if summary.is_empty() {
            return Ok(MatchOutcome::NoResult);
        }

        let query = self.normalizer.build_search_query(summary, &self.site);
        debug.search_queries_used.push(query);

        Ok(MatchOutcome::NoResult)
    }
}
