//! Per-mode mapping skills
//!
//! Every mode runs the same two-step flow:
//! 1. Exclusion check on the raw text: a hard veto, resolved as EXCLUDED
//!    before any catalog lookup happens
//! 2. Extract fields, delegate to the mode's matcher, translate its
//!    three-way outcome 1:1 into the envelope status
//!
//! Modes differ only in which matcher they address and which catalog host
//! their URLs must belong to. A mode whose lookup is not implemented gets
//! a [`NullMatcher`] and deterministically resolves NO_MATCH.

use crate::config::{ModeRules, RulesConfig};
use crate::error::{FragMapperError, Result};
use crate::matcher::{MatchOutcome, Matcher, NullMatcher, WebSearchMatcher};
use crate::normalizer::TextNormalizer;
use crate::schema::{DebugInfo, MapperOutput, Mode};

/// Fixed diagnostic attached to every EXCLUDED envelope.
const EXCLUSION_NOTE: &str = "Input contains exclusion terms";

/// A mapping skill for one mode.
pub struct ModeHandler {
    mode: Mode,
    version: &'static str,
    /// Host the mode's result URLs must belong to.
    catalog_host: String,
    /// Opaque rule block from config; carried, never interpreted here.
    rules: ModeRules,
    normalizer: TextNormalizer,
    matcher: Box<dyn Matcher>,
}

impl ModeHandler {
    /// Maps free-text descriptions to Parfumo URLs via catalog search.
    pub fn parfumo(config: &RulesConfig) -> Self {
        Self::with_matcher(
            Mode::DescToParfumoUrl,
            config,
            "www.parfumo.com",
            Box::new(WebSearchMatcher::new("parfumo.com")),
        )
    }

    /// Maps free-text descriptions to Fragrantica URLs. Lookup not
    /// implemented yet.
    pub fn fragrantica(config: &RulesConfig) -> Self {
        Self::with_matcher(
            Mode::DescToFragranticaUrl,
            config,
            "www.fragrantica.com",
            Box::new(NullMatcher),
        )
    }

    /// Maps Parfumo pages to their Fragrantica equivalents. Lookup not
    /// implemented yet.
    pub fn crosswalk(config: &RulesConfig) -> Self {
        Self::with_matcher(
            Mode::ParfumoToFragranticaUrl,
            config,
            "www.fragrantica.com",
            Box::new(NullMatcher),
        )
    }

    /// Build a handler around an injected matcher.
    pub fn with_matcher(
        mode: Mode,
        config: &RulesConfig,
        catalog_host: impl Into<String>,
        matcher: Box<dyn Matcher>,
    ) -> Self {
        Self {
            mode,
            version: "1.0.0",
            catalog_host: catalog_host.into(),
            rules: config.mode_rules(mode).cloned().unwrap_or_default(),
            normalizer: TextNormalizer::new(config.exclusions()),
            matcher,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Hard rules configured for this mode (pass-through data).
    pub fn hard_rules(&self) -> &[String] {
        &self.rules.hard_rules
    }

    /// Output contract configured for this mode (pass-through data).
    pub fn output_contract(&self) -> &std::collections::HashMap<String, String> {
        &self.rules.output_contract
    }

    /// Run the mapping workflow for one input.
    ///
    /// Never errs for well-behaved matchers; a matcher producing a result
    /// outside its contract (out-of-range confidence, more than 5
    /// candidates, a URL on the wrong host) propagates as an error.
    pub fn execute(&self, input_text: &str) -> Result<MapperOutput> {
        let excluded = self.normalizer.find_exclusions(input_text);
        if !excluded.is_empty() {
            let summary = self.normalizer.extract_components(input_text);
            let debug = DebugInfo {
                excluded_terms_found: excluded,
                normalized_title: Some(self.normalizer.normalize(input_text)),
                search_queries_used: Vec::new(),
            };
            return Ok(MapperOutput::excluded(
                self.mode,
                summary,
                vec![EXCLUSION_NOTE.to_string()],
                debug,
            ));
        }

        let summary = self.normalizer.extract_components(input_text);
        let mut debug = DebugInfo {
            excluded_terms_found: Vec::new(),
            normalized_title: Some(self.normalizer.normalize(input_text)),
            search_queries_used: Vec::new(),
        };

        match self.matcher.find(&summary, &mut debug)? {
            MatchOutcome::Confident { url, confidence } => {
                self.check_host(&url)?;
                MapperOutput::matched(self.mode, summary, url, confidence, debug)
                    .map_err(Self::contract_violation)
            }
            MatchOutcome::Candidates(candidates) => {
                if candidates.is_empty() {
                    return Ok(self.no_match(summary, debug));
                }
                for candidate in &candidates {
                    self.check_host(&candidate.url)?;
                }
                MapperOutput::ambiguous(self.mode, summary, candidates, debug)
                    .map_err(Self::contract_violation)
            }
            MatchOutcome::NoResult => Ok(self.no_match(summary, debug)),
        }
    }

    fn no_match(&self, summary: crate::schema::InputSummary, debug: DebugInfo) -> MapperOutput {
        MapperOutput::no_match(
            self.mode,
            summary,
            vec![format!("No match via {} matcher", self.matcher.name())],
            debug,
        )
    }

    fn check_host(&self, url: &str) -> Result<()> {
        let prefix = format!("https://{}/", self.catalog_host);
        if !url.starts_with(&prefix) {
            return Err(FragMapperError::MatcherContract(format!(
                "URL {} does not belong to catalog host {}",
                url, self.catalog_host
            )));
        }
        Ok(())
    }

    // Schema errors caused by matcher data are contract violations.
    fn contract_violation(err: FragMapperError) -> FragMapperError {
        match err {
            FragMapperError::Schema(msg) => FragMapperError::MatcherContract(msg),
            other => other,
        }
    }
}
