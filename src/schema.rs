//! Output contract types
//!
//! Every mapping request, regardless of outcome, resolves to a single
//! `MapperOutput` envelope. Envelopes are validated when built and
//! immutable afterwards, so a constructed envelope always satisfies the
//! contract invariants:
//!
//! - `primary_url` is present iff `status == Match`
//! - `alternates` is non-empty only when `status == Ambiguous`
//! - at most 5 alternates, confidence always within [0, 1]

use crate::error::{FragMapperError, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of alternate candidates an envelope may carry.
pub const MAX_ALTERNATES: usize = 5;

/// Supported mapping modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Mode {
    #[serde(rename = "DESC_TO_PARFUMO_URL")]
    #[value(name = "DESC_TO_PARFUMO_URL")]
    DescToParfumoUrl,

    #[serde(rename = "DESC_TO_FRAGRANTICA_URL")]
    #[value(name = "DESC_TO_FRAGRANTICA_URL")]
    DescToFragranticaUrl,

    #[serde(rename = "PARFUMO_TO_FRAGRANTICA_URL")]
    #[value(name = "PARFUMO_TO_FRAGRANTICA_URL")]
    ParfumoToFragranticaUrl,
}

impl Mode {
    /// The wire name, as used in config files and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::DescToParfumoUrl => "DESC_TO_PARFUMO_URL",
            Mode::DescToFragranticaUrl => "DESC_TO_FRAGRANTICA_URL",
            Mode::ParfumoToFragranticaUrl => "PARFUMO_TO_FRAGRANTICA_URL",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "DESC_TO_PARFUMO_URL" => Ok(Mode::DescToParfumoUrl),
            "DESC_TO_FRAGRANTICA_URL" => Ok(Mode::DescToFragranticaUrl),
            "PARFUMO_TO_FRAGRANTICA_URL" => Ok(Mode::ParfumoToFragranticaUrl),
            _ => Err(format!("unknown mode: {}", s)),
        }
    }
}

/// Match result status. Exactly one per response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    #[serde(rename = "MATCH")]
    Match,
    #[serde(rename = "AMBIGUOUS")]
    Ambiguous,
    #[serde(rename = "NO_MATCH")]
    NoMatch,
    #[serde(rename = "EXCLUDED")]
    Excluded,
}

/// Structured fields extracted from the input text.
///
/// All fields are optional; absence means "not detected", never an error.
/// `brand` and `name` are left for an external collaborator (catalog
/// lookup / LLM) and are never filled by the extraction engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSummary {
    pub brand: Option<String>,
    pub name: Option<String>,
    /// Concentration class: EDP / EDT / EDC / Parfum.
    pub concentration: Option<String>,
    /// Size in milliliters (ounce literals converted, truncated).
    pub size_ml: Option<u32>,
    /// Flanker/edition term (Intense, Absolu, ...), title-cased.
    pub flanker: Option<String>,
    /// Release year if present, within [1900, 2099].
    pub year: Option<i32>,
    /// Target audience: men / women / unisex.
    pub target: Option<String>,
}

impl InputSummary {
    /// True when no field was detected at all.
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.name.is_none()
            && self.concentration.is_none()
            && self.size_ml.is_none()
            && self.flanker.is_none()
            && self.year.is_none()
            && self.target.is_none()
    }
}

/// Diagnostic information carried alongside the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    /// Exclusion terms detected in the raw input, in exclusion-set order.
    pub excluded_terms_found: Vec<String>,
    /// Normalized version of the input title.
    pub normalized_title: Option<String>,
    /// Search queries attempted by the matcher.
    pub search_queries_used: Vec<String>,
}

/// An alternate candidate match.
///
/// Deserialization runs through [`AlternateMatch::new`], so parsed data
/// obeys the same bounds as constructed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAlternateMatch")]
pub struct AlternateMatch {
    pub url: String,
    /// Confidence score within [0, 1].
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Unvalidated wire form of [`AlternateMatch`].
#[derive(Deserialize)]
struct RawAlternateMatch {
    url: String,
    confidence: f64,
    #[serde(default)]
    note: Option<String>,
}

impl TryFrom<RawAlternateMatch> for AlternateMatch {
    type Error = FragMapperError;

    fn try_from(raw: RawAlternateMatch) -> Result<Self> {
        Self::new(raw.url, raw.confidence, raw.note)
    }
}

impl AlternateMatch {
    /// Build a candidate, rejecting out-of-range confidence values.
    pub fn new(url: impl Into<String>, confidence: f64, note: Option<String>) -> Result<Self> {
        validate_confidence(confidence)?;
        Ok(Self {
            url: url.into(),
            confidence,
            note,
        })
    }
}

fn validate_confidence(confidence: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&confidence) {
        return Err(FragMapperError::Schema(format!(
            "confidence {} outside [0, 1]",
            confidence
        )));
    }
    Ok(())
}

/// Standard output envelope for all mapping modes.
///
/// Deserialization re-validates the numeric bounds, so an envelope parsed
/// from JSON is rejected at the boundary exactly like one built with the
/// constructors (out-of-range confidence, more than 5 alternates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMapperOutput")]
pub struct MapperOutput {
    pub mode: Mode,
    pub input_summary: InputSummary,
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub alternates: Vec<AlternateMatch>,
    pub notes: Vec<String>,
    pub debug: DebugInfo,
}

/// Unvalidated wire form of [`MapperOutput`].
#[derive(Deserialize)]
struct RawMapperOutput {
    mode: Mode,
    #[serde(default)]
    input_summary: InputSummary,
    status: MatchStatus,
    #[serde(default)]
    primary_url: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    alternates: Vec<AlternateMatch>,
    #[serde(default)]
    notes: Vec<String>,
    #[serde(default)]
    debug: DebugInfo,
}

impl TryFrom<RawMapperOutput> for MapperOutput {
    type Error = FragMapperError;

    fn try_from(raw: RawMapperOutput) -> Result<Self> {
        if let Some(confidence) = raw.confidence {
            validate_confidence(confidence)?;
        }
        if raw.alternates.len() > MAX_ALTERNATES {
            return Err(FragMapperError::Schema(format!(
                "{} alternates exceeds the maximum of {}",
                raw.alternates.len(),
                MAX_ALTERNATES
            )));
        }
        // Each alternate was already validated by its own deserializer.
        Ok(Self {
            mode: raw.mode,
            input_summary: raw.input_summary,
            status: raw.status,
            primary_url: raw.primary_url,
            confidence: raw.confidence,
            alternates: raw.alternates,
            notes: raw.notes,
            debug: raw.debug,
        })
    }
}

impl MapperOutput {
    /// Envelope for a single confident match.
    pub fn matched(
        mode: Mode,
        input_summary: InputSummary,
        primary_url: impl Into<String>,
        confidence: f64,
        debug: DebugInfo,
    ) -> Result<Self> {
        validate_confidence(confidence)?;
        Ok(Self {
            mode,
            input_summary,
            status: MatchStatus::Match,
            primary_url: Some(primary_url.into()),
            confidence: Some(confidence),
            alternates: Vec::new(),
            notes: Vec::new(),
            debug,
        })
    }

    /// Envelope for an ambiguous result with ranked candidates.
    ///
    /// The candidate order is the matcher's ranking and is preserved
    /// verbatim. More than [`MAX_ALTERNATES`] candidates is a schema
    /// violation, never truncated here.
    pub fn ambiguous(
        mode: Mode,
        input_summary: InputSummary,
        alternates: Vec<AlternateMatch>,
        debug: DebugInfo,
    ) -> Result<Self> {
        if alternates.len() > MAX_ALTERNATES {
            return Err(FragMapperError::Schema(format!(
                "{} alternates exceeds the maximum of {}",
                alternates.len(),
                MAX_ALTERNATES
            )));
        }
        for alt in &alternates {
            validate_confidence(alt.confidence)?;
        }
        Ok(Self {
            mode,
            input_summary,
            status: MatchStatus::Ambiguous,
            primary_url: None,
            confidence: None,
            alternates,
            notes: Vec::new(),
            debug,
        })
    }

    /// Envelope for "nothing found".
    pub fn no_match(
        mode: Mode,
        input_summary: InputSummary,
        notes: Vec<String>,
        debug: DebugInfo,
    ) -> Self {
        Self {
            mode,
            input_summary,
            status: MatchStatus::NoMatch,
            primary_url: None,
            confidence: None,
            alternates: Vec::new(),
            notes,
            debug,
        }
    }

    /// Envelope for an input vetoed by exclusion terms.
    pub fn excluded(
        mode: Mode,
        input_summary: InputSummary,
        notes: Vec<String>,
        debug: DebugInfo,
    ) -> Self {
        Self {
            mode,
            input_summary,
            status: MatchStatus::Excluded,
            primary_url: None,
            confidence: None,
            alternates: Vec::new(),
            notes,
            debug,
        }
    }

    /// Project the envelope to the minimal human-facing string.
    ///
    /// - `MATCH`: the URL alone, nothing else
    /// - `AMBIGUOUS`: the literal `AMBIGUOUS`, then one URL per line in
    ///   stored order, at most 5
    /// - anything else: the literal `NOT_FOUND`
    ///
    /// Pure and total; never fails for a constructed envelope.
    pub fn to_simple_output(&self) -> String {
        match (self.status, &self.primary_url) {
            (MatchStatus::Match, Some(url)) => url.clone(),
            (MatchStatus::Ambiguous, _) if !self.alternates.is_empty() => {
                let mut out = String::from("AMBIGUOUS");
                for alt in self.alternates.iter().take(MAX_ALTERNATES) {
                    out.push('\n');
                    out.push_str(&alt.url);
                }
                out
            }
            _ => String::from("NOT_FOUND"),
        }
    }
}
