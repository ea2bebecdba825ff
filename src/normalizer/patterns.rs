//! Fixed pattern tables for the text normalizer
//!
//! Every table is an explicitly ordered slice. Precedence is positional:
//! earlier entries win, and nothing here depends on map iteration order.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Concentration synonyms, tested in precedence order.
    ///
    /// EDP before EDT before EDC before the generic Parfum/Extrait class,
    /// so "eau de parfum" is never claimed by the broader `parfum` pattern.
    pub static ref CONCENTRATION_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\b(edp|eau\s+de\s+parfum)\b").unwrap(), "EDP"),
        (Regex::new(r"\b(edt|eau\s+de\s+toilette)\b").unwrap(), "EDT"),
        (Regex::new(r"\b(edc|eau\s+de\s+cologne|cologne)\b").unwrap(), "EDC"),
        (
            Regex::new(r"\b(parfum|extrait|extrait\s+de\s+parfum|pure\s+parfum)\b").unwrap(),
            "Parfum",
        ),
    ];

    /// Marketing boilerplate stripped during normalization.
    ///
    /// `100%` carries no trailing `\b` (there is no word boundary between
    /// `%` and a following space), otherwise whole-word matches.
    pub static ref NOISE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\b(spray)\b").unwrap(),
        Regex::new(r"\b(authentic)\b").unwrap(),
        Regex::new(r"\b100%").unwrap(),
        Regex::new(r"\b(genuine)\b").unwrap(),
        Regex::new(r"\b(original)\b").unwrap(),
        Regex::new(r"\b(new\s+in\s+box|nib)\b").unwrap(),
        Regex::new(r"\b(sealed)\b").unwrap(),
        Regex::new(r"\b(brand\s+new)\b").unwrap(),
        Regex::new(r"\b(free\s+shipping)\b").unwrap(),
    ];

    /// Everything outside word chars, whitespace, hyphen, period, slash.
    pub static ref SPECIAL_CHARS_RE: Regex = Regex::new(r"[^\w\s\-\./]").unwrap();

    /// Runs of whitespace, collapsed to a single space.
    pub static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();

    /// Milliliter size literal. Checked before the ounce pattern.
    pub static ref SIZE_ML_RE: Regex =
        Regex::new(r"(\d+(?:\.\d+)?)\s*(ml|milliliter)").unwrap();

    /// Imperial-ounce size literal, converted via [`OZ_TO_ML`].
    pub static ref SIZE_OZ_RE: Regex =
        Regex::new(r"(\d+(?:\.\d+)?)\s*(oz|ounce|fl\.?\s*oz)").unwrap();

    /// Four-digit release year, 1900-2099.
    pub static ref YEAR_RE: Regex = Regex::new(r"\b(19\d{2}|20\d{2})\b").unwrap();

    /// Target-audience phrases, tested in listed order; first class wins.
    pub static ref TARGET_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\b(pour\s+homme|for\s+men|men'?s?)\b").unwrap(), "men"),
        (Regex::new(r"\b(pour\s+femme|for\s+women|women'?s?)\b").unwrap(), "women"),
        (Regex::new(r"\b(unisex)\b").unwrap(), "unisex"),
    ];
}

/// Milliliters per imperial fluid ounce.
pub const OZ_TO_ML: f64 = 29.5735;

/// Default exclusion terms: listings these mark are never mapped.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "decant",
    "sample",
    "empty bottle",
    "box only",
    "tester",
    "travel size",
    "mini",
    "vial",
    "atomizer",
    "refill",
];

/// Flanker/edition vocabulary, tested in listed order.
pub const FLANKER_TERMS: &[&str] = &[
    "intense",
    "absolu",
    "absolute",
    "elixir",
    "sport",
    "nuit",
    "noir",
    "extreme",
    "privee",
    "reserve",
    "limited edition",
    "collector",
    "oud",
    "exclusive",
];
