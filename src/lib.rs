//! fragmapper maps messy fragrance listings to canonical catalog URLs.
//!
//! Raw text → [`normalizer::TextNormalizer`] (cleanup, field extraction,
//! exclusion detection) → [`mapper::ModeHandler`] (veto or delegate to a
//! [`matcher::Matcher`]) → [`schema::MapperOutput`] envelope with a strict
//! simple-string projection. The [`router::Router`] selects exactly one
//! handler per request by mode.

pub mod cli;
pub mod config;
pub mod error;
pub mod mapper;
pub mod matcher;
pub mod normalizer;
pub mod router;
pub mod schema;
