//! Mode dispatch
//!
//! The router is a dispatcher, not a thinker: it selects exactly one
//! skill per request, returns its result unmodified, and never mixes
//! output across skills.

use crate::config::RulesConfig;
use crate::error::Result;
use crate::mapper::ModeHandler;
use crate::schema::{DebugInfo, InputSummary, MapperOutput, Mode};
use serde::Serialize;
use std::collections::HashMap;

pub const ROUTER_VERSION: &str = "1.0.0";

pub struct Router {
    config_version: String,
    handlers: Vec<ModeHandler>,
}

/// Version/metadata summary. Queryable, not part of the mapping contract.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub router: String,
    pub config_version: String,
    pub skills: HashMap<String, String>,
}

impl Router {
    /// Router with the default skill per mode.
    pub fn new(config: &RulesConfig) -> Self {
        Self::with_handlers(
            config,
            vec![
                ModeHandler::parfumo(config),
                ModeHandler::fragrantica(config),
                ModeHandler::crosswalk(config),
            ],
        )
    }

    /// Router over an explicit handler set (custom matchers, tests).
    pub fn with_handlers(config: &RulesConfig, handlers: Vec<ModeHandler>) -> Self {
        Self {
            config_version: config.version.clone(),
            handlers,
        }
    }

    /// Route input to the handler registered for `mode`.
    ///
    /// An unregistered mode is not an error: it resolves to a NO_MATCH
    /// envelope with an explanatory note. Matcher contract violations from
    /// the selected handler propagate unchanged.
    pub fn route(&self, mode: Mode, input_text: &str) -> Result<MapperOutput> {
        match self.handlers.iter().find(|h| h.mode() == mode) {
            Some(handler) => handler.execute(input_text),
            None => Ok(MapperOutput::no_match(
                mode,
                InputSummary::default(),
                vec!["Unsupported MODE".to_string()],
                DebugInfo::default(),
            )),
        }
    }

    /// Simple string form of [`Router::route`].
    pub fn simple_output(&self, mode: Mode, input_text: &str) -> Result<String> {
        Ok(self.route(mode, input_text)?.to_simple_output())
    }

    /// Registered modes, in registration order.
    pub fn supported_modes(&self) -> Vec<Mode> {
        self.handlers.iter().map(|h| h.mode()).collect()
    }

    pub fn version_info(&self) -> VersionInfo {
        VersionInfo {
            router: ROUTER_VERSION.to_string(),
            config_version: self.config_version.clone(),
            skills: self
                .handlers
                .iter()
                .map(|h| (h.mode().to_string(), h.version().to_string()))
                .collect(),
        }
    }
}
