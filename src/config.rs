//! Rules configuration
//!
//! Deployment-level rules loaded once at startup: a global exclusion-list
//! override plus opaque per-mode blocks (`hard_rules`, `output_contract`)
//! that are passed through to the skills, not interpreted here.

use crate::error::{FragMapperError, Result};
use crate::normalizer::patterns::DEFAULT_EXCLUSIONS;
use crate::schema::Mode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub version: String,
    pub global: GlobalRules,
    pub modes: HashMap<String, ModeRules>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalRules {
    /// Overrides the built-in exclusion list when present.
    pub exclusions: Option<Vec<String>>,
}

/// Per-mode rule block. Opaque pass-through data for the skill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeRules {
    pub hard_rules: Vec<String>,
    pub output_contract: HashMap<String, String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            global: GlobalRules::default(),
            modes: HashMap::new(),
        }
    }
}

impl RulesConfig {
    /// Load from the given path, or the default location.
    ///
    /// A missing file is not an error: defaults apply. A malformed file is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: RulesConfig = serde_json::from_str(&content)
            .map_err(|e| FragMapperError::Config(format!("invalid rules file: {}", e)))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FragMapperError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("fragmapper").join("rules.json"))
    }

    /// Effective exclusion list: the global override, else the defaults.
    pub fn exclusions(&self) -> Vec<String> {
        match &self.global.exclusions {
            Some(list) => list.clone(),
            None => DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The opaque rule block for a mode, if configured.
    pub fn mode_rules(&self, mode: Mode) -> Option<&ModeRules> {
        self.modes.get(mode.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exclusions() {
        let config = RulesConfig::default();
        let exclusions = config.exclusions();
        assert_eq!(exclusions.len(), 10);
        assert_eq!(exclusions[0], "decant");
    }

    #[test]
    fn test_exclusions_override() {
        let config = RulesConfig {
            global: GlobalRules {
                exclusions: Some(vec!["clone".into(), "dupe".into()]),
            },
            ..Default::default()
        };
        assert_eq!(config.exclusions(), vec!["clone", "dupe"]);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let config = RulesConfig::load(Some(&path)).unwrap();
        assert_eq!(config.version, "1.0.0");
        assert!(config.modes.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");

        let mut config = RulesConfig::default();
        config.global.exclusions = Some(vec!["decant".into()]);
        config.modes.insert(
            "DESC_TO_PARFUMO_URL".into(),
            ModeRules {
                hard_rules: vec!["never guess".into()],
                output_contract: HashMap::from([("match".into(), "url only".into())]),
            },
        );
        config.save(&path).unwrap();

        let loaded = RulesConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.exclusions(), vec!["decant"]);
        let rules = loaded.mode_rules(Mode::DescToParfumoUrl).unwrap();
        assert_eq!(rules.hard_rules, vec!["never guess"]);
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(RulesConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(
            &path,
            r#"{"version": "2.0.0", "future_section": {"x": 1}}"#,
        )
        .unwrap();
        let config = RulesConfig::load(Some(&path)).unwrap();
        assert_eq!(config.version, "2.0.0");
    }
}
