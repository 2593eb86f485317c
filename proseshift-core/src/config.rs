use crate::error::ShiftResult;
use crate::rules::engine::STAGE_NAMES;
use serde::{Deserialize, Serialize};

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_output_suffix() -> String {
    "_humanized".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftConfig {
    /// Inserted between the file stem and extension of generated output names
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
    /// Protect and restore only, bypassing the rule cascade
    #[serde(default)]
    pub protect_only: bool,
    /// Which cascade stages run
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Stage selection for the rule cascade.
///
/// Stage order is fixed by the engine. Listing a stage here only toggles it;
/// stages not listed run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineConfig {
    #[serde(default)]
    pub stages: Vec<StageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageConfig {
    /// Name of the stage
    pub name: String,
    /// Whether this stage is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stages: STAGE_NAMES
                .iter()
                .map(|name| StageConfig {
                    name: name.to_string(),
                    enabled: true,
                })
                .collect(),
        }
    }
}

impl PipelineConfig {
    pub fn is_enabled(&self, stage_name: &str) -> bool {
        self.stages
            .iter()
            .find(|stage| stage.name == stage_name)
            .map_or(true, |stage| stage.enabled)
    }

    /// Names in the config that no stage answers to
    pub fn unknown_stages<'a>(&'a self, known: &[&str]) -> Vec<&'a str> {
        self.stages
            .iter()
            .map(|stage| stage.name.as_str())
            .filter(|name| !known.contains(name))
            .collect()
    }
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            output_suffix: default_output_suffix(),
            protect_only: false,
            pipeline: PipelineConfig::default(),
        }
    }
}

impl ShiftConfig {
    /// Load config from a YAML file
    pub fn load_from_file(path: &str) -> ShiftResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> ShiftResult<Self> {
        let config: ShiftConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                eprintln!("⚠️  Failed to load config from {p} ({e}), using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_every_stage() {
        let config = ShiftConfig::default();
        assert_eq!(config.output_suffix, "_humanized");
        for name in STAGE_NAMES {
            assert!(config.pipeline.is_enabled(name));
        }
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = ShiftConfig::from_yaml("protect_only: true\n").unwrap();
        assert!(config.protect_only);
        assert_eq!(config.output_suffix, "_humanized");
        assert_eq!(config.pipeline, PipelineConfig::default());
    }

    #[test]
    fn test_yaml_stage_toggle() {
        let yaml = "
output_suffix: _rewritten
pipeline:
  stages:
    - name: Possession
      enabled: false
    - name: ChangeOfState
";
        let config = ShiftConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.output_suffix, "_rewritten");
        assert!(!config.pipeline.is_enabled("Possession"));
        assert!(config.pipeline.is_enabled("ChangeOfState"));
        // Unlisted stages still run
        assert!(config.pipeline.is_enabled("VerbLexicon"));
    }

    #[test]
    fn test_unknown_stage_names() {
        let pipeline = PipelineConfig {
            stages: vec![StageConfig {
                name: "Nope".to_string(),
                enabled: true,
            }],
        };
        assert_eq!(pipeline.unknown_stages(&STAGE_NAMES), vec!["Nope"]);
        assert!(PipelineConfig::default().unknown_stages(&STAGE_NAMES).is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_a_config_error() {
        let err = ShiftConfig::from_yaml("pipeline: [unterminated").unwrap_err();
        assert!(matches!(err, crate::error::ShiftError::Config(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = ShiftConfig::load_with_fallback(Some("/nonexistent/proseshift.yaml"));
        assert!(!config.protect_only);
    }
}
