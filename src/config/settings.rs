//! Configuration settings for the simulation runner

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of generations to advance.
    pub generations: u64,
    /// Stop the run early once the population is extinct.
    pub stop_on_extinction: bool,
    /// Print the population after every generation instead of only the last.
    pub show_each_generation: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub pattern_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where to save the final population; `None` skips saving.
    pub save_file: Option<PathBuf>,
    /// Viewport metadata written into saved documents, in `"w,h"` form.
    pub viewport: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                generations: 10,
                stop_on_extinction: true,
                show_each_generation: false,
            },
            input: InputConfig {
                pattern_file: PathBuf::from("input/patterns/glider.json"),
            },
            output: OutputConfig {
                save_file: None,
                viewport: "500,500".to_string(),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // Validation happens after CLI overrides are merged, not here.
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if !self.input.pattern_file.exists() {
            anyhow::bail!(
                "Pattern file does not exist: {}",
                self.input.pattern_file.display()
            );
        }

        self.output
            .viewport
            .parse::<crate::universe::Viewport>()
            .with_context(|| format!("Invalid viewport setting: {}", self.output.viewport))?;

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = pattern_file.clone();
        }
        if let Some(ref save_file) = cli_overrides.save_file {
            self.output.save_file = Some(save_file.clone());
        }
        if cli_overrides.show_each_generation {
            self.simulation.show_each_generation = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<u64>,
    pub pattern_file: Option<PathBuf>,
    pub save_file: Option<PathBuf>,
    pub show_each_generation: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_shape() {
        let settings = Settings::default();
        assert_eq!(settings.simulation.generations, 10);
        assert!(settings.simulation.stop_on_extinction);
        assert!(settings.output.save_file.is_none());
    }

    #[test]
    fn test_settings_round_trip() {
        let temp_dir = tempdir().unwrap();
        let pattern_path = temp_dir.path().join("pattern.json");
        std::fs::write(&pattern_path, "{}").unwrap();

        let mut settings = Settings::default();
        settings.input.pattern_file = pattern_path;
        settings.simulation.generations = 42;

        let config_path = temp_dir.path().join("config.yaml");
        settings.to_file(&config_path).unwrap();

        let loaded = Settings::from_file(&config_path).unwrap();
        assert_eq!(loaded.simulation.generations, 42);
    }

    #[test]
    fn test_validate_rejects_zero_generations() {
        let mut settings = Settings::default();
        settings.simulation.generations = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_viewport() {
        let temp_dir = tempdir().unwrap();
        let pattern_path = temp_dir.path().join("pattern.json");
        std::fs::write(&pattern_path, "{}").unwrap();

        let mut settings = Settings::default();
        settings.input.pattern_file = pattern_path;
        settings.output.viewport = "wide".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            generations: Some(100),
            pattern_file: Some(PathBuf::from("other.json")),
            save_file: None,
            show_each_generation: true,
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.simulation.generations, 100);
        assert_eq!(settings.input.pattern_file, PathBuf::from("other.json"));
        assert!(settings.simulation.show_each_generation);
    }
}
