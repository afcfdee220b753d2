use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub birthdays: BirthdaysConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthdaysConfig {
    /// Length of the upcoming-birthday window in days, today inclusive.
    #[serde(default = "default_window_days")]
    pub window_days: i64,
}

fn default_prompt() -> String {
    "bot_shell >> ".to_string()
}

fn default_window_days() -> i64 {
    7
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { prompt: default_prompt() }
    }
}

impl Default for BirthdaysConfig {
    fn default() -> Self {
        Self { window_days: default_window_days() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { shell: ShellConfig::default(), birthdays: BirthdaysConfig::default() }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "rolodex", "rolodex")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.shell.prompt, "bot_shell >> ");
        assert_eq!(config.birthdays.window_days, 7);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() -> Result<()> {
        let config: Config = toml::from_str("")?;
        assert_eq!(config.shell.prompt, "bot_shell >> ");
        assert_eq!(config.birthdays.window_days, 7);
        Ok(())
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        // Set up temporary config directory
        let temp_dir = tempdir()?;
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        let mut config = Config::default();
        config.birthdays.window_days = 14;
        config.save()?;

        let loaded = Config::load()?;

        assert_eq!(loaded.birthdays.window_days, 14);
        assert_eq!(loaded.shell.prompt, config.shell.prompt);

        Ok(())
    }
}
