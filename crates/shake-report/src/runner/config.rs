//! Run configuration loaded from TOML.
//!
//! ```toml
//! program = "/usr/local/bin/shake"
//! options = "-pvvv"
//! target = "/home/me/music"
//! ```

use super::command::ShakeCommand;
use crate::utils::config::{DEFAULT_OPTIONS, DEFAULT_PROGRAM};
use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tool settings, every field optional in the file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShakeConfig {
    pub program: String,
    pub options: String,
    pub target: Option<String>,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            options: DEFAULT_OPTIONS.to_string(),
            target: None,
        }
    }
}

impl ShakeConfig {
    /// Apply command-line values on top of the file; `Some` wins
    pub fn merge(
        mut self,
        program: Option<String>,
        options: Option<String>,
        target: Option<String>,
    ) -> Self {
        if let Some(program) = program {
            self.program = program;
        }
        if let Some(options) = options {
            self.options = options;
        }
        if target.is_some() {
            self.target = target;
        }
        self
    }

    /// Build the command, if a target is known
    pub fn to_command(&self) -> Option<ShakeCommand> {
        let target = self.target.as_ref()?;
        Some(
            ShakeCommand::new(target.clone())
                .with_program(self.program.clone())
                .with_options(self.options.clone()),
        )
    }
}

/// Load a config from a TOML file
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
pub fn load_config(path: impl AsRef<Path>) -> Result<ShakeConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: ShakeConfig = toml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: ShakeConfig = toml::from_str("target = \"doc\"").unwrap();
        assert_eq!(config.program, "shake");
        assert_eq!(config.options, "-pvvv");
        assert_eq!(config.target.as_deref(), Some("doc"));
    }

    #[test]
    fn test_merge_prefers_cli() {
        let config = ShakeConfig {
            program: "./shake".to_string(),
            options: "-p".to_string(),
            target: Some("a".to_string()),
        }
        .merge(None, Some("-pvv".to_string()), Some("b".to_string()));

        assert_eq!(config.program, "./shake");
        assert_eq!(config.options, "-pvv");
        assert_eq!(config.target.as_deref(), Some("b"));
    }

    #[test]
    fn test_to_command_requires_target() {
        assert!(ShakeConfig::default().to_command().is_none());

        let cmd = ShakeConfig::default()
            .merge(None, None, Some("doc".to_string()))
            .to_command()
            .unwrap();
        assert_eq!(cmd.args(), vec!["-pvvv", "--", "doc"]);
    }

    #[test]
    fn test_load_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "program = \"/opt/shake\"\ntarget = \"/srv\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.program, "/opt/shake");
        assert_eq!(config.target.as_deref(), Some("/srv"));
    }

    #[test]
    fn test_load_config_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "program = [").unwrap();
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::ParseFailed(_))
        ));
    }
}
