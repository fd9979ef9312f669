use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LoquiConfig {
    pub chat: ChatConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChatConfig {
    /// Label printed before every reply.
    pub bot_name: String,
    /// Label printed before the input prompt.
    pub user_name: String,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Knowledge file loaded at session start. Empty disables preloading.
    pub default_kb: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: "Loqui".into(),
            user_name: "You".into(),
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            default_kb: String::new(),
        }
    }
}

/// Returns `~/.loqui/`
pub fn default_loqui_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".loqui")
}

/// Returns the default config file path: `~/.loqui/config.toml`
pub fn default_config_path() -> PathBuf {
    default_loqui_dir().join("config.toml")
}

impl LoquiConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            LoquiConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (LOQUI_KB, LOQUI_BOT_NAME,
    /// LOQUI_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("LOQUI_KB") {
            self.storage.default_kb = val;
        }
        if let Ok(val) = std::env::var("LOQUI_BOT_NAME") {
            self.chat.bot_name = val;
        }
        if let Ok(val) = std::env::var("LOQUI_LOG_LEVEL") {
            self.chat.log_level = val;
        }
    }

    /// The knowledge file to preload, expanding `~` if needed. `None` when
    /// no default is configured.
    pub fn resolved_kb_path(&self) -> Option<PathBuf> {
        if self.storage.default_kb.is_empty() {
            None
        } else {
            Some(expand_tilde(&self.storage.default_kb))
        }
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = LoquiConfig::default();
        assert_eq!(config.chat.bot_name, "Loqui");
        assert_eq!(config.chat.user_name, "You");
        assert_eq!(config.chat.log_level, "info");
        assert!(config.resolved_kb_path().is_none());
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[chat]
bot_name = "Marvin"
log_level = "debug"

[storage]
default_kb = "/tmp/kb.ini"
"#;
        let config: LoquiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chat.bot_name, "Marvin");
        assert_eq!(config.chat.log_level, "debug");
        assert_eq!(config.storage.default_kb, "/tmp/kb.ini");
        // defaults still apply for unset fields
        assert_eq!(config.chat.user_name, "You");
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = LoquiConfig::default();
        std::env::set_var("LOQUI_KB", "/tmp/override.ini");
        std::env::set_var("LOQUI_BOT_NAME", "Eliza");
        std::env::set_var("LOQUI_LOG_LEVEL", "trace");

        config.apply_env_overrides();

        assert_eq!(config.storage.default_kb, "/tmp/override.ini");
        assert_eq!(config.chat.bot_name, "Eliza");
        assert_eq!(config.chat.log_level, "trace");

        // Clean up
        std::env::remove_var("LOQUI_KB");
        std::env::remove_var("LOQUI_BOT_NAME");
        std::env::remove_var("LOQUI_LOG_LEVEL");
    }
}
