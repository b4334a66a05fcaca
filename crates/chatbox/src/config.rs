use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::command::DEFAULT_EXIT_COMMAND;
use crate::error::{ChatError, ChatResult};

pub const CONFIG_ENV: &str = "CHATBOX_CONFIG";
pub const CATALOG_ENV: &str = "CHATBOX_CATALOG";
pub const SEED_ENV: &str = "CHATBOX_SEED";

pub const DEFAULT_CATALOG_FILENAME: &str = "intents.json";

/// Runtime settings for a chat session.
///
/// Every field is optional in the JSON file; missing fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChatboxConfig {
    /// Intent catalog. Relative paths in a config file resolve against
    /// that file's directory.
    pub catalog_path: PathBuf,
    pub welcome: String,
    pub farewell: String,
    pub user_prompt: String,
    pub bot_prefix: String,
    pub exit_command: String,
    /// Fixed seed for response selection; OS entropy when unset.
    pub seed: Option<u64>,
}

impl Default for ChatboxConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILENAME),
            welcome: "Welcome to chatbox".to_string(),
            farewell: "Good Bye!".to_string(),
            user_prompt: "You: ".to_string(),
            bot_prefix: "Chatbox: ".to_string(),
            exit_command: DEFAULT_EXIT_COMMAND.to_string(),
            seed: None,
        }
    }
}

impl ChatboxConfig {
    pub fn load(path: &Path) -> ChatResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|error| {
            ChatError::Config(format!("failed to read config {}: {error}", path.display()))
        })?;
        let mut config: ChatboxConfig = serde_json::from_str(&data).map_err(|error| {
            ChatError::Config(format!("failed to parse config {}: {error}", path.display()))
        })?;

        if config.catalog_path.is_relative() {
            if let Some(parent) = path.parent() {
                config.catalog_path = parent.join(&config.catalog_path);
            }
        }
        Ok(config)
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> ChatResult<Self> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Load the file named by `CHATBOX_CONFIG` (defaults otherwise), then
    /// apply the remaining variable overrides. `lookup` reads one variable.
    pub fn resolve<F>(lookup: F) -> ChatResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) => {
                tracing::info!("loading config from {path}");
                Self::load(Path::new(&path))?
            }
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> ChatResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(CATALOG_ENV) {
            self.catalog_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(SEED_ENV) {
            let seed = raw.trim().parse::<u64>().map_err(|error| {
                ChatError::Config(format!("invalid {SEED_ENV} value {raw:?}: {error}"))
            })?;
            self.seed = Some(seed);
        }
        Ok(())
    }
}
