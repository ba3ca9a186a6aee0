use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::RelayError;
use crate::faq::{self, FaqTable};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CompletionConfig {
    pub model_name: String,
    pub api_url: String,
    /// Name of the environment variable holding the credential.
    pub api_key_env: String,
    /// Resolved from `api_key_env` at load time, never read from the file.
    #[serde(skip)]
    pub api_key: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model_name: consts::DEFAULT_MODEL_NAME.to_string(),
            api_url: consts::DEFAULT_API_URL.to_string(),
            api_key_env: consts::DEFAULT_API_KEY_ENV.to_string(),
            api_key: String::new(),
            connect_timeout_secs: consts::CONNECT_TIMEOUT_SECS,
            request_timeout_secs: consts::REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Optional rule answering keyword messages ("help", "faq") with a fixed reply
/// instead of calling the completion provider.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct KeywordRedirect {
    pub keywords: Vec<String>,
    pub reply: String,
}

impl Default for KeywordRedirect {
    fn default() -> Self {
        Self {
            keywords: consts::DEFAULT_REDIRECT_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            reply: consts::DEFAULT_KEYWORD_REDIRECT_REPLY.to_string(),
        }
    }
}

impl KeywordRedirect {
    pub fn matches(&self, message: &str) -> bool {
        let message = message.to_lowercase();
        self.keywords
            .iter()
            .filter(|k| !k.trim().is_empty())
            .any(|k| message.contains(&k.trim().to_lowercase()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub completion: CompletionConfig,
    /// Replaces the built-in FAQ entries when present.
    pub faq: Option<HashMap<String, String>>,
    pub keyword_redirect: Option<KeywordRedirect>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: consts::SERVER_ADDRESS.to_string(),
            port: consts::SERVER_PORT,
            completion: CompletionConfig::default(),
            faq: None,
            keyword_redirect: None,
        }
    }
}

impl Config {
    pub fn has_api_key(&self) -> bool {
        !self.completion.api_key.trim().is_empty()
    }

    pub fn faq_table(&self) -> FaqTable {
        match &self.faq {
            Some(entries) => FaqTable::from_entries(entries.iter().map(|(q, a)| (q, a.clone()))),
            None => FaqTable::default(),
        }
    }

    /// Rejects settings that would load but never behave: zero timeouts,
    /// blank FAQ questions, and FAQ questions that collide once normalized.
    pub fn validate(&self) -> Result<(), RelayError> {
        if self.completion.api_key_env.trim().is_empty() {
            return Err(RelayError::ConfigError(
                "completion.api_key_env must not be empty".to_string(),
            ));
        }
        if self.completion.connect_timeout_secs == 0 {
            return Err(RelayError::ConfigError(
                "completion.connect_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.completion.request_timeout_secs == 0 {
            return Err(RelayError::ConfigError(
                "completion.request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        let Some(entries) = &self.faq else {
            return Ok(());
        };

        let mut by_key: BTreeMap<String, BTreeSet<&str>> = BTreeMap::new();
        for question in entries.keys() {
            let key = faq::normalize(question);
            if key.is_empty() {
                return Err(RelayError::ConfigError(format!(
                    "faq question {:?} is blank",
                    question
                )));
            }
            by_key.entry(key).or_default().insert(question.as_str());
        }

        let collisions: Vec<String> = by_key
            .into_values()
            .filter(|questions| questions.len() > 1)
            .map(|questions| format!("{:?}", questions))
            .collect();
        if !collisions.is_empty() {
            return Err(RelayError::ConfigError(format!(
                "faq questions collide after normalization: {}",
                collisions.join(", ")
            )));
        }

        Ok(())
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, RelayError>;
}

pub struct FileConfigLoader {
    path: PathBuf,
    required: bool,
}

impl FileConfigLoader {
    /// A missing file at `path` is an error.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    /// A missing file at `path` falls back to defaults.
    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self) -> Result<Config, RelayError> {
        let mut config: Config = if !self.required && !self.path.exists() {
            log::info!(
                "config file {} not found, using defaults",
                self.path.display()
            );
            Config::default()
        } else {
            let config_str = std::fs::read_to_string(&self.path)?;
            serde_json::from_str(&config_str)?
        };

        config.validate()?;
        config.completion.api_key =
            std::env::var(&config.completion.api_key_env).unwrap_or_default();

        Ok(config)
    }
}

pub fn load_config() -> Result<Config, RelayError> {
    let loader = match std::env::var(consts::CONFIG_FILE_ENV) {
        Ok(path) => FileConfigLoader::new(path),
        Err(_) => FileConfigLoader::optional(consts::DEFAULT_CONFIG_FILE),
    };
    loader.load_config()
}
