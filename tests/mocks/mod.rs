use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use faq_relay::config::{Config, ConfigLoader};
use faq_relay::errors::RelayError;
use faq_relay::llm_client::LLMClientTrait;

/// Replays queued replies and records every message it was asked to complete.
pub struct MockLLMClient {
    configured: bool,
    responses: Mutex<VecDeque<Result<String, RelayError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockLLMClient {
    pub fn new() -> Self {
        Self {
            configured: true,
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    pub fn add_response(&self, response: Result<String, RelayError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMClientTrait for MockLLMClient {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(&self, user_message: &str) -> Result<String, RelayError> {
        self.calls.lock().unwrap().push(user_message.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RelayError::ApiError("no mock response queued".to_string())))
    }
}

pub struct InMemoryConfigLoader {
    config: Config,
}

impl InMemoryConfigLoader {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for InMemoryConfigLoader {
    fn load_config(&self) -> Result<Config, RelayError> {
        Ok(self.config.clone())
    }
}
