use std::time::Duration;

use async_trait::async_trait;

use crate::config::CompletionConfig;
use crate::consts;
use crate::errors::RelayError;
use crate::llm_request;
use crate::models::response::ChatCompletion;

/// Completion provider seen by the resolver.
#[async_trait]
pub trait LLMClientTrait: Send + Sync {
    /// False when no credential is available; callers must not call `complete` then.
    fn is_configured(&self) -> bool;

    /// Sends `user_message` as a single user turn and returns the first completion.
    async fn complete(&self, user_message: &str) -> Result<String, RelayError>;
}

pub struct LLMClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model_name: String,
}

impl LLMClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str, model_name: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model_name: model_name.to_string(),
        }
    }

    pub fn from_config(client: reqwest::Client, config: &CompletionConfig) -> Self {
        Self::new(
            client,
            &config.api_url,
            &config.api_key,
            &config.model_name,
        )
    }

    pub fn build_http_client(config: &CompletionConfig) -> Result<reqwest::Client, RelayError> {
        reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| RelayError::ConfigError(format!("failed to build http client: {e}")))
    }

    async fn request_chat_completion(&self, user_message: &str) -> Result<ChatCompletion, RelayError> {
        let request = llm_request::build_completion_request(&self.model_name, user_message);

        let response = self
            .client
            .post(format!("{}{}", self.base_url, consts::CHAT_COMPLETIONS_PATH))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(RelayError::ApiError(format!("status {status}, text {text}")));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| RelayError::ParseError(format!("{e}, body {body}")))
    }
}

#[async_trait]
impl LLMClientTrait for LLMClient {
    fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    async fn complete(&self, user_message: &str) -> Result<String, RelayError> {
        if !self.is_configured() {
            return Err(RelayError::MissingCredential);
        }

        let completion = self.request_chat_completion(user_message).await?;
        llm_request::extract_completion_text(completion)
    }
}
