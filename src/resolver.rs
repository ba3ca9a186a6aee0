//! Decides how a single chat message is answered.
//!
//! Order of evaluation: empty input, exact FAQ match, optional keyword
//! redirect, missing credential, then one completion request. Every path ends
//! in a reply string; provider failures are logged and replaced by a fixed
//! apology.

use std::sync::Arc;

use crate::config::KeywordRedirect;
use crate::consts;
use crate::errors::RelayError;
use crate::faq::{self, FaqTable};
use crate::llm_client::LLMClientTrait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    InvalidInput,
    Faq(String),
    Redirect(String),
    Completion(String),
    MissingCredential,
    ProviderFailure,
}

impl Resolution {
    pub fn into_text(self) -> String {
        match self {
            Resolution::InvalidInput => consts::INVALID_MESSAGE_REPLY.to_string(),
            Resolution::Faq(text) | Resolution::Redirect(text) | Resolution::Completion(text) => {
                text
            }
            Resolution::MissingCredential => consts::MISSING_API_KEY_REPLY.to_string(),
            Resolution::ProviderFailure => consts::PROVIDER_ERROR_REPLY.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct ResponseResolver {
    faq: Arc<FaqTable>,
    client: Arc<dyn LLMClientTrait>,
    keyword_redirect: Option<KeywordRedirect>,
}

impl ResponseResolver {
    pub fn new(faq: Arc<FaqTable>, client: Arc<dyn LLMClientTrait>) -> Self {
        Self {
            faq,
            client,
            keyword_redirect: None,
        }
    }

    pub fn with_keyword_redirect(mut self, keyword_redirect: Option<KeywordRedirect>) -> Self {
        self.keyword_redirect = keyword_redirect;
        self
    }

    pub async fn resolve(&self, message: &str) -> String {
        self.resolve_outcome(message).await.into_text()
    }

    pub async fn resolve_outcome(&self, message: &str) -> Resolution {
        let normalized = faq::normalize(message);
        if normalized.is_empty() {
            log::warn!("received empty message");
            return Resolution::InvalidInput;
        }

        if let Some(answer) = self.faq.lookup(&normalized) {
            log::info!("FAQ matched for message: {}", message);
            return Resolution::Faq(answer.to_string());
        }

        if let Some(redirect) = &self.keyword_redirect {
            if redirect.matches(&normalized) {
                log::info!("keyword redirect for message: {}", message);
                return Resolution::Redirect(redirect.reply.clone());
            }
        }

        if !self.client.is_configured() {
            log::error!("completion client has no API key configured");
            return Resolution::MissingCredential;
        }

        match self.client.complete(message).await {
            Ok(text) => {
                log::debug!("completion response: {}", text);
                Resolution::Completion(text)
            }
            Err(RelayError::MissingCredential) => {
                log::error!("completion client has no API key configured");
                Resolution::MissingCredential
            }
            Err(
                e @ (RelayError::ApiError(_)
                | RelayError::ParseError(_)
                | RelayError::NetworkError(_)
                | RelayError::ConfigError(_)),
            ) => {
                log::error!("completion request failed: {}", e);
                Resolution::ProviderFailure
            }
        }
    }
}
