use std::sync::Arc;

use serde_json::{Value, json};

use faq_relay::config::{CompletionConfig, Config};
use faq_relay::faq::FaqTable;
use faq_relay::llm_client::LLMClient;
use faq_relay::resolver::ResponseResolver;

pub const NON_FAQ_MESSAGE: &str = "Tell me something interesting.";

pub fn sample_completion_response(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test-1",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 12, "total_tokens": 22}
    })
}

pub fn sample_error_response() -> Value {
    json!({
        "error": {
            "message": "Internal server error",
            "type": "internal_error"
        }
    })
}

pub fn create_completion_config(base_url: String, api_key: &str) -> CompletionConfig {
    CompletionConfig {
        model_name: "gpt-4o-mini".to_string(),
        api_url: base_url,
        api_key_env: "OPENAI_API_KEY".to_string(),
        api_key: api_key.to_string(),
        connect_timeout_secs: 5,
        request_timeout_secs: 5,
    }
}

pub fn create_test_config(base_url: String, api_key: &str) -> Config {
    Config {
        completion: create_completion_config(base_url, api_key),
        ..Config::default()
    }
}

pub fn create_resolver(config: &Config) -> ResponseResolver {
    let http_client = LLMClient::build_http_client(&config.completion).unwrap();
    let llm_client = LLMClient::from_config(http_client, &config.completion);
    ResponseResolver::new(Arc::new(FaqTable::default()), Arc::new(llm_client))
        .with_keyword_redirect(config.keyword_redirect.clone())
}
