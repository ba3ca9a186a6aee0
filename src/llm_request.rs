use crate::errors::RelayError;
use crate::models::request::{ChatCompletionCreate, Message};
use crate::models::response::ChatCompletion;
use crate::models::Role;

/// Single user turn carrying `user_message` exactly as received.
pub(crate) fn build_completion_request(model_name: &str, user_message: &str) -> ChatCompletionCreate {
    ChatCompletionCreate {
        model: model_name.to_string(),
        messages: vec![Message {
            role: Role::User,
            content: user_message.to_string(),
        }],
    }
}

/// Reads `choices[0].message.content`, untouched.
pub(crate) fn extract_completion_text(completion: ChatCompletion) -> Result<String, RelayError> {
    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| RelayError::ParseError("response has no choices".to_string()))?;

    choice
        .message
        .content
        .ok_or_else(|| RelayError::ParseError("first choice has no message content".to_string()))
}
