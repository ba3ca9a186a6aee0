use serde::{self, Deserialize, Serialize};

use super::{Role, Usage};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Choice {
    #[serde(default)]
    pub index: i32,
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Only `choices` is required; providers differ on the rest.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatCompletion {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub usage: Option<Usage>,
}
