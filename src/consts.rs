pub const INVALID_MESSAGE_REPLY: &str = "Please enter a valid message.";
pub const MISSING_API_KEY_REPLY: &str = "Configuration error: API key is missing.";
pub const PROVIDER_ERROR_REPLY: &str = "Sorry, there was an error processing your request.";

pub const DEFAULT_KEYWORD_REDIRECT_REPLY: &str =
    "It looks like you need help. Please check our FAQ section or contact support.";
pub const DEFAULT_REDIRECT_KEYWORDS: [&str; 2] = ["help", "faq"];

pub const DEFAULT_MODEL_NAME: &str = "gpt-4o-mini";
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_CONFIG_FILE: &str = "./config.json";
pub const CONFIG_FILE_ENV: &str = "FR_CONFIG_FILE";

pub(crate) const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

pub const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const REQUEST_TIMEOUT_SECS: u64 = 60;
pub const SERVER_ADDRESS: &str = "0.0.0.0";
pub const SERVER_PORT: u16 = 8000;

pub const API_KEY_LOADED_STATUS: &str = "API key loaded successfully.";
pub const API_KEY_MISSING_STATUS: &str = "API key not found.";
