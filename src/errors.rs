use std::fmt;

#[derive(Debug, Clone)]
pub enum RelayError {
    MissingCredential,
    ApiError(String),
    ParseError(String),
    ConfigError(String),
    NetworkError(String),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::MissingCredential => write!(f, "Missing credential: API key is not set"),
            RelayError::ApiError(msg) => write!(f, "API error: {}", msg),
            RelayError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            RelayError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            RelayError::NetworkError(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for RelayError {}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            RelayError::NetworkError(err.to_string())
        } else if err.is_decode() {
            RelayError::ParseError(err.to_string())
        } else {
            RelayError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for RelayError {
    fn from(err: std::io::Error) -> Self {
        RelayError::ConfigError(err.to_string())
    }
}

impl From<RelayError> for std::io::Error {
    fn from(err: RelayError) -> Self {
        std::io::Error::other(err.to_string())
    }
}
