use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelpdeskError {
    #[error("ticket {0} not found")]
    TicketNotFound(u64),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("unable to connect to server: {0}")]
    Transport(String),

    #[error("server error: {0}")]
    Api(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl HelpdeskError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        HelpdeskError::Validation {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HelpdeskError>;
