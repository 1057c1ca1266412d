// Errors raised while parsing an ftp:// URL
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlParseError {
    #[error("URL must start with 'ftp://': {0}")]
    MissingScheme(String),

    #[error("Missing host")]
    MissingHost,

    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Port out of range: {0}")]
    PortOutOfRange(u32),

    #[error("Malformed URL: {0}")]
    Malformed(String),
}
