use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Credential error: {0}")]
    Credential(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Credential parse error: {0}")]
    CredentialParse(#[from] serde_json::Error),

    #[error("JWT signing error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Token exchange failed with status {status}: {body}")]
    Token { status: StatusCode, body: String },

    #[error("Write to {collection}/{key} failed with status {status}: {body}")]
    Write {
        collection: String,
        key: String,
        status: StatusCode,
        body: String,
    },

    #[error("Timestamp format error: {0}")]
    TimestampFormat(#[from] time::error::Format),
}
