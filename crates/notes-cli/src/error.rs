use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server returned {0}")]
    Api(String),
    #[error("RPC failed with status {code}: {message}")]
    Rpc { code: i32, message: String },
    #[error("RPC timed out after {0} ms")]
    Timeout(u64),
    #[error("Malformed protobuf response: {0}")]
    Decode(#[from] prost::DecodeError),
    #[error("Malformed protobuf response: {0}")]
    Mapping(#[from] notes_proto::MappingError),
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
