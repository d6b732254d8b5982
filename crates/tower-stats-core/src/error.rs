use thiserror::Error;

/// Failure to rebuild a `Record` from a plain mapping
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid record mapping: {0}")]
    InvalidMapping(#[from] serde_json::Error),
}
