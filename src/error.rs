//! Error Types

use thiserror::Error;

/// Anything that can go wrong between issuing a GraphQL operation and holding
/// its decoded payload.
#[derive(Debug, Error)]
pub enum GraphqlError {
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("server responded with HTTP {status}")]
    Http { status: u16 },
    #[error("server reported errors: {}", .0.join("; "))]
    Graphql(Vec<String>),
    #[error("response carried no data")]
    MissingData,
    #[error("malformed GraphQL payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}
