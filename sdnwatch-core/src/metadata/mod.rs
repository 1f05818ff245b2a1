//! Source size lookups
//!
//! One point lookup per pair per aggregation pass. Backends fail explicitly;
//! nothing here retries.

mod http;
mod local;
mod scheme;

use async_trait::async_trait;

pub use http::HttpMetadataQuery;
pub use local::LocalMetadataQuery;
pub use scheme::SchemeMetadataQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub size: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("could not stat {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid URI {uri}: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported URI scheme: {0}")]
    UnsupportedScheme(String),
    #[error("request for {uri} failed: {source}")]
    Http {
        uri: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("server returned {status} for {uri}")]
    Status {
        uri: String,
        status: reqwest::StatusCode,
    },
    #[error("no size reported for {0}")]
    MissingSize(String),
}

#[async_trait]
pub trait MetadataQuery: Send + Sync {
    async fn stat(&self, path: &str) -> Result<FileStat, MetadataError>;
}
