use std::error::Error;

#[derive(thiserror::Error, Debug)]
pub enum SdnError {
    #[error("[{hook}] {source}")]
    Registration {
        hook: &'static str,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse URL: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("deserialization failed: {0}")]
    DeserializeJson(#[from] serde_json::Error),
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(Box<dyn Error + Send + Sync>),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl SdnError {
    pub fn other<E: Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Other(Box::new(err))
    }

    /// Wraps an engine-side registration failure with the name of the hook
    /// that attempted it.
    pub fn registration(hook: &'static str, err: anyhow::Error) -> Self {
        Self::Registration {
            hook,
            source: err.into(),
        }
    }
}
