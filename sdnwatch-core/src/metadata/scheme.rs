use async_trait::async_trait;
use url::Url;

use super::{FileStat, HttpMetadataQuery, LocalMetadataQuery, MetadataError, MetadataQuery};

/// Picks a backend by URI scheme. Plain paths go to the local filesystem.
#[derive(Debug, Clone)]
pub struct SchemeMetadataQuery {
    local: LocalMetadataQuery,
    http: Option<HttpMetadataQuery>,
}

impl SchemeMetadataQuery {
    pub fn new(local: LocalMetadataQuery, http: Option<HttpMetadataQuery>) -> Self {
        Self { local, http }
    }
}

#[async_trait]
impl MetadataQuery for SchemeMetadataQuery {
    async fn stat(&self, path: &str) -> Result<FileStat, MetadataError> {
        let scheme = match Url::parse(path) {
            Ok(url) => url.scheme().to_owned(),
            Err(url::ParseError::RelativeUrlWithoutBase) => return self.local.stat(path).await,
            Err(source) => {
                return Err(MetadataError::InvalidUri {
                    uri: path.to_owned(),
                    source,
                })
            }
        };

        match (scheme.as_str(), &self.http) {
            ("file", _) => self.local.stat(path).await,
            ("http" | "https", Some(http)) => http.stat(path).await,
            _ => Err(MetadataError::UnsupportedScheme(scheme)),
        }
    }
}
