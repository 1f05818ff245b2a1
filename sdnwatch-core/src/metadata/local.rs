use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use url::Url;

use super::{FileStat, MetadataError, MetadataQuery};

/// Stats plain paths and `file://` URIs on the local filesystem
#[derive(Debug, Default, Clone)]
pub struct LocalMetadataQuery;

impl LocalMetadataQuery {
    pub fn new() -> Self {
        Self
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, MetadataError> {
        match Url::parse(path) {
            Ok(url) if url.scheme() == "file" => url.to_file_path().map_err(|_| MetadataError::Io {
                path: path.to_owned(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a local file URI"),
            }),
            Ok(url) => Err(MetadataError::UnsupportedScheme(url.scheme().to_owned())),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(PathBuf::from(path)),
            Err(source) => Err(MetadataError::InvalidUri {
                uri: path.to_owned(),
                source,
            }),
        }
    }
}

#[async_trait]
impl MetadataQuery for LocalMetadataQuery {
    async fn stat(&self, path: &str) -> Result<FileStat, MetadataError> {
        let local_path = self.resolve(path)?;
        let metadata = tokio::fs::metadata(&local_path)
            .await
            .map_err(|source| MetadataError::Io {
                path: path.to_owned(),
                source,
            })?;
        Ok(FileStat {
            size: metadata.len(),
        })
    }
}
