use url::Url;

/// Derives the host part of a transfer URI
pub trait HostExtractor: Send + Sync {
    fn parse_host(&self, uri: &str) -> Option<String>;
}

#[derive(Debug, Default, Clone)]
pub struct UrlHostExtractor;

impl HostExtractor for UrlHostExtractor {
    fn parse_host(&self, uri: &str) -> Option<String> {
        let url = Url::parse(uri).ok()?;
        url.host_str().filter(|host| !host.is_empty()).map(str::to_owned)
    }
}
