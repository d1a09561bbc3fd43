use std::path::PathBuf;

use async_trait::async_trait;
use cidian_config::network::NetworkConfig;
use cidian_core::dictionary::LoadError;

/// Supplier of raw dictionary text
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetch the whole source text
    async fn fetch(&self) -> Result<String, SourceError>;

    /// Human readable location, for logs
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid source location: {0}")]
    InvalidLocation(String),
}

impl From<SourceError> for LoadError {
    fn from(e: SourceError) -> Self {
        LoadError::SourceUnavailable(e.to_string())
    }
}

/// Dictionary text served over HTTP(S)
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: String, network: &NetworkConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(network.timeout())
            .user_agent(network.user_agent.clone())
            .build()?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl DictionarySource for HttpSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        tracing::info!("Fetching dictionary from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        tracing::info!("Received response: {}", response.status());

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let text = response.text().await?;
        tracing::info!("Dictionary text length: {}", text.len());
        Ok(text)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Dictionary text on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DictionarySource for FileSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        tracing::info!("Reading dictionary from file: {}", self.path.display());
        let text = tokio::fs::read_to_string(&self.path).await?;
        tracing::info!("Dictionary text length: {}", text.len());
        Ok(text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source implementation from a configured location
pub fn from_location(
    location: &str,
    network: &NetworkConfig,
) -> Result<Box<dyn DictionarySource>, SourceError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(SourceError::InvalidLocation("empty".to_string()));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location.to_string(), network)?))
    } else {
        let path = location.strip_prefix("file://").unwrap_or(location);
        Ok(Box::new(FileSource::new(path)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn file_source_reads_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "中國 中国 [Zhong1 guo2] /China/").unwrap();

        let source = FileSource::new(file.path());
        let text = source.fetch().await.unwrap();
        assert!(text.starts_with("中國 中国"));
    }

    #[tokio::test]
    async fn missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.txt"));

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
        assert!(matches!(LoadError::from(err), LoadError::SourceUnavailable(_)));
    }

    #[test]
    fn location_picks_implementation() {
        let network = NetworkConfig::default();

        let http = from_location("https://example.com/cedict.txt", &network).unwrap();
        assert_eq!(http.describe(), "https://example.com/cedict.txt");

        let file = from_location("file:///tmp/cedict.txt", &network).unwrap();
        assert_eq!(file.describe(), "/tmp/cedict.txt");

        assert!(matches!(
            from_location("  ", &network),
            Err(SourceError::InvalidLocation(_))
        ));
    }
}
