//! Sources the reservation feed can be fetched from

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use url::Url;

use crate::error::FeedError;
use crate::traits::FeedSource;

/// How a feed document is encoded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedFormat {
    /// A JSON object mapping `YYYY-MM-DD` keys to reservations
    Json,
    /// An iCalendar export of the booking system
    ICal,
}

impl FeedFormat {
    /// Guess the format from a file name or URL path
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_lowercase();
        if lower.ends_with(".ics") || lower.ends_with(".ical") {
            FeedFormat::ICal
        } else {
            FeedFormat::Json
        }
    }
}


/// A feed served over HTTP(S)
pub struct HttpFeed {
    url: Url,
}

impl HttpFeed {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    async fn fetch(&self) -> Result<String, FeedError> {
        let res = reqwest::Client::new()
            .get(self.url.as_str())
            .send()
            .await?;
        let res = res.error_for_status()?;
        let text = res.text().await?;
        Ok(text)
    }

    fn format(&self) -> FeedFormat {
        FeedFormat::from_path(self.url.path())
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}


/// A feed stored in a local file
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: &Path) -> Self {
        Self { path: PathBuf::from(path) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FeedSource for FileFeed {
    async fn fetch(&self) -> Result<String, FeedError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        Ok(text)
    }

    fn format(&self) -> FeedFormat {
        FeedFormat::from_path(&self.path.to_string_lossy())
    }

    fn describe(&self) -> String {
        format!("{}", self.path.display())
    }
}


/// Builds a source from a location given by the user: an `http(s)://` URL, a `file://` URL, or a plain path
pub fn source_from_str(location: &str) -> Box<dyn FeedSource + Send + Sync> {
    match Url::parse(location) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Box::new(HttpFeed::new(url)),
        Ok(url) if url.scheme() == "file" => match url.to_file_path() {
            Ok(path) => Box::new(FileFeed::new(&path)),
            Err(_) => {
                log::warn!("Unusable file URL {}, treating it as a path", location);
                Box::new(FileFeed::new(Path::new(location)))
            },
        },
        _ => Box::new(FileFeed::new(Path::new(location))),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert_eq!(FeedFormat::from_path("scripts/calendar-reservations.json"), FeedFormat::Json);
        assert_eq!(FeedFormat::from_path("/tmp/events.ICS"), FeedFormat::ICal);
        assert_eq!(FeedFormat::from_path("feed"), FeedFormat::Json);
    }

    #[test]
    fn sources() {
        let http = source_from_str("https://example.org/calendar-reservations.json");
        assert_eq!(http.describe(), "https://example.org/calendar-reservations.json");
        assert_eq!(http.format(), FeedFormat::Json);

        let file = source_from_str("data/events.ics");
        assert_eq!(file.describe(), "data/events.ics");
        assert_eq!(file.format(), FeedFormat::ICal);
    }
}
