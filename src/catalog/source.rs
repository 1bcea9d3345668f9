//! Catalog source abstraction for reading the document from disk or over HTTP.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

use crate::config::CatalogLocation;

/// User agent sent with catalog downloads.
const USER_AGENT_VALUE: &str = concat!("rpgshelf/", env!("CARGO_PKG_VERSION"));

/// Trait for abstracting where the catalog document comes from.
pub trait CatalogSource {
    /// Fetch the raw catalog document.
    fn fetch(&self) -> Result<String>;
    /// Human-readable location, used in diagnostics.
    fn location(&self) -> String;
}

impl<T: CatalogSource + ?Sized> CatalogSource for &T {
    fn fetch(&self) -> Result<String> {
        (**self).fetch()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Reads the catalog from the local filesystem.
pub struct FsSource {
    path: Utf8PathBuf,
}

impl FsSource {
    pub fn new(path: impl AsRef<Utf8Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for FsSource {
    fn fetch(&self) -> Result<String> {
        std::fs::read_to_string(self.path.as_std_path())
            .with_context(|| format!("Failed to read {}", self.path))
    }

    fn location(&self) -> String {
        self.path.to_string()
    }
}

/// Downloads the catalog with a single blocking GET.
pub struct HttpSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl CatalogSource for HttpSource {
    fn fetch(&self) -> Result<String> {
        tracing::debug!("Fetching catalog from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .with_context(|| format!("GET {}", self.url))?
            .error_for_status()
            .with_context(|| format!("GET {}", self.url))?;
        response
            .text()
            .with_context(|| format!("Failed to read body of {}", self.url))
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Source selected at runtime from a [`CatalogLocation`].
pub enum AnySource {
    Fs(FsSource),
    Http(HttpSource),
}

impl AnySource {
    pub fn from_location(location: &CatalogLocation) -> Result<Self> {
        Ok(match location {
            CatalogLocation::File(path) => AnySource::Fs(FsSource::new(path)),
            CatalogLocation::Url(url) => AnySource::Http(HttpSource::new(url.clone())?),
        })
    }
}

impl CatalogSource for AnySource {
    fn fetch(&self) -> Result<String> {
        match self {
            AnySource::Fs(s) => s.fetch(),
            AnySource::Http(s) => s.fetch(),
        }
    }

    fn location(&self) -> String {
        match self {
            AnySource::Fs(s) => s.location(),
            AnySource::Http(s) => s.location(),
        }
    }
}
