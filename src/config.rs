//! Site configuration: where the catalog lives and where cover images are served from.

use camino::Utf8PathBuf;
use std::fmt;

/// Default catalog document, relative to the working directory or base URL.
pub const DEFAULT_CATALOG: &str = "data.json";
pub const DEFAULT_IMAGE_DIR: &str = "images";
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

/// Location of the catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    File(Utf8PathBuf),
    Url(String),
}

impl CatalogLocation {
    /// Treat `http://` and `https://` inputs as URLs, everything else as a file path.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            CatalogLocation::Url(trimmed.to_string())
        } else {
            CatalogLocation::File(Utf8PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for CatalogLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogLocation::File(p) => write!(f, "{}", p),
            CatalogLocation::Url(u) => write!(f, "{}", u),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub catalog: CatalogLocation,
    /// Directory prefix used in image paths.
    pub image_dir: Utf8PathBuf,
    /// Extension appended to the image slug (without the dot).
    pub image_extension: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogLocation::File(Utf8PathBuf::from(DEFAULT_CATALOG)),
            image_dir: Utf8PathBuf::from(DEFAULT_IMAGE_DIR),
            image_extension: DEFAULT_IMAGE_EXTENSION.to_string(),
        }
    }
}

impl SiteConfig {
    #[must_use]
    pub fn with_catalog(mut self, catalog: CatalogLocation) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn with_image_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.image_dir = dir.into();
        self
    }
}
