//! Error types for loading and navigating the catalog.

use thiserror::Error;

/// Errors that can occur while fetching the catalog or resolving a view.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The catalog document could not be read or downloaded.
    #[error("failed to fetch catalog from {location}: {reason}")]
    Fetch {
        /// File path or URL that was requested.
        location: String,
        reason: String,
    },

    /// The catalog document is not a JSON array of items.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// No family with this name exists in the grouped catalog.
    #[error("unknown system family: {0}")]
    UnknownFamily(String),

    /// The family exists but has no main-system release with this name.
    #[error("unknown version {version:?} in family {family:?}")]
    UnknownVersion { family: String, version: String },

    /// The version name carries no `<major>.<minor>` number to match
    /// supplements against.
    #[error("no version number found in {0:?}")]
    MissingVersionToken(String),
}

impl CatalogError {
    /// Returns a message suitable for the output surface.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Fetch { .. } | Self::Parse(_) => crate::render::LOAD_ERROR_MESSAGE,
            Self::UnknownFamily(_) => "Sistema não encontrado.",
            Self::UnknownVersion { .. } | Self::MissingVersionToken(_) => {
                "Versão não encontrada."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
