use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Item
// ────────────────────────────────────────────────────────────────────────────

/// A raw catalog entry as it appears in `data.json`.
///
/// Field names follow the catalog document (`nome`, `descricao`, `link_pdf`),
/// so the struct can be deserialized directly from the fetched array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_kind")]
    pub kind: ItemKind,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "link_pdf", default)]
    pub pdf_link: String,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        kind: ItemKind,
        description: impl Into<String>,
        pdf_link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            pdf_link: pdf_link.into(),
        }
    }
}

/// Type discriminator of a catalog entry.
///
/// Anything other than the two recognized markers deserializes to
/// [`ItemKind::Unknown`] and is later dropped by the grouper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    #[serde(rename = "sistema")]
    MainSystem,
    #[serde(rename = "suplemento")]
    Supplement,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Accept a missing, `null` or non-string `type` as [`ItemKind::Unknown`]
/// instead of rejecting the whole catalog.
fn lenient_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ItemKind, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value.as_ref().and_then(|v| v.as_str()) {
        Some("sistema") => ItemKind::MainSystem,
        Some("suplemento") => ItemKind::Supplement,
        _ => ItemKind::Unknown,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// SystemFamily
// ────────────────────────────────────────────────────────────────────────────

/// All items sharing one base system name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemFamily {
    pub name: String,
    /// Main-system releases, newest first (descending name order).
    pub versions: Vec<Item>,
    pub supplements: Vec<Item>,
    /// Relative path of the family's cover image.
    pub image: String,
}

impl SystemFamily {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            versions: Vec::new(),
            supplements: Vec::new(),
            image: image.into(),
        }
    }

    /// The newest main-system release, if the family has any.
    pub fn latest_version(&self) -> Option<&Item> {
        self.versions.first()
    }

    pub fn find_version(&self, name: &str) -> Option<&Item> {
        self.versions.iter().find(|v| v.name == name)
    }
}

/// Families keyed by canonical name, in first-seen catalog order.
pub type Families = IndexMap<String, SystemFamily>;
