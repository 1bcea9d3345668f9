//! View descriptors and the pages they resolve to.
//!
//! A [`View`] names a screen; [`resolve`] turns it into a [`Page`] holding
//! everything an output surface needs to draw it.

use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::model::{Families, Item};
use crate::version::{display_label, related_supplements, version_token};

/// One of the three drill-down screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Home,
    Family { family: String },
    Version { family: String, version: String },
}

impl View {
    pub fn family(name: impl Into<String>) -> Self {
        View::Family {
            family: name.into(),
        }
    }

    pub fn version(family: impl Into<String>, version: impl Into<String>) -> Self {
        View::Version {
            family: family.into(),
            version: version.into(),
        }
    }
}

/// Summary of a family on the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyCard {
    pub name: String,
    pub image: String,
    /// Version number of the newest release, `None` when the family has none.
    pub latest: Option<String>,
}

/// A selectable release on the version list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionEntry {
    pub name: String,
    pub label: String,
}

/// A fully resolved screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Home {
        cards: Vec<FamilyCard>,
    },
    Versions {
        family: String,
        versions: Vec<VersionEntry>,
    },
    Detail {
        family: String,
        version: Item,
        supplements: Vec<Item>,
    },
}

/// Resolve `view` against freshly grouped `families`.
pub fn resolve(view: &View, families: &Families) -> Result<Page> {
    match view {
        View::Home => Ok(home_page(families)),
        View::Family { family } => versions_page(family, families),
        View::Version { family, version } => detail_page(family, version, families),
    }
}

fn home_page(families: &Families) -> Page {
    let cards = families
        .values()
        .map(|f| FamilyCard {
            name: f.name.clone(),
            image: f.image.clone(),
            latest: f.latest_version().map(|v| display_label(&v.name).to_string()),
        })
        .collect();
    Page::Home { cards }
}

fn versions_page(family: &str, families: &Families) -> Result<Page> {
    let f = families
        .get(family)
        .ok_or_else(|| CatalogError::UnknownFamily(family.to_string()))?;
    let versions = f
        .versions
        .iter()
        .map(|v| VersionEntry {
            name: v.name.clone(),
            label: display_label(&v.name).to_string(),
        })
        .collect();
    Ok(Page::Versions {
        family: family.to_string(),
        versions,
    })
}

fn detail_page(family: &str, version: &str, families: &Families) -> Result<Page> {
    let f = families
        .get(family)
        .ok_or_else(|| CatalogError::UnknownFamily(family.to_string()))?;
    let release = f
        .find_version(version)
        .ok_or_else(|| CatalogError::UnknownVersion {
            family: family.to_string(),
            version: version.to_string(),
        })?;
    let token = version_token(version)?;
    let supplements = related_supplements(&f.supplements, token)
        .into_iter()
        .cloned()
        .collect();
    Ok(Page::Detail {
        family: family.to_string(),
        version: release.clone(),
        supplements,
    })
}
