//! Version-number extraction from release names.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CatalogError, Result};
use crate::model::Item;

/// `<major>.<minor>[.<patch>]` with an optional trailing `b` (beta).
static VERSION_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\d+(\.\d+)?b?").expect("version regex is valid"));

/// Text following the first `v` marker, up to the next `v`.
///
/// `"Feiticeiros & Maldições v2.5.2"` gives `"2.5.2"`. Returns `None` when the
/// name has no marker or nothing follows it.
pub fn version_label(name: &str) -> Option<&str> {
    name.split('v').nth(1).filter(|s| !s.is_empty())
}

/// Label shown for a release: its version number, or the whole name.
pub fn display_label(name: &str) -> &str {
    version_label(name).unwrap_or(name)
}

/// Numeric token used to relate supplements to a release, e.g. `"2.0"`.
pub fn version_token(name: &str) -> Result<&str> {
    VERSION_TOKEN
        .find(name)
        .map(|m| m.as_str())
        .ok_or_else(|| CatalogError::MissingVersionToken(name.to_string()))
}

/// Supplements whose name textually contains `token`, in catalog order.
pub fn related_supplements<'a>(supplements: &'a [Item], token: &str) -> Vec<&'a Item> {
    supplements
        .iter()
        .filter(|s| s.name.contains(token))
        .collect()
}
