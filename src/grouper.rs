//! Classification of catalog items into system families.

use crate::config::SiteConfig;
use crate::model::{Families, Item, ItemKind, SystemFamily};

/// Family assigned to items that match no signature.
pub const CATCH_ALL_FAMILY: &str = "Outros";

/// Ordered family signatures. The first family with a matching signature wins,
/// so `f&m` resolves to Feiticeiros & Maldições even if a later family's
/// signature also appears in the name.
pub const FAMILY_SIGNATURES: &[(&str, &[&str])] = &[
    (
        "Feiticeiros & Maldições",
        &["feiticeiros & maldições", "f&m"],
    ),
    ("Shinigamis & Hollows", &["shinigamis & hollows"]),
    ("Noites em Tokyo", &["noites em tokyo"]),
];

/// Map an item's display name to its canonical family name.
pub fn classify(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    FAMILY_SIGNATURES
        .iter()
        .find(|(_, signatures)| signatures.iter().any(|s| lower.contains(s)))
        .map(|(family, _)| *family)
        .unwrap_or(CATCH_ALL_FAMILY)
}

/// Derive the image file name for a family: lowercase, `" & "` becomes
/// `"-e-"` and remaining spaces become `"-"`.
pub fn image_slug(family: &str) -> String {
    family.to_lowercase().replace(" & ", "-e-").replace(' ', "-")
}

/// Relative path of a family's cover image under the configured directory.
pub fn image_path(family: &str, config: &SiteConfig) -> String {
    format!(
        "{}/{}.{}",
        config.image_dir.as_str().trim_end_matches('/'),
        image_slug(family),
        config.image_extension
    )
}

/// Bucket items into families, keeping first-seen family order.
///
/// Items with an unrecognized type still create their family but are
/// otherwise dropped.
pub fn group(items: &[Item], config: &SiteConfig) -> Families {
    let mut families = Families::new();
    for item in items {
        let family_name = classify(&item.name);
        let family = families
            .entry(family_name.to_string())
            .or_insert_with(|| {
                SystemFamily::new(family_name, image_path(family_name, config))
            });
        match item.kind {
            ItemKind::MainSystem => family.versions.push(item.clone()),
            ItemKind::Supplement => family.supplements.push(item.clone()),
            ItemKind::Unknown => {
                tracing::debug!(item = %item.name, "dropping catalog item with unrecognized type");
            }
        }
    }
    for family in families.values_mut() {
        sort_versions(&mut family.versions);
    }
    families
}

/// Sort releases newest-first by descending name.
///
/// Names compare case-insensitively first, then by their exact text. Order is
/// still lexicographic: `v10` sorts below `v9`.
pub fn sort_versions(versions: &mut [Item]) {
    versions.sort_by(|a, b| {
        b.name
            .to_lowercase()
            .cmp(&a.name.to_lowercase())
            .then_with(|| b.name.cmp(&a.name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_replaces_ampersand_then_spaces() {
        assert_eq!(image_slug("Feiticeiros & Maldições"), "feiticeiros-e-maldições");
        assert_eq!(image_slug("Noites em Tokyo"), "noites-em-tokyo");
        assert_eq!(image_slug("Outros"), "outros");
    }

    #[test]
    fn abbreviation_counts_for_full_family() {
        assert_eq!(classify("Grimório (F&M 2.0)"), "Feiticeiros & Maldições");
    }

    #[test]
    fn signature_order_breaks_ties() {
        assert_eq!(
            classify("Crossover f&m x Shinigamis & Hollows"),
            "Feiticeiros & Maldições"
        );
    }
}
