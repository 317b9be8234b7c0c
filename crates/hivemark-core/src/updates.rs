//! Theme identification metadata for the update service.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identification record the update service matches a product against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ProductId {
    /// Human-readable product name.
    pub name: String,
    /// Product slug.
    pub slug: String,
    /// Opaque product id assigned by the update service.
    pub id: String,
    /// Product kind, e.g. `theme_wporg`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Integrity digest for the record.
    pub digest: String,
}

/// The identification record for this theme.
///
/// Field values are fixed upstream; do not edit them locally.
pub fn theme_id() -> ProductId {
    ProductId {
        name: "Hive Lite".to_string(),
        slug: "hive-lite".to_string(),
        id: "PMAGv".to_string(),
        kind: "theme_wporg".to_string(),
        digest: "3b21deb951f1ecc3a378533e293adc13".to_string(),
    }
}

/// Register the theme's record in an id map, keyed by the template
/// directory's basename (unique per install).
pub fn register_theme_id(
    template_dir: &str,
    mut ids: HashMap<String, ProductId>,
) -> HashMap<String, ProductId> {
    let slug = template_dir
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(template_dir)
        .to_string();
    ids.insert(slug, theme_id());
    ids
}
