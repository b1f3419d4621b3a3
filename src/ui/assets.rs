//! Image locations for catalog items.
//!
//! Two derivations exist and both are kept: builder and list views point at
//! the catalog's own `image` field, detail views derive a `.webp` file name
//! from the item name. They can disagree for the same item.

use crate::config;

/// An image reference plus what to show when it fails to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub src: String,
    pub fallback: String,
}

impl ImageSource {
    pub fn new(src: String, name: &str) -> Self {
        Self {
            src,
            fallback: placeholder_image_url(name),
        }
    }
}

/// `/assets/<image>` as used by builder and list views.
pub fn catalog_image_path(image: &str) -> String {
    format!("{}/{}", config::ASSETS_MOUNT, image)
}

/// `/assets/<name without spaces>.webp` as used by detail views.
pub fn detail_image_path(name: &str) -> String {
    let stem: String = name.chars().filter(|c| *c != ' ').collect();
    format!(
        "{}/{}.{}",
        config::ASSETS_MOUNT,
        stem,
        config::DETAIL_IMAGE_EXTENSION
    )
}

/// Placeholder rendered in place of an image that failed to load.
pub fn placeholder_image_url(name: &str) -> String {
    format!(
        "{}?text={}",
        config::PLACEHOLDER_IMAGE_BASE,
        urlencoding::encode(name)
    )
}
