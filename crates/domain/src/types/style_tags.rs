//! Style tag lookup table
//!
//! Members and clothing carry a comma-separated `styleTags` string. The tag
//! vocabulary is fixed; label keys point into the UI's i18n catalog and are
//! exposed here so every surface renders tags consistently.

/// The fixed style tag vocabulary, in display order.
pub const STYLE_TAG_VALUES: [&str; 10] = [
    "kpop_sweet_cool",
    "street_dance",
    "sexy_stage",
    "school_youth",
    "techwear_future",
    "minimal_chic",
    "y2k_retro",
    "glam_stage",
    "fresh_summer",
    "winter_soft",
];

/// Split a comma-separated tag string into trimmed, non-empty tags.
pub fn split_style_tags(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).filter(|tag| !tag.is_empty()).collect()
}

/// Whether a tag belongs to the fixed vocabulary.
pub fn is_known_style_tag(tag: &str) -> bool {
    STYLE_TAG_VALUES.contains(&tag.trim())
}

/// i18n label key for a known tag, `None` for free-form tags.
pub fn style_tag_label_key(tag: &str) -> Option<String> {
    let normalized = tag.trim();
    is_known_style_tag(normalized).then(|| format!("styleTags.options.{normalized}"))
}

/// Normalize a raw tag string back into canonical comma-separated form.
pub fn normalize_style_tags(raw: &str) -> String {
    split_style_tags(raw).join(",")
}
