/// Slug table for category deep links. Slugs are what the storefront puts in
/// URLs; labels are what product records carry. The `digital-assets` slug
/// predates the rename to "Cloud Services" and is kept for old links.
const CATEGORY_SLUGS: &[(&str, &str)] = &[
    ("ai-tools", "AI Tools"),
    ("video-editing", "Video Editing"),
    ("office", "Office Essentials"),
    ("lead-gen", "Lead Generation"),
    ("digital-assets", "Cloud Services"),
    ("indian-ott", "Indian OTT"),
    ("international-ott", "International OTT"),
    ("software", "Software"),
    ("writing-tools", "Writing Tools"),
    ("seo", "SEO"),
];

/// Resolve a URL slug to its category label. Unknown slugs resolve to `None`
/// and leave the caller's current selection untouched.
pub fn category_for_slug(slug: &str) -> Option<&'static str> {
    CATEGORY_SLUGS.iter().find(|(known, _)| *known == slug).map(|(_, label)| *label)
}

pub fn slug_for_category(category: &str) -> Option<&'static str> {
    CATEGORY_SLUGS.iter().find(|(_, label)| *label == category).map(|(slug, _)| *slug)
}

#[cfg(test)]
mod tests {
    use super::{category_for_slug, slug_for_category};

    #[test]
    fn resolves_known_slugs_to_labels() {
        assert_eq!(category_for_slug("ai-tools"), Some("AI Tools"));
        assert_eq!(category_for_slug("digital-assets"), Some("Cloud Services"));
        assert_eq!(category_for_slug("seo"), Some("SEO"));
    }

    #[test]
    fn unknown_slug_resolves_to_none() {
        assert_eq!(category_for_slug("gift-cards"), None);
        assert_eq!(category_for_slug(""), None);
        assert_eq!(category_for_slug("AI Tools"), None);
    }

    #[test]
    fn label_lookup_is_the_inverse_for_current_labels() {
        assert_eq!(slug_for_category("Cloud Services"), Some("digital-assets"));
        assert_eq!(slug_for_category("Office Essentials"), Some("office"));
        assert_eq!(slug_for_category("Torrents"), None);
    }
}
