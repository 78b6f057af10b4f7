//! Color swatch preview.
//!
//! Maps a color label to a CSS `filter` expression that roughly tints a
//! product photo toward that color. This is a cosmetic lookup, not image
//! processing: the renderer applies the filter to the existing image.

/// CSS filter that leaves the image untouched.
pub const IDENTITY_FILTER: &str = "none";

const COLOR_FILTERS: &[(&str, &str)] = &[
    ("White", "brightness(1.3) saturate(0)"),
    ("Black", "brightness(0.3) saturate(0)"),
    ("Navy", "hue-rotate(220deg) saturate(1.5) brightness(0.6)"),
    ("Light Blue", "hue-rotate(200deg) saturate(0.8) brightness(1.2)"),
    ("Red", "hue-rotate(0deg) saturate(2) brightness(0.9)"),
    ("Burgundy", "hue-rotate(350deg) saturate(1.5) brightness(0.6)"),
    ("Charcoal", "brightness(0.5) saturate(0.3)"),
    ("Gray", "brightness(0.8) saturate(0.2)"),
    ("Brown", "hue-rotate(30deg) saturate(1.2) brightness(0.6)"),
    ("Olive", "hue-rotate(80deg) saturate(0.8) brightness(0.7)"),
    ("Khaki", "hue-rotate(45deg) saturate(0.6) brightness(1.1)"),
    ("Cream", "brightness(1.2) saturate(0.3) sepia(0.3)"),
    ("Blush", "hue-rotate(330deg) saturate(0.6) brightness(1.1)"),
    ("Pink", "hue-rotate(330deg) saturate(1.2) brightness(1.1)"),
    ("Lavender", "hue-rotate(270deg) saturate(0.6) brightness(1.1)"),
    ("Mint", "hue-rotate(150deg) saturate(0.6) brightness(1.2)"),
    ("Emerald", "hue-rotate(150deg) saturate(1.5) brightness(0.7)"),
    ("Forest Green", "hue-rotate(120deg) saturate(1.2) brightness(0.5)"),
    ("Yellow", "hue-rotate(60deg) saturate(2) brightness(1.2)"),
    ("Blue", "hue-rotate(200deg) saturate(1.5) brightness(0.8)"),
    ("Tan", "hue-rotate(40deg) saturate(0.5) brightness(1)"),
    ("Oatmeal", "brightness(1.1) saturate(0.4) sepia(0.2)"),
    ("Dusty Rose", "hue-rotate(340deg) saturate(0.5) brightness(1)"),
    ("Ivory", "brightness(1.2) saturate(0.2) sepia(0.1)"),
    ("Camel", "hue-rotate(35deg) saturate(0.8) brightness(0.9)"),
    ("Beige", "brightness(1.1) saturate(0.4) sepia(0.3)"),
    ("Light Denim", "hue-rotate(210deg) saturate(0.6) brightness(1.1)"),
    ("Dark Denim", "hue-rotate(220deg) saturate(0.8) brightness(0.6)"),
    ("Green", "hue-rotate(120deg) saturate(1.2) brightness(0.8)"),
    ("Floral Pink", "hue-rotate(340deg) saturate(1.2) brightness(1.1)"),
    ("Floral Blue", "hue-rotate(210deg) saturate(1) brightness(1)"),
    ("Floral Green", "hue-rotate(130deg) saturate(1) brightness(1)"),
    ("Dark Blue", "hue-rotate(220deg) saturate(1.2) brightness(0.5)"),
    ("Medium Wash", "hue-rotate(210deg) saturate(0.7) brightness(0.9)"),
];

/// CSS filter approximating `color`, or [`IDENTITY_FILTER`] for unknown labels.
///
/// Labels match exactly (`"Light Blue"`, not `"light blue"`), the same way
/// they appear in the catalog.
#[must_use]
pub fn color_filter(color: &str) -> &'static str {
    COLOR_FILTERS
        .iter()
        .find_map(|&(label, filter)| (label == color).then_some(filter))
        .unwrap_or(IDENTITY_FILTER)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_known_colors() {
        assert_eq!(color_filter("Red"), "hue-rotate(0deg) saturate(2) brightness(0.9)");
        assert_eq!(color_filter("Black"), "brightness(0.3) saturate(0)");
    }

    #[test]
    fn test_unknown_color_is_identity() {
        assert_eq!(color_filter("Chartreuse"), IDENTITY_FILTER);
        assert_eq!(color_filter("red"), IDENTITY_FILTER);
        assert_eq!(color_filter(""), IDENTITY_FILTER);
    }

    #[test]
    fn test_labels_are_unique() {
        let labels: HashSet<&str> = COLOR_FILTERS.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels.len(), COLOR_FILTERS.len());
    }

    #[test]
    fn test_builtin_catalog_colors_have_filters() {
        let catalog = Catalog::builtin().unwrap();
        for product in catalog.products() {
            for color in &product.colors {
                assert_ne!(color_filter(color), IDENTITY_FILTER, "{color} has no filter");
            }
        }
    }
}
