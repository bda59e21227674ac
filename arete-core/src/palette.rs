//! Category color resolution.
//!
//! Colors are plain `#rrggbb` hex strings so they can flow straight into
//! any renderer. Resolution is a total function with an explicit ordered
//! fallback: user overrides, then the base table for the seed
//! categories, then a neutral default. Unknown category names therefore
//! always resolve to *something* drawable.

use std::collections::HashMap;

/// Categories seeded into a fresh store.
pub const SEED_CATEGORIES: [&str; 6] = [
    "Health",
    "Learning",
    "Productivity",
    "Mindfulness",
    "Fitness",
    "Creativity",
];

/// Base palette for the seed categories.
const BASE_HEX: [(&str, &str); 6] = [
    ("Health", "#4d7c0f"),
    ("Fitness", "#9f1239"),
    ("Learning", "#0c4a6e"),
    ("Productivity", "#b45309"),
    ("Mindfulness", "#581c87"),
    ("Creativity", "#c2410c"),
];

/// Fallback for categories with no assigned color (stone-600).
pub const DEFAULT_HEX: &str = "#57534E";

/// Neutral tone for the sunburst root slice.
pub const ROOT_HEX: &str = "#292524";

/// Inactive/incomplete tone for logo slices (stone-200).
pub const INACTIVE_HEX: &str = "#E7E5E4";

/// Preset colors offered when the user creates a new category.
pub const PRESET_PALETTE: [(&str, &str); 12] = [
    ("bronze", "#b45309"),
    ("olive", "#4d7c0f"),
    ("crimson", "#9f1239"),
    ("navy", "#0c4a6e"),
    ("royal", "#581c87"),
    ("rust", "#c2410c"),
    ("teal", "#0f766e"),
    ("slate", "#475569"),
    ("gold", "#ca8a04"),
    ("charcoal", "#292524"),
    ("rose", "#be123c"),
    ("indigo", "#4338ca"),
];

/// Resolves category names to hex colors.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    overrides: HashMap<String, String>,
}

impl Palette {
    /// Palette with no user overrides (base table + default only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette with user-defined category colors layered on top.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Assign or replace the color for a category.
    pub fn set_override(&mut self, category: &str, hex: &str) {
        self.overrides.insert(category.to_string(), hex.to_string());
    }

    /// Resolve a category name to a hex color.
    ///
    /// Total: override table, then base table, then [`DEFAULT_HEX`].
    pub fn color(&self, category: &str) -> &str {
        if let Some(hex) = self.overrides.get(category) {
            return hex;
        }
        BASE_HEX
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, hex)| *hex)
            .unwrap_or(DEFAULT_HEX)
    }

    /// Pick a preset color for the nth created category, cycling the
    /// preset list. Deterministic so repeated runs agree.
    pub fn preset_for_index(index: usize) -> &'static str {
        PRESET_PALETTE[index % PRESET_PALETTE.len()].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_table_lookup() {
        let palette = Palette::new();
        assert_eq!(palette.color("Health"), "#4d7c0f");
        assert_eq!(palette.color("Productivity"), "#b45309");
    }

    #[test]
    fn test_unknown_category_gets_default() {
        let palette = Palette::new();
        assert_eq!(palette.color("Underwater Basket Weaving"), DEFAULT_HEX);
    }

    #[test]
    fn test_override_wins_over_base() {
        let mut palette = Palette::new();
        palette.set_override("Health", "#0f766e");
        assert_eq!(palette.color("Health"), "#0f766e");
        // Other base entries unaffected
        assert_eq!(palette.color("Fitness"), "#9f1239");
    }

    #[test]
    fn test_preset_cycles() {
        assert_eq!(Palette::preset_for_index(0), "#b45309");
        assert_eq!(Palette::preset_for_index(12), "#b45309");
        assert_eq!(Palette::preset_for_index(6), "#0f766e");
    }
}
