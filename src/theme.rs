//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

/// Catalog accent red.
const ACCENT: Color = Color::Rgb(229, 9, 20);
/// Page background.
const INK: Color = Color::Rgb(20, 20, 20);
/// Neutral surface for arrow buttons and badges.
const SLATE: Color = Color::Rgb(51, 51, 51);

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette: semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Chrome --
    pub background: Style,
    pub nav_brand: Style,
    pub nav_link: Style,
    pub status_bar: Style,

    // -- Banner --
    pub banner_title: Style,
    pub banner_subtitle: Style,
    pub banner_body: Style,
    pub banner_rating: Style,
    pub banner_year: Style,
    pub banner_play: Style,

    // -- Carousel rows --
    pub row_heading: Style,
    pub row_heading_active: Style,
    pub item_normal: Style,
    pub item_active: Style,
    pub item_border: Style,
    pub item_border_active: Style,
    pub arrow_button: Style,

    // -- Overlays --
    pub overlay_border: Style,
    pub overlay_body: Style,
    pub overlay_hint: Style,
    pub help_heading: Style,
}

impl ColorPalette {
    /// Dark palette: the catalog page's black, red and white.
    fn dark() -> Self {
        Self {
            background: Style::default().bg(INK).fg(Color::White),
            nav_brand: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            nav_link: Style::default().fg(Color::Gray),
            status_bar: Style::default().bg(SLATE).fg(Color::White),

            banner_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            banner_subtitle: Style::default().fg(Color::Gray),
            banner_body: Style::default().fg(Color::White),
            banner_rating: Style::default().fg(Color::Gray).bg(SLATE),
            banner_year: Style::default().fg(Color::Gray),
            banner_play: Style::default()
                .bg(ACCENT)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            row_heading: Style::default().fg(Color::Gray),
            row_heading_active: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            item_normal: Style::default().fg(Color::Gray),
            item_active: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            item_border: Style::default().fg(Color::DarkGray),
            item_border_active: Style::default().fg(ACCENT),
            arrow_button: Style::default().bg(SLATE).fg(Color::White),

            overlay_border: Style::default().fg(ACCENT),
            overlay_body: Style::default().bg(Color::Black).fg(Color::White),
            overlay_hint: Style::default().fg(Color::DarkGray),
            help_heading: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        }
    }

    /// Light palette, adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            background: Style::default().bg(Color::White).fg(Color::Black),
            nav_brand: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            nav_link: Style::default().fg(Color::DarkGray),
            status_bar: Style::default().bg(Color::Gray).fg(Color::Black),

            banner_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            banner_subtitle: Style::default().fg(Color::DarkGray),
            banner_body: Style::default().fg(Color::Black),
            banner_rating: Style::default().fg(Color::Black).bg(Color::Gray),
            banner_year: Style::default().fg(Color::DarkGray),
            banner_play: Style::default()
                .bg(ACCENT)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            row_heading: Style::default().fg(Color::DarkGray),
            row_heading_active: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            item_normal: Style::default().fg(Color::DarkGray),
            item_active: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            item_border: Style::default().fg(Color::Gray),
            item_border_active: Style::default().fg(ACCENT),
            arrow_button: Style::default().bg(Color::Gray).fg(Color::Black),

            overlay_border: Style::default().fg(ACCENT),
            overlay_body: Style::default().bg(Color::White).fg(Color::Black),
            overlay_hint: Style::default().fg(Color::DarkGray),
            help_heading: Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        }
    }
}

// ============================================================================
// Style Map: string-keyed lookup for config-driven overrides
// ============================================================================

/// String-keyed style lookup.
///
/// Built from a `ColorPalette`, this allows resolving role names (e.g.
/// `"item_active"`) to their concrete `Style` at runtime.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 21] = [
    "background",
    "nav_brand",
    "nav_link",
    "status_bar",
    "banner_title",
    "banner_subtitle",
    "banner_body",
    "banner_rating",
    "banner_year",
    "banner_play",
    "row_heading",
    "row_heading_active",
    "item_normal",
    "item_active",
    "item_border",
    "item_border_active",
    "arrow_button",
    "overlay_border",
    "overlay_body",
    "overlay_hint",
    "help_heading",
];

impl StyleMap {
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 21] = [
            p.background,
            p.nav_brand,
            p.nav_link,
            p.status_bar,
            p.banner_title,
            p.banner_subtitle,
            p.banner_body,
            p.banner_rating,
            p.banner_year,
            p.banner_play,
            p.row_heading,
            p.row_heading_active,
            p.item_normal,
            p.item_active,
            p.item_border,
            p.item_border_active,
            p.arrow_button,
            p.overlay_border,
            p.overlay_body,
            p.overlay_hint,
            p.help_heading,
        ];

        let map = ROLE_NAMES.iter().copied().zip(styles).collect();
        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_active_item_uses_accent_border() {
        let palette = ThemeVariant::Dark.palette();
        assert_eq!(palette.item_border_active, Style::default().fg(ACCENT));
    }

    #[test]
    fn play_button_is_accent_in_both_variants() {
        let dark = ThemeVariant::Dark.palette();
        let light = ThemeVariant::Light.palette();
        assert_eq!(dark.banner_play, light.banner_play);
        assert_eq!(dark.banner_play.bg, Some(ACCENT));
    }

    #[test]
    fn light_palette_differs_from_dark() {
        let dark = ThemeVariant::Dark.palette();
        let light = ThemeVariant::Light.palette();
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.item_active, light.item_active);
    }

    #[test]
    fn variant_from_str_name() {
        assert_eq!(
            ThemeVariant::from_str_name("dark"),
            Some(ThemeVariant::Dark)
        );
        assert_eq!(
            ThemeVariant::from_str_name("Light"),
            Some(ThemeVariant::Light)
        );
        assert_eq!(ThemeVariant::from_str_name("neon"), None);
    }

    #[test]
    fn variant_cycles() {
        assert_eq!(ThemeVariant::Dark.next(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.next().name(), "Dark");
    }

    #[test]
    fn style_map_resolves_known_roles() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);

        assert_eq!(sm.resolve("item_active"), palette.item_active);
        assert_eq!(sm.resolve("banner_play"), palette.banner_play);
        assert_eq!(sm.resolve("status_bar"), palette.status_bar);
    }

    #[test]
    fn style_map_returns_default_for_unknown() {
        let sm = StyleMap::from_palette(&ThemeVariant::Dark.palette());
        assert_eq!(sm.resolve("nonexistent_role"), Style::default());
    }

    #[test]
    fn role_names_count_matches_palette_fields() {
        let sm = StyleMap::from_palette(&ThemeVariant::Light.palette());
        assert_eq!(sm.map.len(), ROLE_NAMES.len());
    }
}
