//! # Theme System
//!
//! Centralized color palettes for the job board.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines all colors used throughout the UI. Rendering
//! code never hardcodes `ratatui::style::Color` values; it receives the active
//! theme as a parameter. Dark mode is a flag on the app that picks between one
//! light and one dark palette (both configurable by name).
//!
//! ## Built-in Themes
//!
//! Light:
//! - **Catppuccin Latte** (default light)
//! - **Solarized Light**
//! - **Gruvbox Light**
//!
//! Dark:
//! - **Catppuccin Mocha** (default dark)
//! - **Dracula**
//! - **Nord**
//! - **Tokyo Night**
//! - **Gruvbox Dark**

use ratatui::style::Color;

/// All colors used by the UI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, matched case-insensitively from config.
    pub name: &'static str,
    /// Whether this palette is meant for dark mode.
    pub dark: bool,

    // -- Background colors --
    /// Main background color for panels and overlays.
    pub bg: Color,

    // -- Foreground / text colors --
    /// Primary text color (e.g. card titles, descriptions).
    pub fg: Color,
    /// Muted/secondary text (e.g. company names, hints, footer).
    pub fg_dim: Color,

    // -- Accent / brand colors --
    /// Primary accent used for branding, focused borders, the current page.
    pub accent: Color,
    /// Secondary accent for search text and the age badge.
    pub secondary: Color,

    // -- Semantic status colors --
    /// Success / green indicator.
    pub success: Color,
    /// Error / red indicator, also used for favorited hearts.
    pub error: Color,

    // -- Selection --
    /// Background for the highlighted card or dropdown row.
    pub selection_bg: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Default light theme (Catppuccin Latte).
    pub fn default_light() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// Default dark theme (Catppuccin Mocha).
    pub fn default_dark() -> &'static Theme {
        &BUILT_IN_THEMES[3]
    }

    /// Look up `name` for the requested mode, falling back to that mode's
    /// default when the name is unknown or belongs to the other mode.
    pub fn resolve(name: &str, dark: bool) -> &'static Theme {
        match Self::by_name(name) {
            Some(theme) if theme.dark == dark => theme,
            _ if dark => Self::default_dark(),
            _ => Self::default_light(),
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 8] = [
    // 0 - Catppuccin Latte (default light)
    Theme {
        name: "Catppuccin Latte",
        dark: false,
        bg: Color::Rgb(239, 241, 245),           // base
        fg: Color::Rgb(76, 79, 105),             // text
        fg_dim: Color::Rgb(156, 160, 176),       // overlay0
        accent: Color::Rgb(30, 102, 245),        // blue
        secondary: Color::Rgb(223, 142, 29),     // yellow
        success: Color::Rgb(64, 160, 43),        // green
        error: Color::Rgb(210, 15, 57),          // red
        selection_bg: Color::Rgb(188, 192, 204), // surface1
    },
    // 1 - Solarized Light
    Theme {
        name: "Solarized Light",
        dark: false,
        bg: Color::Rgb(253, 246, 227),
        fg: Color::Rgb(101, 123, 131),
        fg_dim: Color::Rgb(147, 161, 161),
        accent: Color::Rgb(38, 139, 210),   // blue
        secondary: Color::Rgb(181, 137, 0), // yellow
        success: Color::Rgb(133, 153, 0),
        error: Color::Rgb(220, 50, 47),
        selection_bg: Color::Rgb(238, 232, 213),
    },
    // 2 - Gruvbox Light
    Theme {
        name: "Gruvbox Light",
        dark: false,
        bg: Color::Rgb(251, 241, 199),
        fg: Color::Rgb(60, 56, 54),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(7, 102, 120),     // blue
        secondary: Color::Rgb(181, 118, 20), // yellow
        success: Color::Rgb(121, 116, 14),
        error: Color::Rgb(157, 0, 6),
        selection_bg: Color::Rgb(235, 219, 178),
    },
    // 3 - Catppuccin Mocha (default dark)
    Theme {
        name: "Catppuccin Mocha",
        dark: true,
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
        success: Color::Rgb(166, 227, 161),   // green
        error: Color::Rgb(243, 139, 168),     // red
        selection_bg: Color::Rgb(69, 71, 90), // surface1
    },
    // 4 - Dracula
    Theme {
        name: "Dracula",
        dark: true,
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),    // cyan
        secondary: Color::Rgb(241, 250, 140), // yellow
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        selection_bg: Color::Rgb(68, 71, 90),
    },
    // 5 - Nord
    Theme {
        name: "Nord",
        dark: true,
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(235, 203, 139), // yellow
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        selection_bg: Color::Rgb(67, 76, 94),
    },
    // 6 - Tokyo Night
    Theme {
        name: "Tokyo Night",
        dark: true,
        bg: Color::Rgb(26, 27, 38),
        fg: Color::Rgb(169, 177, 214),
        fg_dim: Color::Rgb(86, 95, 137),
        accent: Color::Rgb(122, 162, 247),    // blue
        secondary: Color::Rgb(224, 175, 104), // yellow
        success: Color::Rgb(115, 218, 202),
        error: Color::Rgb(247, 118, 142),
        selection_bg: Color::Rgb(41, 46, 66),
    },
    // 7 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        dark: true,
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),   // blue
        secondary: Color::Rgb(250, 189, 47), // yellow
        success: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
        selection_bg: Color::Rgb(80, 73, 69),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    /// Convert a catppuccin color to a ratatui Color via its RGB values.
    fn ctp(color: catppuccin::Color) -> Color {
        Color::Rgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    #[test]
    fn test_defaults_have_matching_mode() {
        assert!(!Theme::default_light().dark);
        assert!(Theme::default_dark().dark);
        assert_eq!(Theme::default_light().name, "Catppuccin Latte");
        assert_eq!(Theme::default_dark().name, "Catppuccin Mocha");
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert!(Theme::by_name("catppuccin latte").is_some());
        assert!(Theme::by_name("DRACULA").is_some());
        assert!(Theme::by_name("nonexistent").is_none());
    }

    #[test]
    fn test_resolve_falls_back_per_mode() {
        assert_eq!(Theme::resolve("Nord", true).name, "Nord");
        assert_eq!(Theme::resolve("Nord", false).name, "Catppuccin Latte");
        assert_eq!(Theme::resolve("Gruvbox Light", false).name, "Gruvbox Light");
        assert_eq!(Theme::resolve("nope", true).name, "Catppuccin Mocha");
    }

    #[test]
    fn test_both_modes_are_available() {
        assert!(Theme::all().iter().any(|t| t.dark));
        assert!(Theme::all().iter().any(|t| !t.dark));
    }

    #[test]
    fn test_catppuccin_latte_matches_palette() {
        let latte = catppuccin::PALETTE.latte.colors;
        let theme = Theme::default_light();
        assert_eq!(theme.bg, ctp(latte.base));
        assert_eq!(theme.fg, ctp(latte.text));
        assert_eq!(theme.accent, ctp(latte.blue));
        assert_eq!(theme.secondary, ctp(latte.yellow));
        assert_eq!(theme.success, ctp(latte.green));
        assert_eq!(theme.error, ctp(latte.red));
    }

    #[test]
    fn test_catppuccin_mocha_matches_palette() {
        let mocha = catppuccin::PALETTE.mocha.colors;
        let theme = Theme::default_dark();
        assert_eq!(theme.bg, ctp(mocha.base));
        assert_eq!(theme.fg, ctp(mocha.text));
        assert_eq!(theme.accent, ctp(mocha.blue));
        assert_eq!(theme.error, ctp(mocha.red));
    }

    #[test]
    fn test_all_themes_have_distinct_names() {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len(), "duplicate theme names found");
    }
}
