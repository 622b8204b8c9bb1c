//! Light and dark themes.
//!
//! The theme is an explicit parameter of every rendering call; nothing in the
//! crate reads an ambient "current theme".

use serde::{Deserialize, Serialize};

use crate::color::{ColorToken, Rgba};

/// Visual theme selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, pale unsorted bars.
    #[default]
    Light,
    /// Dark background, mid-grey unsorted bars.
    Dark,
}

impl Theme {
    /// Map the front end's `isDarkMode` flag to a theme.
    #[must_use]
    pub const fn from_dark_mode(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Whether this is the dark theme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Color of a bar no highlight rule applies to.
    #[must_use]
    pub const fn default_bar(self) -> ColorToken {
        match self {
            Self::Light => ColorToken::Slate200,
            Self::Dark => ColorToken::Slate400,
        }
    }

    /// Visualization area background (white / zinc-700).
    #[must_use]
    pub const fn background(self) -> Rgba {
        match self {
            Self::Light => Rgba::WHITE,
            Self::Dark => Rgba::from_hex(0x3f_3f_46),
        }
    }

    /// Index label color under each bar (zinc-500 / zinc-300).
    #[must_use]
    pub const fn index_label(self) -> Rgba {
        match self {
            Self::Light => Rgba::from_hex(0x71_71_7a),
            Self::Dark => Rgba::from_hex(0xd4_d4_d8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dark_mode() {
        assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
        assert_eq!(Theme::from_dark_mode(false), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn test_default_bar_depends_on_theme() {
        assert_eq!(Theme::Dark.default_bar(), ColorToken::Slate400);
        assert_eq!(Theme::Light.default_bar(), ColorToken::Slate200);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
