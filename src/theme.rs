//! Light/dark mode and the classes each mode puts on the page.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::content::Icon;

/// Visual mode of one page instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Icon on the toggle button: the mode a click switches to.
    pub fn toggle_icon(self) -> Icon {
        match self {
            ThemeMode::Light => Icon::Moon,
            ThemeMode::Dark => Icon::Sun,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{}', expected light or dark", other)),
        }
    }
}

/// Tailwind classes per element for one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub root: &'static str,
    pub toggle: &'static str,
    pub avatar_frame: &'static str,
    pub name: &'static str,
    pub role_badge: &'static str,
    pub tagline: &'static str,
    pub card_surface: &'static str,
    pub card_title: &'static str,
    pub card_description: &'static str,
    pub card_chevron: &'static str,
    pub footer: &'static str,
}

const DARK: Palette = Palette {
    root: "dark bg-black",
    toggle: "bg-gray-900 text-white border border-gray-800",
    avatar_frame: "border-indigo-500/20",
    name: "text-white",
    role_badge: "bg-purple-900/50 text-purple-200",
    tagline: "text-gray-300",
    card_surface: "bg-gray-900/30 backdrop-blur-sm",
    card_title: "text-white",
    card_description: "text-gray-400",
    card_chevron: "text-gray-400",
    footer: "text-gray-400",
};

const LIGHT: Palette = Palette {
    root: "bg-gradient-to-b from-gray-50 via-white to-gray-100",
    toggle: "bg-white text-gray-800",
    avatar_frame: "border-blue-300/30",
    name: "text-gray-900",
    role_badge: "bg-blue-100 text-blue-800",
    tagline: "text-gray-600",
    card_surface: "bg-white/80 backdrop-blur-sm",
    card_title: "text-gray-900",
    card_description: "text-gray-500",
    card_chevron: "text-gray-500",
    footer: "text-gray-500",
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_toggle_icon_shows_the_other_mode() {
        assert_eq!(ThemeMode::Dark.toggle_icon(), Icon::Sun);
        assert_eq!(ThemeMode::Light.toggle_icon(), Icon::Moon);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_palettes_differ() {
        let dark = Palette::for_mode(ThemeMode::Dark);
        let light = Palette::for_mode(ThemeMode::Light);
        assert!(dark.root.contains("dark"));
        assert!(!light.root.contains("dark"));
        assert_ne!(dark.card_surface, light.card_surface);
    }
}
