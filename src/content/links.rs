//! Outbound links shown as cards, in display order.

use serde::Serialize;

use super::color::{Color, Gradient};

/// Browsing context every outbound link opens in.
pub const LINK_TARGET: &str = "_blank";

/// Opener/referrer isolation for outbound links. The opened page must never
/// get a handle back to this one.
pub const LINK_REL: &str = "noopener noreferrer";

/// Symbolic glyph reference. Line artwork lives in `glyphs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Code,
    Linkedin,
    Instagram,
    Github,
    Discord,
    ExternalLink,
    Sun,
    Moon,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Code => "code",
            Icon::Linkedin => "linkedin",
            Icon::Instagram => "instagram",
            Icon::Github => "github",
            Icon::Discord => "discord",
            Icon::ExternalLink => "external-link",
            Icon::Sun => "sun",
            Icon::Moon => "moon",
        }
    }
}

/// One outbound link card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    pub accent: Gradient,
}

pub static LINKS: [LinkEntry; 5] = [
    LinkEntry {
        title: "Portfolio",
        url: "https://syhru.vercel.app/",
        icon: Icon::Code,
        description: "Check out my latest projects",
        // violet-600 -> indigo-600
        accent: Gradient::new(Color::rgb(0x7c, 0x3a, 0xed), Color::rgb(0x4f, 0x46, 0xe5)),
    },
    LinkEntry {
        title: "LinkedIn",
        url: "https://www.linkedin.com/in/muhammad-syahru-413241278/",
        icon: Icon::Linkedin,
        description: "Professional connections",
        // blue-600 -> blue-800
        accent: Gradient::new(Color::rgb(0x25, 0x63, 0xeb), Color::rgb(0x1e, 0x40, 0xaf)),
    },
    LinkEntry {
        title: "Instagram",
        url: "https://www.instagram.com/syhru_arr",
        icon: Icon::Instagram,
        description: "Let’s be friends & share the fun!",
        // pink-500 -> purple-500
        accent: Gradient::new(Color::rgb(0xec, 0x48, 0x99), Color::rgb(0xa8, 0x55, 0xf7)),
    },
    LinkEntry {
        title: "GitHub",
        url: "https://github.com/syhru",
        icon: Icon::Github,
        description: "See my code repositories",
        // gray-700 -> gray-900
        accent: Gradient::new(Color::rgb(0x37, 0x41, 0x51), Color::rgb(0x11, 0x18, 0x27)),
    },
    LinkEntry {
        title: "Discord",
        url: "https://discord.com/users/arull6593",
        icon: Icon::Discord,
        description: "Space for collaboration.",
        // Discord brand blurple
        accent: Gradient::new(Color::rgb(0x58, 0x65, 0xf2), Color::rgb(0x72, 0x89, 0xda)),
    },
];
