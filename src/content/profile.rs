//! Profile header, page metadata and footer text.

use serde::Serialize;

use super::links::{LinkEntry, LINKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    /// Short badge under the name
    pub role: &'static str,
    pub tagline: &'static str,
    /// Site-relative path of the profile picture
    pub image_path: &'static str,
    pub image_alt: &'static str,
}

impl Profile {
    /// Uppercased first letter of each word of the name, at most two.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// Static document metadata handed to the hosting shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub lang: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterText {
    pub owner: &'static str,
    pub edition: &'static str,
}

impl FooterText {
    pub fn copyright(&self, year: i32) -> String {
        format!("Copyright © {} by {}", year, self.owner)
    }
}

/// Everything the page shows that is not state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteContent {
    pub meta: PageMeta,
    pub profile: Profile,
    pub links: &'static [LinkEntry],
    pub footer: FooterText,
}

pub static SITE: SiteContent = SiteContent {
    meta: PageMeta {
        title: "syhru-linkmee",
        description: "syhru-linkmee.v2",
        lang: "en",
    },
    profile: Profile {
        name: "Syahru",
        role: "Fullstack Dev",
        tagline: "Creating digital experiences & sharing knowledge about web development",
        image_path: "/images/me.jpg",
        image_alt: "Profile",
    },
    links: &LINKS,
    footer: FooterText {
        owner: "Syahru",
        edition: "Linkmee-v2",
    },
};

/// SVG stand-in for a missing profile picture: the initials over the first
/// link's accent gradient.
pub fn placeholder_avatar_svg(content: &SiteContent) -> String {
    let (from, to) = content
        .links
        .first()
        .map(|l| (l.accent.from.to_hex(), l.accent.to.to_hex()))
        .unwrap_or_else(|| ("#6366f1".to_string(), "#8b5cf6".to_string()));

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="256" height="256" viewBox="0 0 256 256">"#,
            r#"<defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1">"#,
            r#"<stop offset="0" stop-color="{from}"/><stop offset="1" stop-color="{to}"/>"#,
            r#"</linearGradient></defs>"#,
            r#"<rect width="256" height="256" fill="url(#g)"/>"#,
            r#"<text x="50%" y="50%" dy=".35em" text-anchor="middle" "#,
            r##"font-family="system-ui, sans-serif" font-size="112" font-weight="700" fill="#ffffff">{initials}</text>"##,
            r#"</svg>"#,
        ),
        from = from,
        to = to,
        initials = content.profile.initials(),
    )
}

/// `data:` URI form of [`placeholder_avatar_svg`] for `<img src>`.
pub fn placeholder_avatar_data_uri(content: &SiteContent) -> String {
    let svg = placeholder_avatar_svg(content);
    format!("data:image/svg+xml;charset=utf-8,{}", urlencoding::encode(&svg))
}
