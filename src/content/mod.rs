//! Static page content
//!
//! The profile, the ordered link list, page metadata and footer text. All of
//! it is fixed at compile time and shared by the browser frontend, the static
//! renderer and the CLI.

mod color;
mod glyphs;
mod links;
mod profile;

pub use color::{Color, Gradient};
pub use links::{Icon, LinkEntry, LINKS, LINK_REL, LINK_TARGET};
pub use profile::{
    placeholder_avatar_data_uri, placeholder_avatar_svg, FooterText, PageMeta, Profile,
    SiteContent, SITE,
};
