//! UI Components
//!
//! The page's sections. Structure comes from the first rendered
//! [`PageView`](linkmee::page::PageView); theme-dependent classes stay
//! reactive through [`PageContext::pick`](crate::state::PageContext::pick).

pub mod footer;
pub mod gesture;
pub mod header;
pub mod icon;
pub mod link_card;
pub mod particles;
pub mod profile;

pub use footer::Footer;
pub use gesture::Pressable;
pub use header::Header;
pub use icon::Glyph;
pub use link_card::LinkList;
pub use particles::ParticlesLayer;
pub use profile::ProfileCard;
