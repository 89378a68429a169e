//! Render: page state in, view model out
//!
//! [`render`] is pure. Before mount it returns `None`; after mount the
//! structure is always header, profile, links, footer, and only classes and
//! the presence of the effect layer change with the state.

use crate::content::{
    placeholder_avatar_data_uri, Icon, PageMeta, SiteContent, LINK_REL, LINK_TARGET,
};
use crate::effects::{ParticlesOptions, EFFECT_MOUNT_ID};
use crate::motion::{Choreography, Entrance, Gesture, GradientCycle, Tilt};
use crate::theme::{Palette, ThemeMode};

use super::state::PageState;

/// Name of the avatar backdrop `@keyframes` rule
pub const AVATAR_KEYFRAMES: &str = "linkmee-avatar-cycle";

const CARD_BADGE_CLASS: &str =
    "flex-shrink-0 w-10 h-10 rounded-full flex items-center justify-center text-white";

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub theme: ThemeMode,
    pub meta: PageMeta,
    pub root_class: String,
    /// Present only once the effect engine is ready
    pub effect_layer: Option<EffectLayer>,
    pub header: HeaderView,
    pub profile: ProfileView,
    pub links: LinkListView,
    pub footer: FooterView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EffectLayer {
    pub mount_id: &'static str,
    pub class: &'static str,
    pub options: ParticlesOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub entrance: Entrance,
    pub toggle: ToggleView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleView {
    pub class: String,
    pub icon: Icon,
    /// Screen-reader label
    pub label: &'static str,
    pub gesture: Gesture,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub entrance: Entrance,
    pub avatar: AvatarView,
    pub identity: IdentityView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvatarView {
    pub src: &'static str,
    /// Used when `src` fails to load
    pub fallback_src: String,
    pub alt: &'static str,
    pub frame_class: String,
    pub gesture: Gesture,
    pub backdrop: GradientCycle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentityView {
    pub entrance: Entrance,
    pub name: &'static str,
    pub name_class: String,
    pub role: &'static str,
    pub role_class: String,
    pub tagline: &'static str,
    pub tagline_class: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkListView {
    pub entrance: Entrance,
    pub cards: Vec<LinkCardView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkCardView {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
    pub icon: Icon,
    /// CSS background for the accent bar and icon badge
    pub accent: String,
    pub badge_class: &'static str,
    pub surface_class: String,
    pub title_class: String,
    pub description_class: String,
    pub chevron_class: String,
    pub entrance: Entrance,
    pub gesture: Gesture,
    /// Hover rotation of the card surface inside the gesture wrapper
    pub tilt: Tilt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterView {
    pub class: String,
    pub entrance: Entrance,
    pub copyright: String,
    pub edition: &'static str,
}

/// Build the view model, or nothing before mount.
pub fn render(state: &PageState, content: &SiteContent, year: i32) -> Option<PageView> {
    if !state.is_mounted() {
        return None;
    }

    let choreography = Choreography::STANDARD;
    let palette = Palette::for_mode(state.theme);

    let effect_layer = state.effect_ready().then(|| EffectLayer {
        mount_id: EFFECT_MOUNT_ID,
        class: "absolute inset-0",
        options: ParticlesOptions::for_theme(state.theme),
    });

    let cards = content
        .links
        .iter()
        .enumerate()
        .map(|(index, link)| LinkCardView {
            title: link.title,
            description: link.description,
            href: link.url,
            target: LINK_TARGET,
            rel: LINK_REL,
            icon: link.icon,
            accent: link.accent.css(),
            badge_class: CARD_BADGE_CLASS,
            surface_class: format!(
                "block rounded-xl overflow-hidden {} shadow-lg hover:shadow-xl transition-shadow duration-300",
                palette.card_surface
            ),
            title_class: format!("font-medium {}", palette.card_title),
            description_class: format!("text-xs {}", palette.card_description),
            chevron_class: format!("h-4 w-4 {}", palette.card_chevron),
            entrance: choreography.card(index),
            gesture: choreography.card_gesture,
            tilt: choreography.card_tilt,
        })
        .collect();

    Some(PageView {
        theme: state.theme,
        meta: content.meta,
        root_class: format!(
            "min-h-screen {} flex flex-col items-center py-12 px-4 relative overflow-hidden",
            palette.root
        ),
        effect_layer,
        header: HeaderView {
            entrance: choreography.header,
            toggle: ToggleView {
                class: format!("p-3 rounded-full {} shadow-lg", palette.toggle),
                icon: state.theme.toggle_icon(),
                label: "Toggle theme",
                gesture: choreography.toggle_gesture,
            },
        },
        profile: ProfileView {
            entrance: choreography.profile,
            avatar: AvatarView {
                src: content.profile.image_path,
                fallback_src: placeholder_avatar_data_uri(content),
                alt: content.profile.image_alt,
                frame_class: format!(
                    "h-32 w-32 rounded-full overflow-hidden border-4 {} shadow-xl",
                    palette.avatar_frame
                ),
                gesture: choreography.avatar_gesture,
                backdrop: choreography.avatar_backdrop,
            },
            identity: IdentityView {
                entrance: choreography.identity,
                name: content.profile.name,
                name_class: format!("text-3xl font-bold {} mb-2", palette.name),
                role: content.profile.role,
                role_class: format!(
                    "px-4 py-1 rounded-full {} text-sm inline-block mb-2",
                    palette.role_badge
                ),
                tagline: content.profile.tagline,
                tagline_class: format!("{} max-w-xs mx-auto", palette.tagline),
            },
        },
        links: LinkListView {
            entrance: choreography.list,
            cards,
        },
        footer: FooterView {
            class: format!("mt-12 text-center {} text-sm", palette.footer),
            entrance: choreography.footer(content.links.len()),
            copyright: content.footer.copyright(year),
            edition: content.footer.edition,
        },
    })
}
