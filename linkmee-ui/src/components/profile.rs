//! Avatar, name, role and tagline

use leptos::*;
use linkmee::page::{parallax_offset, PageView, AVATAR_KEYFRAMES};

use super::gesture::Pressable;
use crate::state::host::bounds_of;
use crate::state::use_page;

/// Drift of the avatar glow toward the pointer, in px
const GLOW_DRIFT: f64 = 6.0;

#[component]
pub fn ProfileCard(snapshot: PageView) -> impl IntoView {
    let page = use_page();
    let revealed = page.revealed;
    let entrance = snapshot.profile.entrance;
    let avatar = snapshot.profile.avatar;
    let identity = snapshot.profile.identity;
    let identity_entrance = identity.entrance;

    let frame_class = page.pick(|v| v.profile.avatar.frame_class.clone());
    let name_class = page.pick(|v| v.profile.identity.name_class.clone());
    let role_class = page.pick(|v| v.profile.identity.role_class.clone());
    let tagline_class = page.pick(|v| v.profile.identity.tagline_class.clone());

    let backdrop_animation = avatar.backdrop.animation_css(AVATAR_KEYFRAMES);
    let container = page.container;
    let state = page.state;
    let glow_style = move || {
        let pointer = state.with(|s| s.pointer);
        let (dx, dy) = container
            .get_untracked()
            .map(|el| parallax_offset(pointer, bounds_of(&el), GLOW_DRIFT))
            .unwrap_or_default();
        format!(
            "{};transform:translate({:.1}px, {:.1}px)",
            backdrop_animation, dx, dy
        )
    };

    let image = create_node_ref::<html::Img>();
    let fallback = avatar.fallback_src.clone();
    let on_error = move |_| {
        let Some(img) = image.get_untracked() else {
            return;
        };
        if img.src() != fallback {
            web_sys::console::warn_1(&"profile image failed, using placeholder".into());
            img.set_src(&fallback);
        }
    };

    view! {
        <section
            class="flex flex-col items-center mb-8 relative z-10"
            style=move || entrance.style(revealed.get())
        >
            <style>{avatar.backdrop.keyframes_css(AVATAR_KEYFRAMES)}</style>
            <Pressable gesture=avatar.gesture class="relative mb-4">
                <div class="absolute -inset-1 rounded-full blur-md opacity-70" style=glow_style />
                <div class=move || format!("relative {}", frame_class())>
                    <img
                        node_ref=image
                        src=avatar.src
                        alt=avatar.alt
                        width="128"
                        height="128"
                        class="h-full w-full object-cover"
                        on:error=on_error
                    />
                </div>
            </Pressable>
            <div class="text-center" style=move || identity_entrance.style(revealed.get())>
                <h1 class=name_class>{identity.name}</h1>
                <span class=role_class>{identity.role}</span>
                <p class=tagline_class>{identity.tagline}</p>
            </div>
        </section>
    }
}
