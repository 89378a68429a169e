//! Top bar with the theme toggle

use leptos::*;
use linkmee::content::Icon;
use linkmee::page::PageView;

use super::gesture::Pressable;
use super::icon::DynamicGlyph;
use crate::state::use_page;

#[component]
pub fn Header(snapshot: PageView) -> impl IntoView {
    let page = use_page();
    let toggle = snapshot.header.toggle;
    let entrance = snapshot.header.entrance;
    let revealed = page.revealed;

    let toggle_class = page.pick(|v| v.header.toggle.class.clone());
    let toggle_icon = page.pick(|v| Some(v.header.toggle.icon));
    let icon = Signal::derive(move || toggle_icon().unwrap_or(Icon::Sun));

    view! {
        <header
            class="w-full max-w-md flex justify-end mb-8 relative z-10"
            style=move || entrance.style(revealed.get())
        >
            <Pressable gesture=toggle.gesture>
                <button
                    type="button"
                    class=toggle_class
                    aria-label=toggle.label
                    on:click=move |_| page.toggle_theme.call(())
                >
                    <DynamicGlyph icon=icon class="h-5 w-5".to_string() />
                </button>
            </Pressable>
        </header>
    }
}
