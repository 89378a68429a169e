//! Outbound link cards

use leptos::*;
use linkmee::content::Icon;
use linkmee::motion::GestureState;
use linkmee::page::{LinkCardView, PageView};

use super::gesture::Pressable;
use super::icon::{DynamicGlyph, Glyph};
use crate::state::use_page;

#[component]
pub fn LinkList(snapshot: PageView) -> impl IntoView {
    let page = use_page();
    let revealed = page.revealed;
    let entrance = snapshot.links.entrance;

    view! {
        <nav
            class="w-full max-w-md space-y-4 relative z-10"
            style=move || entrance.style(revealed.get())
        >
            {snapshot
                .links
                .cards
                .into_iter()
                .enumerate()
                .map(|(index, card)| view! { <LinkCard index=index card=card /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn LinkCard(index: usize, card: LinkCardView) -> impl IntoView {
    let page = use_page();
    let revealed = page.revealed;
    let entrance = card.entrance;

    let surface_class = page.pick(move |v| v.links.cards[index].surface_class.clone());
    let title_class = page.pick(move |v| v.links.cards[index].title_class.clone());
    let description_class = page.pick(move |v| v.links.cards[index].description_class.clone());
    let chevron_class = page.pick(move |v| v.links.cards[index].chevron_class.clone());

    let accent_bar = format!("background:{}", card.accent);
    let accent_badge = accent_bar.clone();

    let tilt = card.tilt;
    let hover = create_rw_signal(GestureState::Idle);

    view! {
        <div style=move || entrance.style(revealed.get())>
            <Pressable gesture=card.gesture class="block">
                <div style=tilt.perspective_style()>
                    <a
                        href=card.href
                        target=card.target
                        rel=card.rel
                        class=surface_class
                        style=move || tilt.style(hover.get())
                        on:mouseenter=move |_| hover.update(|s| *s = s.pointer_enter())
                        on:mouseleave=move |_| hover.update(|s| *s = s.pointer_leave())
                    >
                        <div class="h-1 w-full" style=accent_bar />
                        <div class="p-4 flex items-center">
                            <div class=card.badge_class style=accent_badge>
                                <Glyph icon=card.icon />
                            </div>
                            <div class="ml-4 flex-1">
                                <h2 class=title_class>{card.title}</h2>
                                <p class=description_class>{card.description}</p>
                            </div>
                            <DynamicGlyph
                                icon=Icon::ExternalLink
                                class=Signal::derive(chevron_class)
                            />
                        </div>
                    </a>
                </div>
            </Pressable>
        </div>
    }
}
