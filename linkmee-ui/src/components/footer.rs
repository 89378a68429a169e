use leptos::*;
use linkmee::page::PageView;

use crate::state::use_page;

#[component]
pub fn Footer(snapshot: PageView) -> impl IntoView {
    let page = use_page();
    let revealed = page.revealed;
    let footer = snapshot.footer;
    let entrance = footer.entrance;
    let class = page.pick(|v| v.footer.class.clone());

    view! {
        <footer class=class style=move || entrance.style(revealed.get())>
            <p>{footer.copyright}</p>
            <p class="mt-1 text-xs opacity-75">{footer.edition}</p>
        </footer>
    }
}
