//! App Root Component
//!
//! Sets page metadata and renders nothing until the controller has mounted.

use leptos::*;
use leptos_meta::*;

use linkmee::content::SITE;

use crate::components::{Footer, Header, LinkList, ParticlesLayer, ProfileCard};
use crate::state::{provide_page, use_page};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let page = provide_page();

    view! {
        <Html lang=SITE.meta.lang />
        <Title text=SITE.meta.title />
        <Meta name="description" content=SITE.meta.description />

        <Show when=move || page.is_mounted() fallback=|| ()>
            <Page />
        </Show>
    }
}

/// The mounted page. Built once from the first view; only classes, the
/// effect layer and animation styles change afterwards.
#[component]
fn Page() -> impl IntoView {
    let page = use_page();
    let Some(snapshot) = page.view.get_untracked() else {
        return ().into_view();
    };
    let root_class = page.pick(|v| v.root_class.clone());
    let container = page.container;

    view! {
        <div node_ref=container class=root_class>
            <ParticlesLayer />
            <Header snapshot=snapshot.clone() />
            <ProfileCard snapshot=snapshot.clone() />
            <LinkList snapshot=snapshot.clone() />
            <Footer snapshot=snapshot />
        </div>
    }
    .into_view()
}
