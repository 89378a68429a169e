//! Linkmee frontend
//!
//! Client-side rendered Leptos app compiled to WebAssembly. The page model
//! (state, render, choreography, particle options) comes from the `linkmee`
//! crate; this crate binds it to signals, the DOM and the particle engine.

use leptos::*;

mod app;
mod components;
mod state;

fn main() {
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
