use leptos::*;
use linkmee::content::Icon;

/// Inline stroke icon
#[component]
pub fn Glyph(
    icon: Icon,
    #[prop(default = "h-5 w-5")]
    class: &'static str,
) -> impl IntoView {
    view! { <span class="inline-flex" inner_html=icon.svg(class) /> }
}

/// Icon whose artwork or class follows a signal
#[component]
pub fn DynamicGlyph(
    #[prop(into)]
    icon: MaybeSignal<Icon>,
    #[prop(into)]
    class: MaybeSignal<String>,
) -> impl IntoView {
    view! { <span class="inline-flex" inner_html=move || icon.get().svg(&class.get()) /> }
}
