//! Hover/press scale wrapper

use leptos::*;
use linkmee::motion::{Gesture, GestureState};

#[component]
pub fn Pressable(
    gesture: Gesture,
    #[prop(default = "inline-block")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let state = create_rw_signal(GestureState::Idle);
    let step = move |f: fn(GestureState) -> GestureState| state.update(|s| *s = f(*s));

    view! {
        <div
            class=class
            style=move || gesture.style(state.get())
            on:mouseenter=move |_| step(GestureState::pointer_enter)
            on:mouseleave=move |_| step(GestureState::pointer_leave)
            on:mousedown=move |_| step(GestureState::press)
            on:mouseup=move |_| step(GestureState::release)
            on:touchstart=move |_| step(GestureState::press)
            on:touchend=move |_| step(GestureState::pointer_leave)
        >
            {children()}
        </div>
    }
}
