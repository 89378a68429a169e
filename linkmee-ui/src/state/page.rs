//! Page State
//!
//! The controller owns a `RwSignal<PageState>`; components read the rendered
//! [`PageView`] from a memo keyed on the render-relevant state, so pointer
//! moves never re-render the page.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Datelike;
use leptos::*;

use linkmee::content::SITE;
use linkmee::page::{render, PageController, PageState, PageView, StateStore};

use super::host::{TsParticlesEngine, WindowPointerSource};

/// Delay between mounting and starting the entrance animations, so the
/// hidden state gets painted first
const REVEAL_DELAY_MS: u32 = 30;

/// Page state held in a Leptos signal
#[derive(Clone, Copy)]
pub struct SignalStore(pub RwSignal<PageState>);

impl StateStore for SignalStore {
    fn get(&self) -> PageState {
        self.0.get_untracked()
    }

    fn update(&self, f: impl FnOnce(&mut PageState)) {
        self.0.update(f);
    }
}

type Controller = PageController<SignalStore, WindowPointerSource, TsParticlesEngine>;

/// Everything components need, provided through context
#[derive(Clone, Copy)]
pub struct PageContext {
    pub state: RwSignal<PageState>,
    pub view: Memo<Option<PageView>>,
    /// Flipped once after mount; entrance styles animate on the flip
    pub revealed: RwSignal<bool>,
    /// Page container, the pointer's frame of reference
    pub container: NodeRef<html::Div>,
    pub toggle_theme: Callback<()>,
}

impl PageContext {
    pub fn is_mounted(&self) -> bool {
        self.view.with(Option::is_some)
    }

    /// Reactive projection of the current view
    pub fn pick<T: Default>(
        &self,
        f: impl Fn(&PageView) -> T + Copy + 'static,
    ) -> impl Fn() -> T + Copy + 'static {
        let view = self.view;
        move || view.with(|v| v.as_ref().map(f).unwrap_or_default())
    }
}

/// Create the page controller and provide its context to the tree
pub fn provide_page() -> PageContext {
    let state = create_rw_signal(PageState::default());
    let key = create_memo(move |_| state.with(PageState::render_key));
    let year = chrono::Local::now().year();
    let view = create_memo(move |_| render(&PageState::from(key.get()), &SITE, year));
    let revealed = create_rw_signal(false);
    let container = create_node_ref::<html::Div>();

    let controller: Rc<RefCell<Controller>> = Rc::new(RefCell::new(PageController::new(
        SignalStore(state),
        WindowPointerSource::new(container),
        TsParticlesEngine,
    )));

    let toggle_theme = {
        let controller = Rc::clone(&controller);
        Callback::new(move |_: ()| {
            let theme = controller.borrow().toggle_theme();
            web_sys::console::log_1(&format!("theme: {}", theme).into());
        })
    };

    // Initialize after the first frame, like a mount effect. A scope disposed
    // before that frame has already torn the controller down, which keeps
    // the late initialize from subscribing.
    {
        let controller = Rc::clone(&controller);
        request_animation_frame(move || {
            let mut controller = controller.borrow_mut();
            controller.initialize();
            if !controller.is_live() {
                return;
            }
            gloo_timers::callback::Timeout::new(REVEAL_DELAY_MS, move || revealed.set(true))
                .forget();
        });
    }

    on_cleanup(move || controller.borrow_mut().teardown());

    let context = PageContext {
        state,
        view,
        revealed,
        container,
        toggle_theme,
    };
    provide_context(context);
    context
}

pub fn use_page() -> PageContext {
    use_context::<PageContext>().expect("PageContext not found")
}
