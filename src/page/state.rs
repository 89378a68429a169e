//! Page state and its one-way flags.

use serde::Serialize;

use super::pointer::PointerPosition;
use crate::theme::ThemeMode;

/// Set once the first client render pass is done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum MountState {
    #[default]
    NotMounted,
    Mounted,
}

/// Set once the background effect engine finished setting up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum EffectInitState {
    #[default]
    NotReady,
    Ready,
}

/// All mutable state of one page instance
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PageState {
    pub theme: ThemeMode,
    pub mount: MountState,
    pub effect: EffectInitState,
    pub pointer: PointerPosition,
}

impl PageState {
    pub fn is_mounted(&self) -> bool {
        self.mount == MountState::Mounted
    }

    pub fn effect_ready(&self) -> bool {
        self.effect == EffectInitState::Ready
    }

    pub fn mark_mounted(&mut self) {
        self.mount = MountState::Mounted;
    }

    pub fn mark_effect_ready(&mut self) {
        self.effect = EffectInitState::Ready;
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// The part of the state rendering depends on. Pointer moves leave it
    /// unchanged, which keeps memoized renders from re-running on them.
    pub fn render_key(&self) -> RenderKey {
        RenderKey {
            theme: self.theme,
            mount: self.mount,
            effect: self.effect,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RenderKey {
    pub theme: ThemeMode,
    pub mount: MountState,
    pub effect: EffectInitState,
}

impl From<RenderKey> for PageState {
    fn from(key: RenderKey) -> Self {
        PageState {
            theme: key.theme,
            mount: key.mount,
            effect: key.effect,
            pointer: PointerPosition::default(),
        }
    }
}
