//! Hover and press micro-interactions.
//!
//! Gestures scale an element that is separate from the one carrying the
//! entrance, so they never interrupt or replay it. A [`Tilt`] rotates the
//! element inside that scaled wrapper in 3D while hovered.

use serde::Serialize;
use std::time::Duration;

use super::spring::format_number;
use super::transition::{Easing, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GestureState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

impl GestureState {
    pub fn pointer_enter(self) -> Self {
        match self {
            GestureState::Idle => GestureState::Hovered,
            other => other,
        }
    }

    pub fn pointer_leave(self) -> Self {
        GestureState::Idle
    }

    pub fn press(self) -> Self {
        GestureState::Pressed
    }

    /// Releasing leaves the pointer over the element.
    pub fn release(self) -> Self {
        match self {
            GestureState::Pressed => GestureState::Hovered,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gesture {
    pub hover_scale: f64,
    pub press_scale: f64,
    pub transition: Transition,
}

impl Gesture {
    pub const fn new(hover_scale: f64, press_scale: f64) -> Self {
        Self {
            hover_scale,
            press_scale,
            transition: Transition::tween(Duration::from_millis(150), Easing::EaseOut),
        }
    }

    /// Hover only; pressing keeps the hover scale.
    pub const fn hover_only(hover_scale: f64) -> Self {
        Self::new(hover_scale, hover_scale)
    }

    pub const fn with_transition(self, transition: Transition) -> Self {
        Self { transition, ..self }
    }

    pub fn scale(&self, state: GestureState) -> f64 {
        match state {
            GestureState::Idle => 1.0,
            GestureState::Hovered => self.hover_scale,
            GestureState::Pressed => self.press_scale,
        }
    }

    pub fn style(&self, state: GestureState) -> String {
        format!(
            "transform:scale({});transition:{}",
            format_number(self.scale(state)),
            self.transition.css("transform"),
        )
    }
}

/// 3D hover tilt. The parent supplies the perspective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    /// Perspective distance of the parent, in px
    pub perspective_px: f64,
    pub transition: Transition,
}

impl Tilt {
    pub const fn new(rotate_x_deg: f64, rotate_y_deg: f64) -> Self {
        Self {
            rotate_x_deg,
            rotate_y_deg,
            perspective_px: 1000.0,
            transition: Transition::tween(Duration::from_millis(200), Easing::EaseOut),
        }
    }

    /// Rotation for a state; a press keeps the hover tilt.
    pub fn angles(&self, state: GestureState) -> (f64, f64) {
        match state {
            GestureState::Idle => (0.0, 0.0),
            GestureState::Hovered | GestureState::Pressed => {
                (self.rotate_x_deg, self.rotate_y_deg)
            }
        }
    }

    pub fn style(&self, state: GestureState) -> String {
        let (x, y) = self.angles(state);
        format!(
            "transform:rotateX({}deg) rotateY({}deg);transform-style:preserve-3d;transition:{}",
            format_number(x),
            format_number(y),
            self.transition.css("transform"),
        )
    }

    pub fn perspective_style(&self) -> String {
        format!("perspective:{}px", format_number(self.perspective_px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_state_machine() {
        let s = GestureState::default();
        assert_eq!(s, GestureState::Idle);
        let s = s.pointer_enter();
        assert_eq!(s, GestureState::Hovered);
        let s = s.press();
        assert_eq!(s, GestureState::Pressed);
        // entering again while pressed changes nothing
        assert_eq!(s.pointer_enter(), GestureState::Pressed);
        let s = s.release();
        assert_eq!(s, GestureState::Hovered);
        assert_eq!(s.pointer_leave(), GestureState::Idle);
        assert_eq!(GestureState::Idle.release(), GestureState::Idle);
    }

    #[test]
    fn test_scales() {
        let card = Gesture::new(1.03, 0.97);
        assert_eq!(card.scale(GestureState::Idle), 1.0);
        assert_eq!(card.scale(GestureState::Hovered), 1.03);
        assert_eq!(card.scale(GestureState::Pressed), 0.97);

        let avatar = Gesture::hover_only(1.05);
        assert_eq!(avatar.scale(GestureState::Pressed), 1.05);
    }

    #[test]
    fn test_tilt_follows_hover() {
        let tilt = Tilt::new(5.0, 10.0);
        assert_eq!(tilt.angles(GestureState::Idle), (0.0, 0.0));
        assert_eq!(tilt.angles(GestureState::Hovered), (5.0, 10.0));
        assert_eq!(tilt.angles(GestureState::Pressed), (5.0, 10.0));

        let style = tilt.style(GestureState::Hovered);
        assert!(style.starts_with("transform:rotateX(5deg) rotateY(10deg);"));
        assert!(style.contains("transform-style:preserve-3d"));
        assert!(tilt
            .style(GestureState::Idle)
            .starts_with("transform:rotateX(0deg) rotateY(0deg);"));
        assert_eq!(tilt.perspective_style(), "perspective:1000px");
    }

    #[test]
    fn test_style() {
        let style = Gesture::new(1.1, 0.9).style(GestureState::Pressed);
        assert!(style.starts_with("transform:scale(0.9);transition:transform "));
    }
}
