//! From/to visual states and how they become inline CSS.

use serde::Serialize;
use std::time::Duration;

use super::spring::format_number;
use super::transition::Transition;

/// Animated properties of one element
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualState {
    pub opacity: f64,
    /// Vertical offset in px
    pub y: f64,
    pub scale: f64,
}

impl VisualState {
    pub const REST: VisualState = VisualState {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub const fn offset_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity:{};transform:translateY({}px) scale({})",
            format_number(self.opacity),
            format_number(self.y),
            format_number(self.scale),
        )
    }
}

/// One-shot entrance from a hidden state to rest
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Entrance {
    pub from: VisualState,
    pub to: VisualState,
    pub transition: Transition,
}

impl Entrance {
    pub const fn new(from: VisualState, transition: Transition) -> Self {
        Self {
            from,
            to: VisualState::REST,
            transition,
        }
    }

    pub fn delay(&self) -> Duration {
        self.transition.delay
    }

    pub const fn delayed(self, delay: Duration) -> Self {
        Self {
            transition: self.transition.delayed(delay),
            ..self
        }
    }

    /// Inline style before (`revealed == false`) and after the trigger.
    /// Flipping the flag once is what plays the animation.
    pub fn style(&self, revealed: bool) -> String {
        if revealed {
            format!(
                "{};transition:{}, {}",
                self.to.css(),
                self.transition.css("opacity"),
                self.transition.css("transform"),
            )
        } else {
            format!("{};transition:none", self.from.css())
        }
    }
}

/// Background that loops through gradient frames forever.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientCycle {
    pub frames: &'static [&'static str],
    pub period: Duration,
    /// Play back and forth instead of jumping to the first frame
    pub alternate: bool,
}

impl GradientCycle {
    pub fn keyframes_css(&self, name: &str) -> String {
        let last = self.frames.len().saturating_sub(1).max(1);
        let steps: String = self
            .frames
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                let percent = i as f64 * 100.0 / last as f64;
                format!("{}%{{background:{}}}", format_number(percent), frame)
            })
            .collect();
        format!("@keyframes {}{{{}}}", name, steps)
    }

    pub fn animation_css(&self, name: &str) -> String {
        format!(
            "animation:{} {}s linear infinite{}",
            name,
            format_number(self.period.as_secs_f64()),
            if self.alternate { " alternate" } else { "" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::transition::Easing;

    #[test]
    fn test_visual_state_css() {
        let state = VisualState::hidden().offset_y(20.0);
        assert_eq!(state.css(), "opacity:0;transform:translateY(20px) scale(1)");
        assert_eq!(
            VisualState::REST.css(),
            "opacity:1;transform:translateY(0px) scale(1)"
        );
    }

    #[test]
    fn test_entrance_style_flip() {
        let entrance = Entrance::new(
            VisualState::hidden().scaled(0.8),
            Transition::tween(Duration::from_millis(300), Easing::EaseOut),
        )
        .delayed(Duration::from_millis(200));

        let before = entrance.style(false);
        assert!(before.starts_with("opacity:0;"));
        assert!(before.contains("scale(0.8)"));
        assert!(before.ends_with("transition:none"));

        let after = entrance.style(true);
        assert!(after.starts_with("opacity:1;"));
        assert!(after.contains("opacity 0.3s ease-out 0.2s"));
        assert!(after.contains("transform 0.3s ease-out 0.2s"));
    }

    #[test]
    fn test_gradient_cycle_css() {
        static FRAMES: [&str; 3] = ["red", "green", "blue"];
        let cycle = GradientCycle {
            frames: &FRAMES,
            period: Duration::from_secs(10),
            alternate: true,
        };
        assert_eq!(
            cycle.keyframes_css("spin"),
            "@keyframes spin{0%{background:red}50%{background:green}100%{background:blue}}"
        );
        assert_eq!(
            cycle.animation_css("spin"),
            "animation:spin 10s linear infinite alternate"
        );
    }
}
