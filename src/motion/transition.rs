//! Timing of a single property change.

use serde::Serialize;
use std::time::Duration;

use super::spring::{format_number, Spring};

/// Samples per spring curve when exported as CSS easing
const SPRING_SAMPLES: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Curve {
    Tween { duration: Duration, easing: Easing },
    Spring(Spring),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub curve: Curve,
    pub delay: Duration,
}

impl Transition {
    pub const fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            curve: Curve::Tween { duration, easing },
            delay: Duration::ZERO,
        }
    }

    pub const fn spring(spring: Spring) -> Self {
        Self {
            curve: Curve::Spring(spring),
            delay: Duration::ZERO,
        }
    }

    pub const fn delayed(self, delay: Duration) -> Self {
        Self {
            curve: self.curve,
            delay,
        }
    }

    /// Running time, excluding the delay
    pub fn duration(&self) -> Duration {
        match self.curve {
            Curve::Tween { duration, .. } => duration,
            Curve::Spring(spring) => spring.settle_time(),
        }
    }

    /// Time from trigger until the value is at rest
    pub fn end(&self) -> Duration {
        self.delay + self.duration()
    }

    fn easing_css(&self) -> String {
        match self.curve {
            Curve::Tween { easing, .. } => easing.css().to_string(),
            Curve::Spring(spring) => spring.css_easing(SPRING_SAMPLES),
        }
    }

    /// One entry of a CSS `transition` list, e.g. `opacity 0.3s ease-out 0.5s`.
    pub fn css(&self, property: &str) -> String {
        format!(
            "{} {}s {} {}s",
            property,
            format_number(self.duration().as_secs_f64()),
            self.easing_css(),
            format_number(self.delay.as_secs_f64()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_css() {
        let t = Transition::tween(Duration::from_millis(300), Easing::EaseOut)
            .delayed(Duration::from_millis(500));
        assert_eq!(t.css("opacity"), "opacity 0.3s ease-out 0.5s");
        assert_eq!(t.end(), Duration::from_millis(800));
    }

    #[test]
    fn test_spring_duration_is_settle_time() {
        let spring = Spring::new(300.0, 20.0);
        let t = Transition::spring(spring).delayed(Duration::from_millis(200));
        assert_eq!(t.duration(), spring.settle_time());
        assert_eq!(t.end(), Duration::from_millis(200) + spring.settle_time());
        assert!(t.css("transform").contains("linear(0, "));
    }
}
