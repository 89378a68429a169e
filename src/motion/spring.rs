//! Damped spring curves
//!
//! A unit step response of a mass-spring-damper starting at rest. Progress
//! goes from 0 toward 1; underdamped springs overshoot 1 a little and settle.

use serde::Serialize;
use std::time::Duration;

/// Distance from the target under which a spring counts as settled.
pub const REST_DELTA: f64 = 0.005;

const SAMPLE_STEP_SECS: f64 = 0.001;
const MAX_SETTLE_SECS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// ζ: below 1 overshoots, 1 is critical, above 1 creeps in.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Progress at `t` seconds after release.
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }

        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if zeta < 1.0 - 1e-9 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            1.0 - envelope * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else if zeta <= 1.0 + 1e-9 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else {
            let s = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - s);
            let r2 = -w0 * (zeta + s);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Time after which the curve stays within [`REST_DELTA`] of 1.
    pub fn settle_time(&self) -> Duration {
        let steps = (MAX_SETTLE_SECS / SAMPLE_STEP_SECS) as usize;
        let last_outside = (0..=steps)
            .rev()
            .find(|&i| (1.0 - self.position(i as f64 * SAMPLE_STEP_SECS)).abs() > REST_DELTA)
            .unwrap_or(0);

        Duration::from_secs_f64((last_outside + 1) as f64 * SAMPLE_STEP_SECS)
    }

    /// Largest value the curve reaches before settling.
    pub fn peak(&self) -> f64 {
        let settle = self.settle_time().as_secs_f64();
        let steps = (settle / SAMPLE_STEP_SECS).ceil() as usize;
        (0..=steps)
            .map(|i| self.position(i as f64 * SAMPLE_STEP_SECS))
            .fold(0.0, f64::max)
    }

    /// CSS `linear()` easing function sampled evenly over the settle time.
    /// Pair it with [`Spring::settle_time`] as the transition duration.
    pub fn css_easing(&self, samples: usize) -> String {
        let samples = samples.max(2);
        let settle = self.settle_time().as_secs_f64();

        let points: Vec<String> = (0..=samples)
            .map(|i| {
                if i == samples {
                    return "1".to_string();
                }
                let t = settle * i as f64 / samples as f64;
                format_number(self.position(t))
            })
            .collect();

        format!("linear({})", points.join(", "))
    }
}

/// Up to four decimals, trailing zeros dropped.
pub(crate) fn format_number(value: f64) -> String {
    let text = format!("{:.4}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "" | "-" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}
