//! Entrance ordering for the whole page
//!
//! Header first, then the profile block on a spring, then the link cards one
//! after another, footer last.

use serde::Serialize;
use std::time::Duration;

use super::gesture::{Gesture, Tilt};
use super::spring::Spring;
use super::transition::{Easing, Transition};
use super::visual::{Entrance, GradientCycle, VisualState};

/// Spring shared by the profile block and the link cards
pub const ENTRANCE_SPRING: Spring = Spring::new(300.0, 20.0);

const FADE: Transition = Transition::tween(Duration::from_millis(300), Easing::EaseOut);

static AVATAR_FRAMES: [&str; 4] = [
    "linear-gradient(to bottom right, #8b5cf6, #ec4899, #ef4444)",
    "linear-gradient(to bottom right, #3b82f6, #8b5cf6, #ec4899)",
    "linear-gradient(to bottom right, #10b981, #3b82f6, #8b5cf6)",
    "linear-gradient(to bottom right, #8b5cf6, #ec4899, #ef4444)",
];

/// Per-child delay offsets for a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stagger {
    pub delay_children: Duration,
    pub stagger_children: Duration,
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> Duration {
        self.delay_children + self.stagger_children * index as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Choreography {
    pub header: Entrance,
    pub profile: Entrance,
    pub identity: Entrance,
    pub list: Entrance,
    pub stagger: Stagger,
    /// Card entrance before its stagger delay is applied
    pub card: Entrance,
    pub footer_min_delay: Duration,
    pub toggle_gesture: Gesture,
    pub avatar_gesture: Gesture,
    pub card_gesture: Gesture,
    pub card_tilt: Tilt,
    pub avatar_backdrop: GradientCycle,
}

impl Default for Choreography {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Choreography {
    pub const STANDARD: Choreography = Choreography {
        header: Entrance::new(VisualState::hidden(), FADE.delayed(Duration::from_millis(200))),
        profile: Entrance::new(
            VisualState::hidden().scaled(0.8),
            Transition::spring(ENTRANCE_SPRING).delayed(Duration::from_millis(300)),
        ),
        identity: Entrance::new(
            VisualState::hidden().offset_y(20.0),
            Transition::tween(Duration::from_millis(400), Easing::EaseOut)
                .delayed(Duration::from_millis(400)),
        ),
        list: Entrance::new(VisualState::hidden(), FADE),
        stagger: Stagger {
            delay_children: Duration::from_millis(500),
            stagger_children: Duration::from_millis(100),
        },
        card: Entrance::new(
            VisualState::hidden().offset_y(20.0),
            Transition::spring(ENTRANCE_SPRING),
        ),
        footer_min_delay: Duration::from_millis(1000),
        toggle_gesture: Gesture::new(1.1, 0.9),
        avatar_gesture: Gesture::hover_only(1.05)
            .with_transition(Transition::spring(Spring::new(400.0, 10.0))),
        card_gesture: Gesture::new(1.03, 0.97)
            .with_transition(Transition::spring(Spring::new(400.0, 10.0))),
        card_tilt: Tilt::new(5.0, 10.0),
        avatar_backdrop: GradientCycle {
            frames: &AVATAR_FRAMES,
            period: Duration::from_secs(10),
            alternate: true,
        },
    };

    /// Entrance of the card at `index`.
    pub fn card(&self, index: usize) -> Entrance {
        self.card.delayed(self.stagger.delay_for(index))
    }

    /// Footer waits for the fixed minimum and for the last card to start.
    pub fn footer(&self, card_count: usize) -> Entrance {
        let after_cards = self.stagger.delay_for(card_count);
        Entrance::new(VisualState::hidden(), FADE.delayed(self.footer_min_delay.max(after_cards)))
    }

    /// Time until every card is at rest.
    pub fn reveal_time(&self, card_count: usize) -> Duration {
        match card_count {
            0 => Duration::ZERO,
            n => self.card(n - 1).transition.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_then_profile_then_identity() {
        let c = Choreography::default();
        assert!(c.header.delay() < c.profile.delay());
        assert!(c.profile.delay() < c.identity.delay());
    }

    #[test]
    fn test_cards_are_staggered_in_order() {
        let c = Choreography::default();
        let delays: Vec<_> = (0..5).map(|i| c.card(i).delay()).collect();
        assert_eq!(delays[0], Duration::from_millis(500));
        for pair in delays.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::from_millis(100));
        }
    }

    #[test]
    fn test_footer_is_last() {
        let c = Choreography::default();
        for count in [0, 1, 5, 12] {
            let footer = c.footer(count).delay();
            let fixed = [c.header.delay(), c.profile.delay(), c.identity.delay(), c.list.delay()];
            assert!(fixed.iter().all(|d| *d < footer));
            assert!((0..count).all(|i| c.card(i).delay() < footer), "count {}", count);
        }
        assert_eq!(c.footer(5).delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_reveal_time_grows_linearly() {
        let c = Choreography::default();
        let t3 = c.reveal_time(3);
        let t4 = c.reveal_time(4);
        let t5 = c.reveal_time(5);
        assert_eq!(t4 - t3, c.stagger.stagger_children);
        assert_eq!(t5 - t4, c.stagger.stagger_children);
        assert_eq!(c.reveal_time(0), Duration::ZERO);
    }

    #[test]
    fn test_card_entrance_fades_up() {
        let card = Choreography::default().card(2);
        assert_eq!(card.from.y, 20.0);
        assert_eq!(card.from.opacity, 0.0);
        assert_eq!(card.to, VisualState::REST);
    }
}
