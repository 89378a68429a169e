//! Motion model
//!
//! Declarative entrance and gesture animations. Nothing here runs a frame
//! loop: every animation is expressed as inline CSS (state + `transition`)
//! and the browser interpolates. Spring curves are sampled into CSS
//! `linear()` easing so they keep their overshoot without a JS library.
//!
//! - [`spring`]: damped spring step response
//! - [`transition`]: tween/spring timing with delay
//! - [`visual`]: from/to states, entrances, looping gradient backdrops
//! - [`gesture`]: hover/press scale interactions and the card tilt
//! - [`choreography`]: the page's entrance order

pub mod choreography;
pub mod gesture;
pub mod spring;
pub mod transition;
pub mod visual;

pub use choreography::{Choreography, Stagger, ENTRANCE_SPRING};
pub use gesture::{Gesture, GestureState, Tilt};
pub use spring::Spring;
pub use transition::{Curve, Easing, Transition};
pub use visual::{Entrance, GradientCycle, VisualState};
