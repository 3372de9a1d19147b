//! Touch gesture controllers
//!
//! Two independent state machines drive the layout:
//! - [`DragController`] moves the image with a single pointer
//! - [`PinchController`] scales it with two pointers
//!
//! Both always receive every event; pointer-count guards decide which one
//! acts. Each owns its per-gesture snapshot and drops it on release.

mod drag;
mod pinch;

pub use drag::*;
pub use pinch::*;

/// Inclusive range a gesture may size the image within
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBounds {
    pub min: f64,
    pub max: f64,
}

impl SizeBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp to `[min, max]`; `min` wins if the range is inverted
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }
}
