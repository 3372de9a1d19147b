use super::SizeBounds;
use crate::constants::MAX_PINCH_POINTERS;
use crate::state::LayoutState;
use crate::types::{Field, PinchEvent, PinchPhase};

/// Image size captured when a pinch begins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSnapshot {
    pub start_width: f64,
    pub start_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PinchState {
    #[default]
    Idle,
    Active(PinchSnapshot),
}

/// Two-pointer pinch-to-scale: IDLE -> ACTIVE -> IDLE
///
/// Scale factors reported by the recognizer are relative to the gesture
/// start, so every frame scales the snapshot, never the current size.
#[derive(Debug, Clone, Default)]
pub struct PinchController {
    state: PinchState,
}

impl PinchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PinchState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, PinchState::Active(_))
    }

    pub fn reset(&mut self) {
        self.state = PinchState::Idle;
    }

    /// Feed one pinch event
    ///
    /// Returns the `(width, height)` written to the layout, or `None` when
    /// the event did not resize the image.
    pub fn handle(
        &mut self,
        event: &PinchEvent,
        layout: &mut LayoutState,
        bounds: SizeBounds,
        precision: u32,
    ) -> Option<(f64, f64)> {
        if event.pointer_count > MAX_PINCH_POINTERS {
            log::debug!("Ignoring pinch with {} pointers", event.pointer_count);
            return None;
        }

        match event.phase {
            PinchPhase::Began => {
                let snapshot = Self::capture(layout);
                log::debug!(
                    "Pinch began at {}x{}",
                    snapshot.start_width,
                    snapshot.start_height
                );
                self.state = PinchState::Active(snapshot);
                None
            }
            PinchPhase::Active => {
                if event.velocity == 0.0 {
                    return None;
                }
                let snapshot = match self.state {
                    PinchState::Active(snapshot) => snapshot,
                    PinchState::Idle => {
                        // Recognizer skipped BEGAN; anchor to the size now
                        log::debug!("Pinch active without began, capturing size");
                        let snapshot = Self::capture(layout);
                        self.state = PinchState::Active(snapshot);
                        snapshot
                    }
                };

                let width = bounds.clamp(snapshot.start_width * event.scale);
                let height = bounds.clamp(snapshot.start_height * event.scale);
                layout.set_gesture_value(Field::Width, width, precision);
                layout.set_gesture_value(Field::Height, height, precision);
                Some((layout.value(Field::Width), layout.value(Field::Height)))
            }
            PinchPhase::End | PinchPhase::Cancelled | PinchPhase::Failed => {
                if self.is_active() {
                    log::debug!("Pinch released ({:?})", event.phase);
                }
                self.state = PinchState::Idle;
                None
            }
        }
    }

    fn capture(layout: &LayoutState) -> PinchSnapshot {
        PinchSnapshot {
            start_width: layout.value(Field::Width),
            start_height: layout.value(Field::Height),
        }
    }
}
