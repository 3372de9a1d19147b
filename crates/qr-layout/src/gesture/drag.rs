use crate::constants::MAX_DRAG_POINTERS;
use crate::state::LayoutState;
use crate::types::{Field, Point, TouchEvent, TouchPhase};

/// Touch positions tracked while dragging
///
/// `previous` trails `touch` by one frame, so the delta applied on a move is
/// the movement recorded between the two frames before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSnapshot {
    pub touch: Point,
    pub previous: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSnapshot),
    /// A finger lifted while others stayed down; the next single-pointer
    /// move re-seeds the snapshot instead of moving the image
    Resuming,
}

/// Single-pointer drag: IDLE -> DRAGGING -> IDLE
///
/// Only a release that leaves no pointer on the surface ends the drag.
/// Lifting one finger of several (e.g. the end of a pinch) keeps it alive
/// so the remaining finger can carry on dragging.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_) | DragState::Resuming)
    }

    /// Drop any in-flight drag
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    /// Feed one touch event
    ///
    /// Returns the position delta applied to the layout, or `None` when the
    /// event did not move the image.
    pub fn handle(
        &mut self,
        event: &TouchEvent,
        layout: &mut LayoutState,
        precision: u32,
    ) -> Option<Point> {
        match event.phase {
            TouchPhase::Down => {
                if event.pointer_count != MAX_DRAG_POINTERS {
                    log::debug!(
                        "Ignoring touch-down with {} pointers",
                        event.pointer_count
                    );
                    return None;
                }
                // Seed both positions so the first move can't jump
                self.state = DragState::Dragging(DragSnapshot {
                    touch: event.location,
                    previous: event.location,
                });
                log::debug!(
                    "Drag started at ({}, {})",
                    event.location.x,
                    event.location.y
                );
                None
            }
            TouchPhase::Move => {
                if event.pointer_count != MAX_DRAG_POINTERS {
                    return None;
                }
                let snapshot = match &mut self.state {
                    DragState::Dragging(snapshot) => snapshot,
                    DragState::Resuming => {
                        // The remaining finger's last position is unknown
                        log::debug!(
                            "Drag resumed at ({}, {})",
                            event.location.x,
                            event.location.y
                        );
                        self.state = DragState::Dragging(DragSnapshot {
                            touch: event.location,
                            previous: event.location,
                        });
                        return None;
                    }
                    DragState::Idle => return None,
                };

                let delta = Point::new(
                    snapshot.touch.x - snapshot.previous.x,
                    snapshot.touch.y - snapshot.previous.y,
                );
                snapshot.previous = snapshot.touch;
                snapshot.touch = event.location;

                let x = layout.value(Field::X) + delta.x;
                let y = layout.value(Field::Y) + delta.y;
                layout.set_gesture_value(Field::X, x, precision);
                layout.set_gesture_value(Field::Y, y, precision);
                Some(delta)
            }
            TouchPhase::Up if event.pointer_count > 0 => {
                log::debug!(
                    "Pointer lifted, {} still down; drag suspended",
                    event.pointer_count
                );
                self.state = DragState::Resuming;
                None
            }
            TouchPhase::Up | TouchPhase::Cancel => {
                if self.is_dragging() {
                    log::debug!("Drag released ({:?})", event.phase);
                }
                self.state = DragState::Idle;
                None
            }
        }
    }
}
