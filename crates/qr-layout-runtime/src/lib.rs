//! Ordered command processing for a print layout session
//!
//! Hosts that receive touch callbacks on several threads send
//! [`LayoutCommand`]s to a single [`worker_task`], which owns the
//! [`PrintLayout`] and applies them one at a time in arrival order.

mod worker;

// Re-export types from library crates
pub use qr_layout::{
    Field, ImagePayload, LayoutSnapshot, PinchEvent, PrintDispatcher, PrintLayout, TouchEvent,
    UnitMode,
};
pub use worker::worker_task;

/// Commands sent from the host to the worker
#[derive(Debug)]
pub enum LayoutCommand {
    Touch(TouchEvent),
    Pinch(PinchEvent),
    SetField { field: Field, text: String },
    SetEditMode { enabled: bool },
    RenderPreview,
    RenderPrint,
    Print,
}

/// Updates sent from the worker to the host
#[derive(Debug, Clone)]
pub enum LayoutUpdate {
    LayoutChanged {
        layout: LayoutSnapshot,
    },
    EditModeChanged {
        enabled: bool,
    },
    DocumentRendered {
        mode: UnitMode,
        html: String,
    },
    Printed,
    Error {
        message: String,
    },
}
