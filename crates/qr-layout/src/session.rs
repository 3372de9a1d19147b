//! Interactive print layout session
//!
//! [`PrintLayout`] owns everything one print-preview screen needs: the
//! viewport captured when the screen opened, the layout values, both
//! gesture controllers and the edit-mode toggle. Hosts forward raw touch,
//! pinch and text-input callbacks here and ask for documents when they
//! need to draw or print.
//!
//! The viewport is a snapshot. A host that resizes has to open a new
//! session; page geometry is still recomputed from the snapshot on every
//! render.

use crate::gesture::{DragController, PinchController, SizeBounds};
use crate::options::LayoutOptions;
use crate::render::render_document;
use crate::state::LayoutState;
use crate::types::*;
use crate::units::PageGeometry;

#[derive(Debug, Clone)]
pub struct PrintLayout {
    options: LayoutOptions,
    viewport: Viewport,
    layout: LayoutState,
    drag: DragController,
    pinch: PinchController,
    edit_mode: bool,
}

impl PrintLayout {
    pub fn new(options: LayoutOptions, viewport: Viewport) -> Result<Self> {
        options.validate()?;
        options.validate_viewport(&viewport)?;

        let layout = LayoutState::from_snapshot(&options.initial_layout);
        let edit_mode = options.edit_mode;
        Ok(Self {
            options,
            viewport,
            layout,
            drag: DragController::new(),
            pinch: PinchController::new(),
            edit_mode,
        })
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    /// Coerced layout values
    pub fn snapshot(&self) -> LayoutSnapshot {
        self.layout.snapshot()
    }

    /// Page geometry, derived fresh from the viewport snapshot
    pub fn page(&self) -> PageGeometry {
        PageGeometry::from_viewport(
            &self.viewport,
            self.options.margin_px,
            self.options.aspect_ratio,
        )
    }

    /// Range gestures may size the image within
    pub fn size_bounds(&self) -> SizeBounds {
        SizeBounds::new(self.options.minimum_size_px, self.viewport.shortest_side())
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Toggle whether gestures edit the layout
    ///
    /// Turning edit mode off drops any gesture in progress, so a drag can't
    /// resume with a stale touch position once it is turned back on.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        if self.edit_mode == enabled {
            return;
        }
        self.edit_mode = enabled;
        if !enabled {
            self.drag.reset();
            self.pinch.reset();
        }
        log::debug!("Edit mode {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    /// Numeric text input changed; stored as typed
    pub fn set_field_text(&mut self, field: Field, text: impl Into<String>) {
        self.layout.set_text(field, text);
    }

    /// Forward a touch event to the drag controller
    ///
    /// Returns the position delta applied, if any.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> Option<Point> {
        if !self.edit_mode {
            return None;
        }
        self.drag
            .handle(event, &mut self.layout, self.options.precision)
    }

    /// Forward a pinch event to the pinch controller
    ///
    /// Returns the new `(width, height)`, if the event resized the image.
    pub fn handle_pinch(&mut self, event: &PinchEvent) -> Option<(f64, f64)> {
        if !self.edit_mode {
            return None;
        }
        let bounds = self.size_bounds();
        self.pinch
            .handle(event, &mut self.layout, bounds, self.options.precision)
    }

    /// Render the current layout in the given units
    pub fn render(&self, payload: &ImagePayload, mode: UnitMode) -> String {
        render_document(&self.snapshot(), payload, &self.page(), mode)
    }

    /// Pixel-unit document for the on-screen preview
    pub fn preview_document(&self, payload: &ImagePayload) -> String {
        self.render(payload, UnitMode::Pixels)
    }

    /// Percent-unit document for the print service
    pub fn print_document(&self, payload: &ImagePayload) -> String {
        self.render(payload, UnitMode::Percent)
    }
}
