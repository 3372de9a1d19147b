//! Shared constants for the print layout
//!
//! Centralizes the page, sizing and gesture numbers used by the
//! session, the gesture controllers and the document renderer.

// =============================================================================
// Page Geometry
// =============================================================================

/// Horizontal margin on each side of the preview page (device pixels)
pub const PREVIEW_MARGIN_PX: f64 = 16.0;

/// Height-to-width ratio of the virtual page (US Letter, 1:1.2941)
pub const LETTER_ASPECT_RATIO: f64 = 1.2941;

// =============================================================================
// QR Image Sizing
// =============================================================================

/// Smallest width/height a gesture may shrink the image to (device pixels)
pub const MINIMUM_SIZE_PX: f64 = 10.0;

/// Width and height of a freshly placed image (device pixels)
pub const DEFAULT_QR_SIZE_PX: f64 = 50.0;

/// Decimal places kept when a gesture writes a value
pub const GESTURE_PRECISION: u32 = 2;

/// Most decimal places an f64 can carry meaningfully
pub const MAX_GESTURE_PRECISION: u32 = 15;

// =============================================================================
// Pointer Guards
// =============================================================================

/// Pointers allowed for a drag; anything more belongs to the pinch
pub const MAX_DRAG_POINTERS: usize = 1;

/// Pointers allowed for a pinch
pub const MAX_PINCH_POINTERS: usize = 2;

// =============================================================================
// Markup
// =============================================================================

/// MIME type assumed for payloads that don't name one
pub const DEFAULT_IMAGE_MIME: &str = "image/png";
