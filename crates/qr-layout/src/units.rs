//! Pixel and percent-of-page conversion
//!
//! The virtual page is derived from the viewport width: the margins are
//! removed from both sides and the height follows from a fixed aspect
//! ratio. Nothing here is cached; callers derive a fresh geometry every
//! time they render.

use crate::types::Viewport;

/// Pixel dimensions of the virtual page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
}

impl PageGeometry {
    /// Derive the page from a viewport
    ///
    /// `width = viewport.width - 2 * margin`, `height = width * aspect_ratio`.
    pub fn from_viewport(viewport: &Viewport, margin: f64, aspect_ratio: f64) -> Self {
        let width = viewport.width - margin * 2.0;
        Self {
            width,
            height: width * aspect_ratio,
        }
    }

    /// Horizontal pixel value as a percent of the page width
    pub fn percent_x(&self, pixels: f64) -> f64 {
        to_percent(pixels, self.width)
    }

    /// Vertical pixel value as a percent of the page height
    pub fn percent_y(&self, pixels: f64) -> f64 {
        to_percent(pixels, self.height)
    }
}

/// `pixels / dimension * 100`, unclamped and unrounded
#[inline]
pub fn to_percent(pixels: f64, dimension: f64) -> f64 {
    (pixels / dimension) * 100.0
}

/// Inverse of [`to_percent`]
#[inline]
pub fn from_percent(percent: f64, dimension: f64) -> f64 {
    (percent / 100.0) * dimension
}
