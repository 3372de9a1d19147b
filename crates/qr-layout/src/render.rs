//! Markup rendering for the preview surface and the print service
//!
//! Both documents come out of [`render_document`]; only the unit mode
//! differs, so the preview and the print output can't disagree about
//! where the image sits.

use crate::types::{ImagePayload, LayoutSnapshot, UnitMode};
use crate::units::PageGeometry;
use std::fmt::Write;

/// Image box expressed in one unit
#[derive(Debug, Clone, Copy, PartialEq)]
struct ImageBox {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    unit: &'static str,
}

impl ImageBox {
    fn new(layout: &LayoutSnapshot, page: &PageGeometry, mode: UnitMode) -> Self {
        match mode {
            UnitMode::Pixels => Self {
                left: layout.x,
                top: layout.y,
                width: layout.width,
                height: layout.height,
                unit: "px",
            },
            UnitMode::Percent => Self {
                left: page.percent_x(layout.x),
                top: page.percent_y(layout.y),
                width: page.percent_x(layout.width),
                height: page.percent_y(layout.height),
                unit: "%",
            },
        }
    }
}

/// Render the layout as an HTML document in the given units
pub fn render_document(
    layout: &LayoutSnapshot,
    payload: &ImagePayload,
    page: &PageGeometry,
    mode: UnitMode,
) -> String {
    let image = ImageBox::new(layout, page, mode);

    // Only the preview pins the container to the page size
    let mut container = String::from("margin: 0px; padding: 0px;");
    if mode == UnitMode::Pixels {
        let _ = write!(
            container,
            " width: {}px; height: {}px;",
            page.width, page.height
        );
    }

    format!(
        "<html style='{container}'>\n\
         <body style='{container}'>\n\
         <img style='position: absolute; left: {left}{unit}; top: {top}{unit}; width: {width}{unit}; height: {height}{unit};' src='{src}'/>\n\
         </body>\n\
         </html>\n",
        container = container,
        left = image.left,
        top = image.top,
        width = image.width,
        height = image.height,
        unit = image.unit,
        src = payload.data_uri(),
    )
}

/// Pixel-unit document for the on-screen preview
pub fn render_preview(layout: &LayoutSnapshot, payload: &ImagePayload, page: &PageGeometry) -> String {
    render_document(layout, payload, page, UnitMode::Pixels)
}

/// Percent-unit document for the print service
pub fn render_print(layout: &LayoutSnapshot, payload: &ImagePayload, page: &PageGeometry) -> String {
    render_document(layout, payload, page, UnitMode::Percent)
}
