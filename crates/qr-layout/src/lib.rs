pub mod constants;
pub mod gesture;
mod options;
mod print;
mod render;
mod session;
mod state;
mod types;
mod units;

pub use gesture::{DragController, PinchController};
pub use options::*;
pub use print::{PrintDispatcher, print_layout};
pub use render::{render_document, render_preview, render_print};
pub use session::PrintLayout;
pub use state::{LayoutState, NumericField, coerce_number, round_to_precision};
pub use types::*;
pub use units::{PageGeometry, from_percent, to_percent};
