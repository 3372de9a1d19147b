use crate::constants::{DEFAULT_IMAGE_MIME, DEFAULT_QR_SIZE_PX};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Viewport {width}px wide leaves no page inside {margin}px margins")]
    Viewport { width: f64, margin: f64 },
    #[error("Print dispatch failed: {0}")]
    Dispatch(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Display surface size in device pixels
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The smaller of the two sides; the upper bound for gesture sizing
    pub fn shortest_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// A touch location in device pixels, relative to the touch target
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One of the four editable layout values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    X,
    Y,
    Width,
    Height,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::X, Field::Y, Field::Width, Field::Height];

    pub fn label(self) -> &'static str {
        match self {
            Field::X => "X",
            Field::Y => "Y",
            Field::Width => "Width",
            Field::Height => "Height",
        }
    }
}

/// Coerced position and size of the placed image, in device pixels
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSnapshot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for LayoutSnapshot {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: DEFAULT_QR_SIZE_PX,
            height: DEFAULT_QR_SIZE_PX,
        }
    }
}

/// Units the document renderer expresses the layout in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitMode {
    /// Device pixels inside a page-sized container (on-screen preview)
    #[default]
    Pixels,
    /// Percent of the page, no fixed container (print)
    Percent,
}

/// Encoded image handed in by the caller; never decoded here
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    data: String,
    mime_type: String,
}

impl ImagePayload {
    /// Wrap a base64 PNG
    pub fn png_base64(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: DEFAULT_IMAGE_MIME.to_string(),
        }
    }

    pub fn with_mime_type(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// `data:` URI used as the image source in rendered markup
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Raw single-pointer touch event from the touch target
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub location: Point,
    /// Number of pointers currently on the surface
    pub pointer_count: usize,
}

impl TouchEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Down,
            location: Point::new(x, y),
            pointer_count: 1,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Move,
            location: Point::new(x, y),
            pointer_count: 1,
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Up,
            location: Point::new(x, y),
            pointer_count: 0,
        }
    }

    pub fn with_pointers(mut self, pointer_count: usize) -> Self {
        self.pointer_count = pointer_count;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pinch recognizer callback payload
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinchEvent {
    pub phase: PinchPhase,
    /// Scale relative to the distance between pointers at gesture start
    pub scale: f64,
    pub velocity: f64,
    pub pointer_count: usize,
}

impl PinchEvent {
    pub fn began() -> Self {
        Self {
            phase: PinchPhase::Began,
            scale: 1.0,
            velocity: 0.0,
            pointer_count: 2,
        }
    }

    pub fn active(scale: f64, velocity: f64) -> Self {
        Self {
            phase: PinchPhase::Active,
            scale,
            velocity,
            pointer_count: 2,
        }
    }

    pub fn end() -> Self {
        Self {
            phase: PinchPhase::End,
            scale: 1.0,
            velocity: 0.0,
            pointer_count: 0,
        }
    }

    pub fn with_pointers(mut self, pointer_count: usize) -> Self {
        self.pointer_count = pointer_count;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinchPhase {
    Began,
    Active,
    End,
    Cancelled,
    Failed,
}

impl PinchPhase {
    /// Whether this phase terminates the gesture
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PinchPhase::End | PinchPhase::Cancelled | PinchPhase::Failed
        )
    }
}
