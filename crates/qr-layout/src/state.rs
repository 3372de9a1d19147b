//! Layout state for the placed image
//!
//! Each of the four values keeps the raw text last written to it. Text
//! typed by the user is kept verbatim, so a half-typed `"3."` or an empty
//! field survives between edits; gestures write rounded numbers. Either
//! way the number is only produced when something reads it.

use crate::constants::MAX_GESTURE_PRECISION;
use crate::types::{Field, LayoutSnapshot};

/// A value that is edited as text and consumed as a number
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumericField {
    text: String,
}

impl NumericField {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn from_value(value: f64) -> Self {
        Self {
            text: format_number(value),
        }
    }

    /// Raw text as last written
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Coerced number; unparsable text reads as 0
    pub fn value(&self) -> f64 {
        coerce_number(&self.text)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_value(&mut self, value: f64) {
        self.text = format_number(value);
    }
}

/// Authoritative position and size of the image on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
    x: NumericField,
    y: NumericField,
    width: NumericField,
    height: NumericField,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::from_snapshot(&LayoutSnapshot::default())
    }
}

impl LayoutState {
    pub fn from_snapshot(snapshot: &LayoutSnapshot) -> Self {
        Self {
            x: NumericField::from_value(snapshot.x),
            y: NumericField::from_value(snapshot.y),
            width: NumericField::from_value(snapshot.width),
            height: NumericField::from_value(snapshot.height),
        }
    }

    pub fn field(&self, field: Field) -> &NumericField {
        match field {
            Field::X => &self.x,
            Field::Y => &self.y,
            Field::Width => &self.width,
            Field::Height => &self.height,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut NumericField {
        match field {
            Field::X => &mut self.x,
            Field::Y => &mut self.y,
            Field::Width => &mut self.width,
            Field::Height => &mut self.height,
        }
    }

    pub fn text(&self, field: Field) -> &str {
        self.field(field).text()
    }

    pub fn value(&self, field: Field) -> f64 {
        self.field(field).value()
    }

    /// Store text from a numeric input as typed: no clamping, no rounding
    pub fn set_text(&mut self, field: Field, text: impl Into<String>) {
        self.field_mut(field).set_text(text);
    }

    /// Store a gesture-derived value, rounded to `precision` decimal places
    pub fn set_gesture_value(&mut self, field: Field, value: f64, precision: u32) {
        self.field_mut(field)
            .set_value(round_to_precision(value, precision));
    }

    /// Coerce all four fields for rendering or gesture math
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            x: self.x.value(),
            y: self.y.value(),
            width: self.width.value(),
            height: self.height.value(),
        }
    }
}

/// Round to a fixed number of decimal places
///
/// Precision beyond what an f64 can hold leaves the value untouched.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    if precision > MAX_GESTURE_PRECISION {
        return value;
    }
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    if !rounded.is_finite() {
        return value;
    }
    // Avoid storing "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Parse the longest leading decimal number of `text`, or 0
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent, after leading whitespace. Trailing garbage is ignored,
/// so `"12px"` reads as 12 and `"3."` as 3. Empty, unparsable and
/// non-finite input all read as 0.
pub fn coerce_number(text: &str) -> f64 {
    let s = text.trim_start();
    let end = numeric_prefix_len(s.as_bytes());
    if end == 0 {
        return 0.0;
    }
    match s[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

fn format_number(value: f64) -> String {
    format!("{}", value)
}
