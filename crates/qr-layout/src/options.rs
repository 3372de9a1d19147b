use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Print layout configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    // Page geometry
    pub margin_px: f64,
    pub aspect_ratio: f64,

    // Gesture sizing
    pub minimum_size_px: f64,
    pub precision: u32,

    // Starting placement
    pub initial_layout: LayoutSnapshot,

    // Whether gestures edit the layout when the session opens
    pub edit_mode: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            margin_px: PREVIEW_MARGIN_PX,
            aspect_ratio: LETTER_ASPECT_RATIO,
            minimum_size_px: MINIMUM_SIZE_PX,
            precision: GESTURE_PRECISION,
            initial_layout: LayoutSnapshot::default(),
            edit_mode: false,
        }
    }
}

impl LayoutOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !self.margin_px.is_finite() || self.margin_px < 0.0 {
            return Err(LayoutError::Config(
                "Margin must be a non-negative number".to_string(),
            ));
        }

        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(LayoutError::Config(
                "Aspect ratio must be greater than zero".to_string(),
            ));
        }

        if !self.minimum_size_px.is_finite() || self.minimum_size_px <= 0.0 {
            return Err(LayoutError::Config(
                "Minimum size must be greater than zero".to_string(),
            ));
        }

        if self.precision > MAX_GESTURE_PRECISION {
            return Err(LayoutError::Config(format!(
                "Precision {} exceeds {} decimal places",
                self.precision, MAX_GESTURE_PRECISION
            )));
        }

        let initial = &self.initial_layout;
        if initial.width < 0.0 || initial.height < 0.0 {
            return Err(LayoutError::Config(format!(
                "Initial size {}x{} must not be negative",
                initial.width, initial.height
            )));
        }

        Ok(())
    }

    /// Check that a viewport leaves room for a page inside the margins
    pub fn validate_viewport(&self, viewport: &Viewport) -> Result<()> {
        let fits = viewport.width.is_finite()
            && viewport.height.is_finite()
            && viewport.width > self.margin_px * 2.0
            && viewport.height > 0.0;
        if !fits {
            return Err(LayoutError::Viewport {
                width: viewport.width,
                margin: self.margin_px,
            });
        }
        Ok(())
    }
}
