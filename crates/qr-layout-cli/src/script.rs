use anyhow::{Context, Result};
use qr_layout::{Field, PinchEvent, TouchEvent, Viewport};
use qr_layout_runtime::LayoutCommand;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Recorded session: the viewport it ran on and every host callback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    pub viewport: Viewport,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEvent {
    Touch(TouchEvent),
    Pinch(PinchEvent),
    SetField { field: Field, text: String },
    EditMode(bool),
}

impl From<ScriptEvent> for LayoutCommand {
    fn from(event: ScriptEvent) -> Self {
        match event {
            ScriptEvent::Touch(event) => LayoutCommand::Touch(event),
            ScriptEvent::Pinch(event) => LayoutCommand::Pinch(event),
            ScriptEvent::SetField { field, text } => LayoutCommand::SetField { field, text },
            ScriptEvent::EditMode(enabled) => LayoutCommand::SetEditMode { enabled },
        }
    }
}

impl Script {
    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse script {}", path.display()))
    }
}
