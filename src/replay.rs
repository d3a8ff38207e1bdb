// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Replay a scripted pointer gesture against an annotation.
//!
//! Scripts are TOML. Step coordinates are screen coordinates; they are
//! mapped to logical space through the optional viewport before they
//! reach the transformer.
//!
//! ```toml
//! [viewport]
//! zoom = 2.0
//! offset = [0.0, 0.0]
//!
//! [annotation]
//! label = "car"
//! mark = { x = 0.0, y = 0.0, width = 100.0, height = 50.0 }
//!
//! [[steps]]
//! action = "press"
//! x = 200.0
//! y = 100.0
//!
//! [[steps]]
//! action = "drag"
//! x = 240.0
//! y = 160.0
//! ```

use crate::editing::{HandleKind, Transformer, ViewPort};
use crate::error::{SettingsError, TransformError};
use crate::model::{Annotation, Mark, MarkOwner};
use crate::settings::TransformerSettings;
use anyhow::{Context, Result};
use kurbo::{Point, Vec2};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

// ============================================================================
// SCRIPT FORMAT
// ============================================================================

/// Pointer action for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Pointer moved with no button held
    Hover,
    /// Button pressed
    Press,
    /// Pointer moved with the button held
    Drag,
    /// Button released
    Release,
}

/// One scripted pointer event, in screen coordinates
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub action: Action,
    pub x: f64,
    pub y: f64,
}

/// Viewport as written in the script, validated on load
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(try_from = "RawViewPort")]
struct ViewPortConfig {
    zoom: f64,
    offset: [f64; 2],
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawViewPort {
    #[serde(default = "default_zoom")]
    zoom: f64,
    #[serde(default)]
    offset: [f64; 2],
}

fn default_zoom() -> f64 {
    1.0
}

impl TryFrom<RawViewPort> for ViewPortConfig {
    type Error = SettingsError;

    fn try_from(raw: RawViewPort) -> Result<Self, Self::Error> {
        // Zero or non-finite zoom has no inverse, so every pointer would map to NaN.
        if !raw.zoom.is_finite() || raw.zoom <= 0.0 {
            return Err(SettingsError::InvalidZoom(raw.zoom));
        }
        if !raw.offset.iter().all(|v| v.is_finite()) {
            return Err(SettingsError::InvalidOffset(raw.offset));
        }
        Ok(Self {
            zoom: raw.zoom,
            offset: raw.offset,
        })
    }
}

impl From<ViewPortConfig> for ViewPort {
    fn from(config: ViewPortConfig) -> Self {
        ViewPort::new(config.zoom, Vec2::new(config.offset[0], config.offset[1]))
    }
}

/// A complete gesture script
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub settings: TransformerSettings,
    #[serde(default)]
    viewport: Option<ViewPortConfig>,
    pub annotation: Annotation,
    #[serde(default)]
    pub steps: Vec<Step>,
}

// ============================================================================
// OUTCOMES
// ============================================================================

/// What happened at one step
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub index: usize,
    pub action: Action,
    /// Pointer position in logical space
    pub pointer: Point,
    /// Handle under the pointer (hover/press) or the one being dragged
    pub handle: Option<HandleKind>,
    /// Mark after the step
    pub mark: Mark,
    /// Set when a drag step had no handle to move
    pub error: Option<TransformError>,
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handle = match self.handle {
            Some(kind) => format!("{kind:?}"),
            None => "-".to_string(),
        };
        write!(
            f,
            "#{:<3} {:<8} ({:>8.2}, {:>8.2})  handle={:<12} mark=[x={}, y={}, w={}, h={}]",
            self.index,
            format!("{:?}", self.action),
            self.pointer.x,
            self.pointer.y,
            handle,
            self.mark.x,
            self.mark.y,
            self.mark.width,
            self.mark.height,
        )?;
        if let Some(err) = self.error {
            write!(f, "  ({err})")?;
        }
        Ok(())
    }
}

// ============================================================================
// RUNNING
// ============================================================================

impl Script {
    /// Parse a script from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse gesture script")
    }

    /// Load a script from a file
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("Loading gesture script: {}", path.display());
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Invalid gesture script: {}", path.display()))
    }

    /// The viewport step coordinates are mapped through
    pub fn viewport(&self) -> ViewPort {
        self.viewport.map(ViewPort::from).unwrap_or_default()
    }

    /// Run every step against a copy of the annotation.
    pub fn run(&self) -> Vec<StepOutcome> {
        let viewport = self.viewport();
        let mut transformer = Transformer::new(self.settings);
        let mut annotation = self.annotation.clone();

        tracing::info!(
            "Replaying {} steps on {:?}",
            self.steps.len(),
            annotation.mark()
        );

        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let pointer = viewport.screen_to_design(Point::new(step.x, step.y));
                let (handle, error) = match step.action {
                    Action::Hover => (transformer.handle_at(&annotation, pointer), None),
                    Action::Press => (transformer.start_transformation(&annotation, pointer), None),
                    Action::Drag => match transformer.on_transformation(&mut annotation, pointer) {
                        Ok(_) => (transformer.active_handle(), None),
                        Err(err) => (None, Some(err)),
                    },
                    Action::Release => (transformer.end_transformation(), None),
                };

                let outcome = StepOutcome {
                    index,
                    action: step.action,
                    pointer,
                    handle,
                    mark: annotation.mark(),
                    error,
                };
                tracing::debug!("{outcome}");
                outcome
            })
            .collect()
    }
}
