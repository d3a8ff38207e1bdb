// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Handle settings and configuration constants.
//!
//! The constants here are the defaults. `TransformerSettings` is what a
//! `Transformer` is built from; it can also be loaded from a TOML table
//! such as:
//!
//! ```toml
//! node_width = 12.0
//! node_color = "#ff8800"
//! ```
//!
//! Visual defaults (colors) live in `theme.rs`.

use crate::error::SettingsError;
use crate::theme;
use anyhow::{Context, Result};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// HANDLE SETTINGS
// ============================================================================
/// Side length of a handle's hit box and drawn square (logical units)
const NODE_WIDTH: f64 = 10.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Resize handle defaults
pub mod handle {
    /// Side length of a handle's hit box and drawn square (logical units)
    pub const NODE_WIDTH: f64 = super::NODE_WIDTH;
}

// ============================================================================
// TRANSFORMER SETTINGS
// ============================================================================

/// Size and color of the resize handles.
///
/// Fixed once a transformer is built; there is no runtime reconfiguration.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(try_from = "RawSettings")]
pub struct TransformerSettings {
    node_width: f64,
    node_color: Color,
}

impl TransformerSettings {
    /// Validate and build settings.
    pub fn new(node_width: f64, node_color: Color) -> Result<Self, SettingsError> {
        if !node_width.is_finite() || node_width <= 0.0 {
            return Err(SettingsError::InvalidNodeWidth(node_width));
        }
        Ok(Self {
            node_width,
            node_color,
        })
    }

    /// Side length of a handle square, in logical units.
    pub fn node_width(&self) -> f64 {
        self.node_width
    }

    /// Fill color for handle squares.
    pub fn node_color(&self) -> Color {
        self.node_color
    }

    /// Parse settings from a TOML document. Missing keys take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse transformer settings")
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("Loading transformer settings: {}", path.display());
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Invalid settings file: {}", path.display()))
    }
}

impl Default for TransformerSettings {
    fn default() -> Self {
        Self {
            node_width: handle::NODE_WIDTH,
            node_color: theme::handle::FILL,
        }
    }
}

/// Settings as written in TOML, before validation
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSettings {
    node_width: Option<f64>,
    node_color: Option<String>,
}

impl TryFrom<RawSettings> for TransformerSettings {
    type Error = SettingsError;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        let node_color = match raw.node_color {
            Some(value) => parse_node_color(&value)?,
            None => theme::handle::FILL,
        };
        Self::new(raw.node_width.unwrap_or(handle::NODE_WIDTH), node_color)
    }
}

/// Parse a CSS color string (`#5c7cfa`, `rgb(...)`, named colors).
fn parse_node_color(value: &str) -> Result<Color, SettingsError> {
    parse_color(value)
        .map(|color| color.to_alpha_color::<Srgb>())
        .map_err(|e| SettingsError::InvalidColor {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
