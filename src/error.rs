// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types

use thiserror::Error;

/// Errors from driving a `Transformer`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A drag step arrived but no handle is latched, either because
    /// `start_transformation` was never called or because it missed.
    #[error("no resize handle is active")]
    NoActiveHandle,
}

/// Errors from validating transformer and viewport settings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("node width must be a positive finite number, got {0}")]
    InvalidNodeWidth(f64),

    #[error("invalid node color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("viewport zoom must be a positive finite number, got {0}")]
    InvalidZoom(f64),

    #[error("viewport offset must be finite, got {0:?}")]
    InvalidOffset([f64; 2]),
}
