// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Mark Handles: resize handles for rectangular canvas annotations
//!
//! A [`Transformer`] places eight handles (corners and edge midpoints)
//! around an annotation's rectangle, tells the caller when the pointer is
//! on one, and turns pointer drags into resizes written back to the
//! rectangle's owner. It also paints the handles onto any [`Surface`].

use std::path::PathBuf;

pub mod editing;
pub mod error;
pub mod model;
pub mod render;
pub mod replay;
pub mod settings;
pub mod theme;

pub use editing::{Handle, HandleKind, Transformer, ViewPort};
pub use error::{SettingsError, TransformError};
pub use model::{Annotation, Mark, MarkOwner, MarkUpdate};
pub use render::{SceneSurface, Surface};
pub use settings::TransformerSettings;

/// Entry point for the `mark-handles` replay tool
pub fn run() -> anyhow::Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mark_handles=info".parse()?),
        )
        .init();

    let Some(script_path) = script_path_from_args() else {
        tracing::error!("Usage: mark-handles <gesture.toml>");
        anyhow::bail!("missing gesture script argument");
    };

    let script = replay::Script::load(&script_path)?;
    for outcome in script.run() {
        println!("{outcome}");
    }
    Ok(())
}

/// First command-line argument, if any
fn script_path_from_args() -> Option<PathBuf> {
    std::env::args().nth(1).map(PathBuf::from)
}
