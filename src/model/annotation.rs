// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! A labelled box annotation: the simplest mark owner.

use super::mark::{Mark, MarkOwner, MarkUpdate};
use serde::{Deserialize, Serialize};

/// A rectangular annotation on the canvas
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotation {
    /// Free-form class label (e.g. "cat", "license-plate")
    #[serde(default)]
    pub label: Option<String>,
    /// Bounding box in logical canvas coordinates
    pub mark: Mark,
}

impl Annotation {
    pub fn new(mark: Mark) -> Self {
        Self { label: None, mark }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl MarkOwner for Annotation {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn apply_mark_update(&mut self, update: MarkUpdate) {
        tracing::trace!(label = ?self.label, ?update, "applying mark update");
        self.mark.apply(update);
    }
}
