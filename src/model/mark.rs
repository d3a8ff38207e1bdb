// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! The annotated rectangle ("mark") and partial updates to it.
//!
//! A `Mark` is stored as origin plus extents rather than as two corners,
//! because resize handles write back individual fields. Width and height
//! are allowed to go negative while a handle is dragged past the opposite
//! edge; nothing in this module clamps them.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

// ============================================================================
// MARK
// ============================================================================

/// A rectangle in logical (pre-transform) canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Mark {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Mark {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A square of side `size` centered on `center`.
    pub fn centered(center: Point, size: f64) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }

    /// Convert to a `kurbo::Rect` without reordering the corners.
    ///
    /// A negative width yields `x1 < x0`, which kurbo tolerates.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Build a mark from a `kurbo::Rect`, keeping the sign of its extents.
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// Origin of the mark.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The same area with non-negative width and height.
    ///
    /// Handles never call this; owners that want normalized marks after
    /// a drag do it themselves.
    pub fn normalized(self) -> Self {
        Self::from_rect(self.to_rect().abs())
    }

    /// True when either extent is negative.
    pub fn is_inverted(&self) -> bool {
        self.width < 0.0 || self.height < 0.0
    }

    /// Merge a partial update into this mark.
    pub fn apply(&mut self, update: MarkUpdate) {
        update.apply_to(self);
    }
}

impl From<Rect> for Mark {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

// ============================================================================
// PARTIAL UPDATE
// ============================================================================

/// A partial mark update produced by a resize handle.
///
/// `None` means the handle does not touch that field. `Some(v)` means the
/// field is set to `v`, even if `v` happens to equal the current value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarkUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl MarkUpdate {
    /// True when the update changes no fields.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.width.is_none() && self.height.is_none()
    }

    /// Write the provided fields into `mark`, leaving the rest alone.
    pub fn apply_to(&self, mark: &mut Mark) {
        if let Some(x) = self.x {
            mark.x = x;
        }
        if let Some(y) = self.y {
            mark.y = y;
        }
        if let Some(width) = self.width {
            mark.width = width;
        }
        if let Some(height) = self.height {
            mark.height = height;
        }
    }
}

// ============================================================================
// OWNER CONTRACT
// ============================================================================

/// Something that owns a mark: the shape a transformer edits.
///
/// Handles read the mark once per table build and write back once per
/// drag step.
pub trait MarkOwner {
    /// Current mark, as committed by the owner.
    fn mark(&self) -> Mark;

    /// Merge a partial update. Only the provided fields change.
    fn apply_mark_update(&mut self, update: MarkUpdate);
}

impl MarkOwner for Mark {
    fn mark(&self) -> Mark {
        *self
    }

    fn apply_mark_update(&mut self, update: MarkUpdate) {
        self.apply(update);
    }
}
