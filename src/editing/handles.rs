// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Resize handles around a mark: positions and drag mapping.
//!
//! There are eight handles, four corners and four edge midpoints, in a
//! fixed order. The order is the handle index used by hit testing, so the
//! first handle in `HandleKind::ALL` wins when hit boxes overlap.
//!
//! Each handle's drag rule keeps the opposite corner or edge where it is
//! and moves everything the dragged handle owns to the pointer. The rules
//! read the mark as it is *now*, so a drag is a sequence of incremental
//! steps rather than a delta from where the drag started.

use crate::model::{Mark, MarkUpdate};
use kurbo::{Point, Rect};

// ============================================================================
// HANDLE KIND
// ============================================================================

/// Which of the eight resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl HandleKind {
    /// All handles in hit-test order.
    pub const ALL: [HandleKind; 8] = [
        HandleKind::TopLeft,
        HandleKind::Top,
        HandleKind::TopRight,
        HandleKind::Left,
        HandleKind::Right,
        HandleKind::BottomLeft,
        HandleKind::Bottom,
        HandleKind::BottomRight,
    ];

    /// Position of this handle in `ALL`.
    pub fn index(self) -> usize {
        match self {
            HandleKind::TopLeft => 0,
            HandleKind::Top => 1,
            HandleKind::TopRight => 2,
            HandleKind::Left => 3,
            HandleKind::Right => 4,
            HandleKind::BottomLeft => 5,
            HandleKind::Bottom => 6,
            HandleKind::BottomRight => 7,
        }
    }

    /// Inverse of `index`. Out-of-range indices have no handle.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// True for the four corner handles.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }

    /// Where this handle sits on `mark`.
    pub fn position(self, mark: &Mark) -> Point {
        let Mark {
            x,
            y,
            width: w,
            height: h,
        } = *mark;
        match self {
            HandleKind::TopLeft => Point::new(x, y),
            HandleKind::Top => Point::new(x + w / 2.0, y),
            HandleKind::TopRight => Point::new(x + w, y),
            HandleKind::Left => Point::new(x, y + h / 2.0),
            HandleKind::Right => Point::new(x + w, y + h / 2.0),
            HandleKind::BottomLeft => Point::new(x, y + h),
            HandleKind::Bottom => Point::new(x + w / 2.0, y + h),
            HandleKind::BottomRight => Point::new(x + w, y + h),
        }
    }

    /// The point that stays fixed while this handle is dragged.
    ///
    /// Corners anchor on the diagonally opposite corner, edges on the
    /// midpoint of the opposite edge.
    pub fn anchor(self, mark: &Mark) -> Point {
        let opposite = match self {
            HandleKind::TopLeft => HandleKind::BottomRight,
            HandleKind::Top => HandleKind::Bottom,
            HandleKind::TopRight => HandleKind::BottomLeft,
            HandleKind::Left => HandleKind::Right,
            HandleKind::Right => HandleKind::Left,
            HandleKind::BottomLeft => HandleKind::TopRight,
            HandleKind::Bottom => HandleKind::Top,
            HandleKind::BottomRight => HandleKind::TopLeft,
        };
        opposite.position(mark)
    }

    /// Fields to write back when this handle is dragged to `pointer`.
    ///
    /// Only the fields this handle owns are set. Extents are not
    /// normalized, so dragging past the anchor yields negative values.
    pub fn adjust(self, mark: &Mark, pointer: Point) -> MarkUpdate {
        let Mark {
            x,
            y,
            width: w,
            height: h,
        } = *mark;
        let Point { x: px, y: py } = pointer;

        match self {
            HandleKind::TopLeft => MarkUpdate {
                x: Some(px),
                y: Some(py),
                width: Some(w + x - px),
                height: Some(h + y - py),
            },
            HandleKind::Top => MarkUpdate {
                y: Some(py),
                height: Some(h + y - py),
                ..Default::default()
            },
            HandleKind::TopRight => MarkUpdate {
                y: Some(py),
                width: Some(px - x),
                height: Some(y + h - py),
                ..Default::default()
            },
            HandleKind::Left => MarkUpdate {
                x: Some(px),
                width: Some(w + x - px),
                ..Default::default()
            },
            HandleKind::Right => MarkUpdate {
                width: Some(px - x),
                ..Default::default()
            },
            HandleKind::BottomLeft => MarkUpdate {
                x: Some(px),
                width: Some(w + x - px),
                height: Some(py - y),
                ..Default::default()
            },
            HandleKind::Bottom => MarkUpdate {
                height: Some(py - y),
                ..Default::default()
            },
            HandleKind::BottomRight => MarkUpdate {
                width: Some(px - x),
                height: Some(py - y),
                ..Default::default()
            },
        }
    }
}

// ============================================================================
// HANDLE DESCRIPTOR
// ============================================================================

/// A handle placed on a specific mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub kind: HandleKind,
    pub center: Point,
}

impl Handle {
    /// Square of side `node_width` centered on the handle.
    pub fn hit_box(&self, node_width: f64) -> Rect {
        Rect::from_center_size(self.center, (node_width, node_width))
    }

    /// The hit box as a mark, ready for a logical-to-drawable transform.
    pub fn node_mark(&self, node_width: f64) -> Mark {
        Mark::centered(self.center, node_width)
    }

    /// Closed max-norm test: a point exactly `node_width / 2` away on
    /// both axes is still inside.
    pub fn contains(&self, pointer: Point, node_width: f64) -> bool {
        let half = node_width / 2.0;
        (pointer.x - self.center.x).abs() <= half && (pointer.y - self.center.y).abs() <= half
    }
}

/// Build all eight handles for `mark`, in hit-test order.
///
/// Cheap enough to rebuild on every pointer event, which is what callers
/// do: nothing is cached between frames.
pub fn handle_table(mark: &Mark) -> [Handle; 8] {
    HandleKind::ALL.map(|kind| Handle {
        kind,
        center: kind.position(mark),
    })
}
