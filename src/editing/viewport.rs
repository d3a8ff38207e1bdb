// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Viewport transform between logical canvas space and screen space.
//!
//! `screen = design * zoom + offset`. Unlike a font editor there is no
//! Y flip: canvas Y grows downward in both spaces.

use crate::model::Mark;
use kurbo::{Affine, Point, Vec2};

/// Zoom and pan for a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    /// Scale factor (1.0 = 100%)
    pub zoom: f64,
    /// Translation applied after scaling, in screen pixels
    pub offset: Vec2,
}

impl ViewPort {
    pub fn new(zoom: f64, offset: Vec2) -> Self {
        Self { zoom, offset }
    }

    /// The logical-to-screen transform as an affine matrix
    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Convert a logical point to screen coordinates
    pub fn to_screen(&self, point: Point) -> Point {
        self.affine() * point
    }

    /// Convert a screen point (e.g. pointer position) to logical space
    pub fn screen_to_design(&self, point: Point) -> Point {
        self.affine().inverse() * point
    }

    /// Convert a logical box to a drawable box.
    ///
    /// This is the transform `Transformer::paint` expects. The sign of the
    /// extents is preserved.
    pub fn to_screen_mark(&self, mark: Mark) -> Mark {
        let origin = self.to_screen(mark.origin());
        Mark::new(
            origin.x,
            origin.y,
            mark.width * self.zoom,
            mark.height * self.zoom,
        )
    }
}

impl Default for ViewPort {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_by_default() {
        let vp = ViewPort::default();
        let mark = Mark::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(vp.to_screen_mark(mark), mark);
        assert_eq!(vp.to_screen(Point::new(5.0, 6.0)), Point::new(5.0, 6.0));
    }

    #[test]
    fn zoom_then_offset() {
        let vp = ViewPort::new(2.0, Vec2::new(10.0, 20.0));
        assert_eq!(vp.to_screen(Point::new(5.0, 5.0)), Point::new(20.0, 30.0));
        assert_eq!(
            vp.to_screen_mark(Mark::new(5.0, 5.0, 10.0, -4.0)),
            Mark::new(20.0, 30.0, 20.0, -8.0)
        );
    }

    #[test]
    fn screen_to_design_inverts() {
        let vp = ViewPort::new(4.0, Vec2::new(-8.0, 12.0));
        let screen = vp.to_screen(Point::new(3.0, -1.0));
        let back = vp.screen_to_design(screen);
        assert!((back.x - 3.0).abs() < 1e-9);
        assert!((back.y + 1.0).abs() < 1e-9);
    }
}
