// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! The resize handle controller.
//!
//! A `Transformer` is driven by pointer events in this order:
//!
//! 1. `check_boundary` on hover, to decide e.g. which cursor to show
//! 2. `start_transformation` on pointer down, which latches a handle
//! 3. `on_transformation` on every pointer move while the button is held
//! 4. `end_transformation` on pointer up (optional)
//!
//! and `paint` once per frame. The owner of the mark is passed into every
//! call, the same way tools receive the session they edit. Nothing about
//! the mark is kept between calls; only the latched handle is.

use super::handles::{HandleKind, handle_table};
use super::hit_test::index_at_cursor;
use crate::error::TransformError;
use crate::model::{Mark, MarkOwner, MarkUpdate};
use crate::render::Surface;
use crate::settings::TransformerSettings;
use kurbo::Point;

/// Resize handles for one mark owner
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    settings: TransformerSettings,
    /// Handle latched by the last `start_transformation`
    active: Option<HandleKind>,
}

impl Transformer {
    pub fn new(settings: TransformerSettings) -> Self {
        Self {
            settings,
            active: None,
        }
    }

    pub fn settings(&self) -> &TransformerSettings {
        &self.settings
    }

    /// The handle a drag would currently move, if any.
    pub fn active_handle(&self) -> Option<HandleKind> {
        self.active
    }

    /// Which handle, if any, is under `pointer`.
    pub fn handle_at(&self, shape: &impl MarkOwner, pointer: Point) -> Option<HandleKind> {
        index_at_cursor(&shape.mark(), pointer, self.settings.node_width())
    }

    /// True if `pointer` is on any handle. Does not change state.
    pub fn check_boundary(&self, shape: &impl MarkOwner, pointer: Point) -> bool {
        self.handle_at(shape, pointer).is_some()
    }

    /// Latch the handle under `pointer` for the following drag.
    ///
    /// A miss clears any previous latch and returns `None`, so later drag
    /// steps report `NoActiveHandle` instead of moving a stale handle.
    pub fn start_transformation(
        &mut self,
        shape: &impl MarkOwner,
        pointer: Point,
    ) -> Option<HandleKind> {
        self.active = self.handle_at(shape, pointer);
        match self.active {
            Some(kind) => tracing::debug!(
                "[start_transformation] latched {:?} at ({}, {})",
                kind,
                pointer.x,
                pointer.y
            ),
            None => tracing::debug!(
                "[start_transformation] no handle at ({}, {})",
                pointer.x,
                pointer.y
            ),
        }
        self.active
    }

    /// Move the latched handle to `pointer` and write the result back.
    ///
    /// The mark is re-read on every call, so each step resizes from the
    /// state left by the previous one. Returns the update that was applied.
    pub fn on_transformation(
        &self,
        shape: &mut impl MarkOwner,
        pointer: Point,
    ) -> Result<MarkUpdate, TransformError> {
        let Some(kind) = self.active else {
            tracing::warn!(
                "[on_transformation] drag at ({}, {}) with no active handle",
                pointer.x,
                pointer.y
            );
            return Err(TransformError::NoActiveHandle);
        };

        let mark = shape.mark();
        let update = kind.adjust(&mark, pointer);
        tracing::trace!(?kind, ?mark, ?update, "[on_transformation]");
        shape.apply_mark_update(update);
        Ok(update)
    }

    /// Release the latched handle, returning it.
    pub fn end_transformation(&mut self) -> Option<HandleKind> {
        let released = self.active.take();
        if let Some(kind) = released {
            tracing::debug!("[end_transformation] released {:?}", kind);
        }
        released
    }

    /// Draw all eight handles.
    ///
    /// `to_draw` maps a logical box to drawable space (see
    /// `ViewPort::to_screen_mark`). The surface's fill color is restored
    /// before returning.
    pub fn paint<S, F>(&self, shape: &impl MarkOwner, surface: &mut S, to_draw: F)
    where
        S: Surface + ?Sized,
        F: Fn(Mark) -> Mark,
    {
        let node_width = self.settings.node_width();
        let handles = handle_table(&shape.mark());

        surface.save();
        surface.set_fill_color(self.settings.node_color());
        for handle in &handles {
            let drawn = to_draw(handle.node_mark(node_width));
            surface.fill_rect(drawn.to_rect());
        }
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::ViewPort;
    use crate::model::Annotation;
    use crate::theme;
    use kurbo::{Rect, Vec2};
    use peniko::Color;
    use peniko::color::Rgba8;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Save,
        Restore,
        SetFill(Rgba8),
        Fill(Rect),
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn save(&mut self) {
            self.ops.push(Op::Save);
        }

        fn restore(&mut self) {
            self.ops.push(Op::Restore);
        }

        fn set_fill_color(&mut self, color: Color) {
            self.ops.push(Op::SetFill(color.to_rgba8()));
        }

        fn fill_rect(&mut self, rect: Rect) {
            self.ops.push(Op::Fill(rect));
        }
    }

    fn shape() -> Annotation {
        Annotation::new(Mark::new(0.0, 0.0, 100.0, 50.0))
    }

    #[test]
    fn check_boundary_does_not_latch() {
        let transformer = Transformer::default();
        let shape = shape();
        assert!(transformer.check_boundary(&shape, Point::new(100.0, 50.0)));
        assert!(!transformer.check_boundary(&shape, Point::new(50.0, 25.0)));
        assert_eq!(transformer.active_handle(), None);
    }

    #[test]
    fn start_latches_hit_handle() {
        let mut transformer = Transformer::default();
        let latched = transformer.start_transformation(&shape(), Point::new(98.0, 52.0));
        assert_eq!(latched, Some(HandleKind::BottomRight));
        assert_eq!(transformer.active_handle(), Some(HandleKind::BottomRight));
    }

    #[test]
    fn miss_clears_previous_latch() {
        let mut transformer = Transformer::default();
        let mut shape = shape();
        transformer.start_transformation(&shape, Point::new(0.0, 0.0));
        assert_eq!(transformer.active_handle(), Some(HandleKind::TopLeft));

        assert_eq!(transformer.start_transformation(&shape, Point::new(50.0, 25.0)), None);
        assert_eq!(transformer.active_handle(), None);
        assert_eq!(
            transformer.on_transformation(&mut shape, Point::new(10.0, 10.0)),
            Err(TransformError::NoActiveHandle)
        );
        assert_eq!(shape.mark(), Mark::new(0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn drag_without_start_is_an_error() {
        let transformer = Transformer::default();
        let mut shape = shape();
        let result = transformer.on_transformation(&mut shape, Point::new(10.0, 10.0));
        assert_eq!(result, Err(TransformError::NoActiveHandle));
        assert_eq!(shape.mark(), Mark::new(0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn bottom_right_drag_resizes() {
        let mut transformer = Transformer::default();
        let mut shape = shape();
        transformer.start_transformation(&shape, Point::new(100.0, 50.0));

        let update = transformer
            .on_transformation(&mut shape, Point::new(120.0, 80.0))
            .unwrap();
        assert_eq!(update.x, None);
        assert_eq!(update.y, None);
        assert_eq!(shape.mark(), Mark::new(0.0, 0.0, 120.0, 80.0));
    }

    #[test]
    fn top_left_drag_resizes() {
        let mut transformer = Transformer::default();
        let mut shape = shape();
        transformer.start_transformation(&shape, Point::new(0.0, 0.0));
        transformer
            .on_transformation(&mut shape, Point::new(10.0, 10.0))
            .unwrap();
        assert_eq!(shape.mark(), Mark::new(10.0, 10.0, 90.0, 40.0));
    }

    #[test]
    fn steps_are_incremental() {
        let mut transformer = Transformer::default();
        let mut shape = shape();
        transformer.start_transformation(&shape, Point::new(100.0, 50.0));

        transformer
            .on_transformation(&mut shape, Point::new(10.0, 10.0))
            .unwrap();
        assert_eq!(shape.mark(), Mark::new(0.0, 0.0, 10.0, 10.0));

        // The second step starts from {10, 10}, not from {100, 50}.
        transformer
            .on_transformation(&mut shape, Point::new(10.0, 10.0))
            .unwrap();
        assert_eq!(shape.mark(), Mark::new(0.0, 0.0, 10.0, 10.0));

        // The table is rebuilt from the new mark, so the handle is now
        // found at its new position.
        assert_eq!(
            transformer.handle_at(&shape, Point::new(10.0, 10.0)),
            Some(HandleKind::BottomRight)
        );
    }

    #[test]
    fn steps_read_external_changes() {
        let mut transformer = Transformer::default();
        let mut shape = shape();
        transformer.start_transformation(&shape, Point::new(0.0, 25.0));
        assert_eq!(transformer.active_handle(), Some(HandleKind::Left));

        // The owner moves the mark between drag steps.
        shape.mark.x = 50.0;
        transformer
            .on_transformation(&mut shape, Point::new(40.0, 0.0))
            .unwrap();
        // Right edge was at 150 after the external move and stays there.
        assert_eq!(shape.mark(), Mark::new(40.0, 0.0, 110.0, 50.0));
    }

    #[test]
    fn latch_survives_until_next_start() {
        let mut transformer = Transformer::default();
        let mut shape = shape();
        transformer.start_transformation(&shape, Point::new(100.0, 25.0));
        for x in [110.0, 120.0, 130.0] {
            transformer
                .on_transformation(&mut shape, Point::new(x, 999.0))
                .unwrap();
        }
        assert_eq!(transformer.active_handle(), Some(HandleKind::Right));
        assert_eq!(shape.mark(), Mark::new(0.0, 0.0, 130.0, 50.0));
    }

    #[test]
    fn end_releases_latch() {
        let mut transformer = Transformer::default();
        let mut shape = shape();
        transformer.start_transformation(&shape, Point::new(50.0, 50.0));
        assert_eq!(transformer.end_transformation(), Some(HandleKind::Bottom));
        assert_eq!(transformer.end_transformation(), None);
        assert!(transformer.on_transformation(&mut shape, Point::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn paint_fills_eight_nodes_and_restores() {
        let transformer = Transformer::default();
        let mut surface = RecordingSurface::default();
        transformer.paint(&shape(), &mut surface, |mark| mark);

        assert_eq!(surface.ops.len(), 11);
        assert_eq!(surface.ops[0], Op::Save);
        assert_eq!(
            surface.ops[1],
            Op::SetFill(theme::handle::FILL.to_rgba8())
        );
        assert_eq!(surface.ops[10], Op::Restore);

        let fills: Vec<Rect> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill(rect) => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(fills.len(), 8);
        for rect in &fills {
            assert_eq!(rect.width(), 10.0);
            assert_eq!(rect.height(), 10.0);
        }
        assert_eq!(fills[0], Rect::new(-5.0, -5.0, 5.0, 5.0));
        assert_eq!(fills[7], Rect::new(95.0, 45.0, 105.0, 55.0));
    }

    #[test]
    fn paint_goes_through_viewport() {
        let settings = TransformerSettings::new(8.0, Color::from_rgb8(1, 2, 3)).unwrap();
        let transformer = Transformer::new(settings);
        let viewport = ViewPort::new(2.0, Vec2::new(100.0, 0.0));
        let mut surface = RecordingSurface::default();

        transformer.paint(&shape(), &mut surface, |mark| viewport.to_screen_mark(mark));

        assert_eq!(surface.ops[1], Op::SetFill(Rgba8 { r: 1, g: 2, b: 3, a: 255 }));
        let Op::Fill(first) = surface.ops[2] else {
            panic!("expected a fill, got {:?}", surface.ops[2]);
        };
        // Node {-4, -4, 8, 8} scaled by 2 and shifted 100 px right.
        assert_eq!(first, Rect::new(92.0, -8.0, 108.0, 8.0));
        assert_eq!(first.width(), 16.0);
    }

    #[test]
    fn paint_does_not_touch_the_model() {
        let mut transformer = Transformer::default();
        let shape = shape();
        transformer.start_transformation(&shape, Point::new(0.0, 0.0));
        let mut surface = RecordingSurface::default();
        transformer.paint(&shape, &mut surface, |mark| mark);
        assert_eq!(shape.mark(), Mark::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(transformer.active_handle(), Some(HandleKind::TopLeft));
    }
}
