// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! `Surface` over a vello `Scene`.
//!
//! A scene has no notion of a current fill style, so this adapter keeps
//! one, along with a stack for `save`/`restore`.

use super::Surface;
use kurbo::{Affine, Rect};
use masonry::vello::Scene;
use peniko::{Brush, Color, Fill};

/// Paints into a vello scene, optionally through a fixed transform.
pub struct SceneSurface<'a> {
    scene: &'a mut Scene,
    transform: Affine,
    fill: Color,
    saved: Vec<Color>,
}

impl<'a> SceneSurface<'a> {
    pub fn new(scene: &'a mut Scene) -> Self {
        Self::with_transform(scene, Affine::IDENTITY)
    }

    /// Apply `transform` to every filled rectangle, e.g. a widget's
    /// window offset.
    pub fn with_transform(scene: &'a mut Scene, transform: Affine) -> Self {
        Self {
            scene,
            transform,
            fill: Color::BLACK,
            saved: Vec::new(),
        }
    }

    /// Current fill color.
    #[cfg(test)]
    fn fill_color(&self) -> Color {
        self.fill
    }

    /// Number of outstanding `save` calls.
    #[cfg(test)]
    fn depth(&self) -> usize {
        self.saved.len()
    }
}

impl Surface for SceneSurface<'_> {
    fn save(&mut self) {
        self.saved.push(self.fill);
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(fill) => self.fill = fill,
            None => tracing::warn!("SceneSurface::restore without matching save"),
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        let brush = Brush::Solid(self.fill);
        // Inverted marks hand us flipped rects.
        self.scene
            .fill(Fill::NonZero, self.transform, &brush, None, &rect.abs());
    }
}
