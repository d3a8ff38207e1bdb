// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing surfaces for handle painting

mod scene;

pub use scene::SceneSurface;

use kurbo::Rect;
use peniko::Color;

/// The minimal 2D surface handles are painted onto.
///
/// Coordinates passed to `fill_rect` are already in drawable
/// (post-transform) space.
pub trait Surface {
    /// Push the current paint state.
    fn save(&mut self);

    /// Pop back to the last saved paint state.
    fn restore(&mut self);

    /// Set the color used by subsequent fills.
    fn set_fill_color(&mut self, color: Color);

    /// Fill an axis-aligned rectangle with the current fill color.
    fn fill_rect(&mut self, rect: Rect);
}
