// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// RESIZE HANDLES
// ============================================================================
const HANDLE_FILL: Color = Color::from_rgb8(0x5c, 0x7c, 0xfa);

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for resize handles
pub mod handle {
    use super::Color;
    /// Default handle fill (`#5c7cfa`)
    pub const FILL: Color = super::HANDLE_FILL;
}
