// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Handle geometry, hit testing and the transformer that drives them

pub mod handles;
pub mod hit_test;
pub mod transformer;
pub mod viewport;

pub use handles::{Handle, HandleKind, handle_table};
pub use hit_test::index_at_cursor;
pub use transformer::Transformer;
pub use viewport::ViewPort;
