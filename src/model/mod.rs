// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Annotation data model

pub mod annotation;
pub mod mark;

pub use annotation::Annotation;
pub use mark::{Mark, MarkOwner, MarkUpdate};
