// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Mark Handles: replay a pointer gesture against an annotation

fn main() -> anyhow::Result<()> {
    mark_handles::run()
}
