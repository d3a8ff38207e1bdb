// Copyright 2025 the Mark Handles Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing pointer positions against resize handles

use super::handles::{HandleKind, handle_table};
use crate::model::Mark;
use kurbo::Point;

/// Find the first handle whose hit box contains `pointer`.
///
/// Handles are scanned in `HandleKind::ALL` order, so when boxes overlap
/// (a mark smaller than `node_width`) the lowest index wins.
pub fn index_at_cursor(mark: &Mark, pointer: Point, node_width: f64) -> Option<HandleKind> {
    handle_table(mark)
        .into_iter()
        .find(|handle| handle.contains(pointer, node_width))
        .map(|handle| handle.kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODE_WIDTH: f64 = 10.0;

    #[test]
    fn exact_handle_positions_hit_their_own_index() {
        let marks = [
            Mark::new(0.0, 0.0, 100.0, 50.0),
            Mark::new(-40.0, 12.5, 33.0, 250.0),
            Mark::new(300.0, 300.0, -80.0, -60.0),
        ];
        for mark in marks {
            for kind in HandleKind::ALL {
                let hit = index_at_cursor(&mark, kind.position(&mark), NODE_WIDTH);
                assert_eq!(hit, Some(kind), "mark {mark:?}");
            }
        }
    }

    #[test]
    fn boundary_is_inclusive() {
        let mark = Mark::new(0.0, 0.0, 100.0, 50.0);
        let hit = index_at_cursor(&mark, Point::new(105.0, 55.0), NODE_WIDTH);
        assert_eq!(hit, Some(HandleKind::BottomRight));

        let hit = index_at_cursor(&mark, Point::new(-5.0, -5.0), NODE_WIDTH);
        assert_eq!(hit, Some(HandleKind::TopLeft));
    }

    #[test]
    fn just_outside_misses() {
        let mark = Mark::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(index_at_cursor(&mark, Point::new(105.5, 50.0), NODE_WIDTH), None);
        assert_eq!(index_at_cursor(&mark, Point::new(50.0, 5.5), NODE_WIDTH), None);
    }

    #[test]
    fn interior_and_far_points_miss() {
        let mark = Mark::new(0.0, 0.0, 100.0, 50.0);
        for p in [
            Point::new(50.0, 25.0),
            Point::new(25.0, 10.0),
            Point::new(-100.0, -100.0),
            Point::new(500.0, 25.0),
        ] {
            assert_eq!(index_at_cursor(&mark, p, NODE_WIDTH), None, "{p:?}");
        }
    }

    #[test]
    fn overlap_resolves_to_lowest_index() {
        // Narrower than a node: top-left, top and top-right boxes overlap.
        let mark = Mark::new(0.0, 0.0, 4.0, 100.0);
        let hit = index_at_cursor(&mark, Point::new(4.0, 0.0), NODE_WIDTH);
        assert_eq!(hit, Some(HandleKind::TopLeft));

        // Past the top-left box, still inside top and top-right.
        let hit = index_at_cursor(&mark, Point::new(6.5, 0.0), NODE_WIDTH);
        assert_eq!(hit, Some(HandleKind::Top));

        let hit = index_at_cursor(&mark, Point::new(9.0, 0.0), NODE_WIDTH);
        assert_eq!(hit, Some(HandleKind::TopRight));
    }

    #[test]
    fn degenerate_mark_always_picks_top_left() {
        let mark = Mark::new(20.0, 20.0, 0.0, 0.0);
        assert_eq!(
            index_at_cursor(&mark, Point::new(22.0, 18.0), NODE_WIDTH),
            Some(HandleKind::TopLeft)
        );
    }
}
