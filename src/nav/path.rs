// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::grid::{GridGraph, GridPoint};

const NO_PARENT: u32 = u32::MAX;

/// Reusable BFS bookkeeping.
///
/// `queue` doubles as the list of touched nodes, so `reset` clears exactly
/// the entries a search dirtied. Resetting after every search is a
/// post-condition of [`find_path`], not an optional cleanup: stale
/// `visited`/`parent` values would silently corrupt the next query.
#[derive(Debug, Clone, Default)]
pub(crate) struct PathScratch {
    visited: Vec<bool>,
    parent: Vec<u32>,
    queue: Vec<u32>,
    queue_head: usize,
}

impl PathScratch {
    fn ensure_len(&mut self, len: usize) {
        if self.visited.len() < len {
            self.visited.resize(len, false);
            self.parent.resize(len, NO_PARENT);
        }
    }

    fn reset(&mut self) {
        for &idx in &self.queue {
            self.visited[idx as usize] = false;
            self.parent[idx as usize] = NO_PARENT;
        }
        self.queue.clear();
        self.queue_head = 0;
    }

    #[cfg(test)]
    pub(crate) fn is_clear(&self) -> bool {
        self.queue.is_empty()
            && self.queue_head == 0
            && self.visited.iter().all(|visited| !visited)
            && self.parent.iter().all(|&parent| parent == NO_PARENT)
    }
}

/// Breadth-first shortest path over the grid adjacency.
///
/// Neighbours are marked visited and get their parent recorded the moment
/// they are enqueued, so every node enters the queue at most once and the
/// first hit on the destination is a minimum-hop path. Ties resolve by the
/// grid's stable first-linked neighbour order. Returns the path in
/// source-to-destination order, or `None` when the endpoints lie in
/// disconnected components.
pub(crate) fn find_path(
    grid: &GridGraph,
    source: GridPoint,
    destination: GridPoint,
    scratch: &mut PathScratch,
) -> Option<Vec<GridPoint>> {
    debug_assert!(grid.contains(source) && grid.contains(destination));

    scratch.ensure_len(grid.node_count());
    let start = grid.idx_of(source) as u32;
    let goal = grid.idx_of(destination) as u32;

    scratch.visited[start as usize] = true;
    scratch.queue.push(start);

    let mut found = false;
    while let Some(&current) = scratch.queue.get(scratch.queue_head) {
        scratch.queue_head += 1;
        if current == goal {
            found = true;
            break;
        }
        for &next in grid.neighbour_indices(current as usize) {
            if !scratch.visited[next as usize] {
                scratch.visited[next as usize] = true;
                scratch.parent[next as usize] = current;
                scratch.queue.push(next);
            }
        }
    }

    let path = found.then(|| {
        let mut points = Vec::new();
        let mut cursor = goal;
        loop {
            points.push(grid.point_of(cursor as usize));
            if cursor == start {
                break;
            }
            cursor = scratch.parent[cursor as usize];
        }
        points.reverse();
        points
    });

    scratch.reset();
    path
}

#[cfg(test)]
mod tests {
    use super::{find_path, PathScratch};
    use crate::grid::{Connection, GridGraph, GridPoint};

    fn gp(x: u32, y: u32) -> GridPoint {
        GridPoint::new(x, y)
    }

    fn ring_grid() -> GridGraph {
        let mut grid = GridGraph::new(3, 3).expect("grid");
        grid.add_connections(&[
            Connection::from((0, 0, 2, 0)),
            Connection::from((0, 0, 0, 2)),
            Connection::from((0, 2, 2, 2)),
            Connection::from((2, 0, 2, 2)),
        ])
        .expect("ring");
        grid
    }

    #[test]
    fn finds_a_minimum_hop_path_between_corners() {
        let grid = ring_grid();
        let mut scratch = PathScratch::default();

        let path = find_path(&grid, gp(0, 0), gp(2, 2), &mut scratch).expect("path");
        assert_eq!(path.first(), Some(&gp(0, 0)));
        assert_eq!(path.last(), Some(&gp(2, 2)));
        // Both ways around the ring take four hops.
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn source_equal_to_destination_yields_a_single_point() {
        let grid = ring_grid();
        let mut scratch = PathScratch::default();

        let path = find_path(&grid, gp(1, 0), gp(1, 0), &mut scratch).expect("path");
        assert_eq!(path, vec![gp(1, 0)]);
        assert!(scratch.is_clear());
    }

    #[test]
    fn disconnected_components_yield_no_path() {
        let mut grid = GridGraph::new(4, 1).expect("grid");
        grid.add_connection(Connection::from((0, 0, 1, 0))).expect("left island");
        grid.add_connection(Connection::from((2, 0, 3, 0))).expect("right island");
        let mut scratch = PathScratch::default();

        assert_eq!(find_path(&grid, gp(0, 0), gp(3, 0), &mut scratch), None);
        assert!(scratch.is_clear());
    }

    #[test]
    fn scratch_is_reset_after_success_and_failure() {
        let grid = ring_grid();
        let mut scratch = PathScratch::default();

        let first = find_path(&grid, gp(0, 0), gp(2, 2), &mut scratch).expect("path");
        assert!(scratch.is_clear());

        let second = find_path(&grid, gp(0, 0), gp(2, 2), &mut scratch).expect("path");
        assert_eq!(first, second);
        assert!(scratch.is_clear());

        let mut islands = GridGraph::new(4, 1).expect("grid");
        islands.add_connection(Connection::from((0, 0, 1, 0))).expect("island");
        assert_eq!(find_path(&islands, gp(0, 0), gp(3, 0), &mut scratch), None);
        assert!(scratch.is_clear());

        let third = find_path(&grid, gp(0, 0), gp(2, 2), &mut scratch).expect("path");
        assert_eq!(first, third);
    }

    #[test]
    fn ties_follow_first_linked_neighbour_order() {
        // Fully connected 3x3: rows linked before columns, so the BFS
        // prefers stepping along rows first.
        let mut grid = GridGraph::new(3, 3).expect("grid");
        for y in 0..3u32 {
            grid.add_connection(Connection::from((0, y, 2, y))).expect("row");
        }
        for x in 0..3u32 {
            grid.add_connection(Connection::from((x, 0, x, 2))).expect("column");
        }
        let mut scratch = PathScratch::default();

        let path = find_path(&grid, gp(0, 0), gp(2, 2), &mut scratch).expect("path");
        assert_eq!(path.len(), 5);
        let repeat = find_path(&grid, gp(0, 0), gp(2, 2), &mut scratch).expect("path");
        assert_eq!(path, repeat);
    }
}
