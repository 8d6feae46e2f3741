// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The intersection lattice and the adjacency induced by registered
//! connections.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Integer coordinate of one intersection on the lattice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct GridPoint {
    x: u32,
    y: u32,
}

impl GridPoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub const fn x(self) -> u32 {
        self.x
    }

    pub const fn y(self) -> u32 {
        self.y
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for GridPoint {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned street segment between two intersections.
///
/// Endpoints may be given in either order; registration walks the segment
/// in ascending coordinate order either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    a: GridPoint,
    b: GridPoint,
}

impl Connection {
    pub const fn new(a: GridPoint, b: GridPoint) -> Self {
        Self { a, b }
    }

    pub const fn a(self) -> GridPoint {
        self.a
    }

    pub const fn b(self) -> GridPoint {
        self.b
    }
}

impl From<(u32, u32, u32, u32)> for Connection {
    fn from((x1, y1, x2, y2): (u32, u32, u32, u32)) -> Self {
        Self { a: GridPoint::new(x1, y1), b: GridPoint::new(x2, y2) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    InvalidDimension { width: u32, height: u32 },
    OutOfBounds { point: GridPoint, width: u32, height: u32 },
    NotAxisAligned { connection: Connection },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "grid dimensions must be positive (width={width}, height={height})")
            }
            Self::OutOfBounds { point, width, height } => {
                write!(f, "point {point} is outside the {width}x{height} grid")
            }
            Self::NotAxisAligned { connection } => {
                write!(
                    f,
                    "connection {} -> {} is not axis-aligned",
                    connection.a(),
                    connection.b()
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Failure of an atomic batch registration.
///
/// Nothing is linked unless every entry validates; `index` points at the
/// first offending entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionBatchError {
    index: usize,
    source: GridError,
}

impl ConnectionBatchError {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn grid_error(&self) -> &GridError {
        &self.source
    }
}

impl fmt::Display for ConnectionBatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connection {}: {}", self.index, self.source)
    }
}

impl std::error::Error for ConnectionBatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Node {
    // First-linked order; BFS tie-breaking relies on it staying stable.
    neighbours: SmallVec<[u32; 4]>,
}

/// The lattice of intersections plus the adjacency built from registered
/// connections.
///
/// Dimensions are fixed at construction. Adjacency is a set: linking the
/// same edge twice (e.g. two overlapping connections) is a no-op, and
/// nodes are never exposed for direct mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGraph {
    width: u32,
    height: u32,
    nodes: Vec<Node>,
}

impl GridGraph {
    /// Creates a `width x height` lattice with empty adjacency.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        // Node indices are stored as u32 in the adjacency lists.
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|len| *len <= u32::MAX as usize)
            .ok_or(GridError::InvalidDimension { width, height })?;
        Ok(Self { width, height, nodes: vec![Node::default(); len] })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        point.x < self.width && point.y < self.height
    }

    pub(crate) fn idx_of(&self, point: GridPoint) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }

    pub(crate) fn point_of(&self, idx: usize) -> GridPoint {
        GridPoint::new((idx % self.width as usize) as u32, (idx / self.width as usize) as u32)
    }

    pub(crate) fn neighbour_indices(&self, idx: usize) -> &[u32] {
        &self.nodes[idx].neighbours
    }

    /// Neighbours of `point` in first-linked order; empty for points
    /// outside the grid.
    pub fn neighbours(&self, point: GridPoint) -> impl Iterator<Item = GridPoint> + '_ {
        let indices: &[u32] =
            if self.contains(point) { &self.nodes[self.idx_of(point)].neighbours } else { &[] };
        indices.iter().map(|&idx| self.point_of(idx as usize))
    }

    pub fn degree(&self, point: GridPoint) -> usize {
        if self.contains(point) { self.nodes[self.idx_of(point)].neighbours.len() } else { 0 }
    }

    fn check_connection(&self, connection: Connection) -> Result<(), GridError> {
        for point in [connection.a, connection.b] {
            if !self.contains(point) {
                return Err(GridError::OutOfBounds {
                    point,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        if connection.a.x != connection.b.x && connection.a.y != connection.b.y {
            return Err(GridError::NotAxisAligned { connection });
        }
        Ok(())
    }

    /// Registers one street segment, linking every consecutive node pair
    /// along it in both directions.
    pub fn add_connection(&mut self, connection: Connection) -> Result<(), GridError> {
        self.check_connection(connection)?;
        self.link_segment(connection);
        Ok(())
    }

    /// Registers a batch atomically: every entry is validated against the
    /// grid before anything is linked.
    pub fn add_connections(&mut self, connections: &[Connection]) -> Result<(), ConnectionBatchError> {
        for (index, &connection) in connections.iter().enumerate() {
            self.check_connection(connection)
                .map_err(|source| ConnectionBatchError { index, source })?;
        }
        for &connection in connections {
            self.link_segment(connection);
        }
        Ok(())
    }

    fn link_segment(&mut self, connection: Connection) {
        let (a, b) = (connection.a, connection.b);
        if a.x == b.x {
            let x = a.x;
            let (y1, y2) = (a.y.min(b.y), a.y.max(b.y));
            for y in y1..y2 {
                self.link(GridPoint::new(x, y), GridPoint::new(x, y + 1));
            }
        } else {
            let y = a.y;
            let (x1, x2) = (a.x.min(b.x), a.x.max(b.x));
            for x in x1..x2 {
                self.link(GridPoint::new(x, y), GridPoint::new(x + 1, y));
            }
        }
    }

    fn link(&mut self, p: GridPoint, q: GridPoint) {
        let i = self.idx_of(p) as u32;
        let j = self.idx_of(q) as u32;

        let node = &mut self.nodes[i as usize];
        if !node.neighbours.contains(&j) {
            node.neighbours.push(j);
        }
        let node = &mut self.nodes[j as usize];
        if !node.neighbours.contains(&i) {
            node.neighbours.push(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Connection, GridError, GridGraph, GridPoint};

    fn gp(x: u32, y: u32) -> GridPoint {
        GridPoint::new(x, y)
    }

    #[test]
    fn creates_the_full_node_lattice() {
        let grid = GridGraph::new(10, 5).expect("grid");
        assert_eq!(grid.node_count(), 50);
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.degree(gp(0, 0)), 0);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            GridGraph::new(0, 5),
            Err(GridError::InvalidDimension { width: 0, height: 5 })
        );
        assert_eq!(
            GridGraph::new(3, 0),
            Err(GridError::InvalidDimension { width: 3, height: 0 })
        );
    }

    #[test]
    fn connection_links_every_consecutive_pair() {
        let mut grid = GridGraph::new(5, 2).expect("grid");
        grid.add_connection(Connection::from((0, 0, 4, 0))).expect("connection");

        for x in 0..=4u32 {
            let neighbours: Vec<_> = grid.neighbours(gp(x, 0)).collect();
            let mut expected = Vec::new();
            if x > 0 {
                expected.push(gp(x - 1, 0));
            }
            if x < 4 {
                expected.push(gp(x + 1, 0));
            }
            for point in &expected {
                assert!(neighbours.contains(point), "({x}, 0) should reach {point}");
            }
            assert_eq!(neighbours.len(), expected.len());
        }
    }

    #[test]
    fn duplicate_connections_do_not_duplicate_adjacency() {
        let mut grid = GridGraph::new(5, 1).expect("grid");
        grid.add_connection(Connection::from((0, 0, 4, 0))).expect("first");
        grid.add_connection(Connection::from((0, 0, 4, 0))).expect("second");
        grid.add_connection(Connection::from((1, 0, 3, 0))).expect("overlap");

        assert_eq!(grid.degree(gp(0, 0)), 1);
        assert_eq!(grid.degree(gp(2, 0)), 2);
    }

    #[test]
    fn reversed_endpoints_link_the_same_segment() {
        let mut grid = GridGraph::new(2, 5).expect("grid");
        grid.add_connection(Connection::from((0, 4, 0, 0))).expect("connection");

        assert_eq!(grid.degree(gp(0, 0)), 1);
        assert_eq!(grid.degree(gp(0, 2)), 2);
        assert_eq!(grid.degree(gp(0, 4)), 1);
    }

    #[test]
    fn rejects_diagonal_connections() {
        let mut grid = GridGraph::new(4, 4).expect("grid");
        let diagonal = Connection::from((0, 0, 2, 2));
        assert_eq!(
            grid.add_connection(diagonal),
            Err(GridError::NotAxisAligned { connection: diagonal })
        );
        assert_eq!(grid.degree(gp(0, 0)), 0);
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let mut grid = GridGraph::new(4, 4).expect("grid");
        assert_eq!(
            grid.add_connection(Connection::from((0, 0, 4, 0))),
            Err(GridError::OutOfBounds { point: gp(4, 0), width: 4, height: 4 })
        );
    }

    #[test]
    fn batch_registration_is_atomic() {
        let mut grid = GridGraph::new(4, 4).expect("grid");
        let err = grid
            .add_connections(&[
                Connection::from((0, 0, 3, 0)),
                Connection::from((0, 0, 0, 3)),
                Connection::from((1, 1, 9, 1)),
            ])
            .unwrap_err();

        assert_eq!(err.index(), 2);
        assert!(matches!(err.grid_error(), GridError::OutOfBounds { .. }));
        // Nothing from the valid prefix was applied either.
        for y in 0..4u32 {
            for x in 0..4u32 {
                assert_eq!(grid.degree(gp(x, y)), 0);
            }
        }

        grid.add_connections(&[
            Connection::from((0, 0, 3, 0)),
            Connection::from((0, 0, 0, 3)),
        ])
        .expect("valid batch");
        assert_eq!(grid.degree(gp(0, 0)), 2);
    }

    #[test]
    fn neighbours_enumerate_in_first_linked_order() {
        let mut grid = GridGraph::new(3, 3).expect("grid");
        grid.add_connection(Connection::from((0, 1, 2, 1))).expect("row");
        grid.add_connection(Connection::from((1, 0, 1, 2))).expect("column");

        let neighbours: Vec<_> = grid.neighbours(gp(1, 1)).collect();
        assert_eq!(neighbours, vec![gp(0, 1), gp(2, 1), gp(1, 0), gp(1, 2)]);
    }

    #[test]
    fn neighbours_outside_the_grid_are_empty() {
        let grid = GridGraph::new(2, 2).expect("grid");
        assert_eq!(grid.neighbours(gp(5, 5)).count(), 0);
    }
}
