// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::grid::GridGraph;
use crate::layout::NoFreeLabelSpot;

use super::kind::{Category, PlaceKind, UnknownPlaceKindError};
use super::place::{normalize_segment, Place};
use super::place_ref::PlaceAnchor;

/// Why a place registration was refused.
///
/// Registration is all-or-nothing: when any variant is returned, neither
/// the registry nor the label board has changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    UnknownKind(UnknownPlaceKindError),
    KindCategoryMismatch { kind: PlaceKind, variant: Category },
    OutOfBounds { x: u32, y: u32 },
    InvalidPlacement { x: u32, y: u32, width: u32, height: u32 },
    NotAxisAligned { x1: u32, y1: u32, x2: u32, y2: u32 },
    NoLabelSpotFound(NoFreeLabelSpot),
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(err) => write!(f, "{err}"),
            Self::KindCategoryMismatch { kind, variant } => {
                write!(
                    f,
                    "kind '{kind}' belongs to category '{}' and cannot be registered as a {variant} place",
                    kind.category()
                )
            }
            Self::OutOfBounds { x, y } => {
                write!(f, "coordinate ({x}, {y}) is outside the grid")
            }
            Self::InvalidPlacement { x, y, width, height } => {
                write!(
                    f,
                    "block footprint (x={x}, y={y}, width={width}, height={height}) does not fit the grid"
                )
            }
            Self::NotAxisAligned { x1, y1, x2, y2 } => {
                write!(f, "segment ({x1}, {y1}) -> ({x2}, {y2}) is not axis-aligned")
            }
            Self::NoLabelSpotFound(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RegisterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownKind(err) => Some(err),
            Self::NoLabelSpotFound(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UnknownPlaceKindError> for RegisterError {
    fn from(err: UnknownPlaceKindError) -> Self {
        Self::UnknownKind(err)
    }
}

impl From<NoFreeLabelSpot> for RegisterError {
    fn from(err: NoFreeLabelSpot) -> Self {
        Self::NoLabelSpotFound(err)
    }
}

fn check_category(kind: PlaceKind, variant: Category) -> Result<(), RegisterError> {
    if kind.category() != variant {
        return Err(RegisterError::KindCategoryMismatch { kind, variant });
    }
    Ok(())
}

fn check_in_bounds(grid: &GridGraph, x: u32, y: u32) -> Result<(), RegisterError> {
    if x >= grid.width() || y >= grid.height() {
        return Err(RegisterError::OutOfBounds { x, y });
    }
    Ok(())
}

/// Validates a block placement: anchor on the grid, sizes at least one
/// cell, and the footprint `[x, x+width) x [y, y+height)` inside the cell
/// space (one less than the node lattice in each direction).
pub(crate) fn validate_block(
    grid: &GridGraph,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    kind: PlaceKind,
) -> Result<(), RegisterError> {
    check_category(kind, Category::Area)?;
    check_in_bounds(grid, x, y)?;
    let fits_x = width >= 1 && x as u64 + (width as u64) < grid.width() as u64;
    let fits_y = height >= 1 && y as u64 + (height as u64) < grid.height() as u64;
    if !fits_x || !fits_y {
        return Err(RegisterError::InvalidPlacement { x, y, width, height });
    }
    Ok(())
}

/// Validates a line placement and returns the normalized endpoints.
pub(crate) fn validate_line(
    grid: &GridGraph,
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
    kind: PlaceKind,
) -> Result<((u32, u32), (u32, u32)), RegisterError> {
    check_category(kind, Category::Segment)?;
    check_in_bounds(grid, x1, y1)?;
    check_in_bounds(grid, x2, y2)?;
    if x1 != x2 && y1 != y2 {
        return Err(RegisterError::NotAxisAligned { x1, y1, x2, y2 });
    }
    Ok(normalize_segment((x1, y1), (x2, y2)))
}

pub(crate) fn validate_node(
    grid: &GridGraph,
    x: u32,
    y: u32,
    kind: PlaceKind,
) -> Result<(), RegisterError> {
    check_category(kind, Category::Point)?;
    check_in_bounds(grid, x, y)
}

/// Append-only store of registered places.
///
/// Places live in one list per category; `all` iterates blocks, then
/// lines, then nodes, each in insertion order, which is the order every
/// projection (distinct kinds/names, id sets) reports in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceRegistry {
    blocks: Vec<Place>,
    lines: Vec<Place>,
    nodes: Vec<Place>,
}

impl PlaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len() + self.lines.len() + self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn blocks(&self) -> &[Place] {
        &self.blocks
    }

    pub fn lines(&self) -> &[Place] {
        &self.lines
    }

    pub fn nodes(&self) -> &[Place] {
        &self.nodes
    }

    /// Every place: blocks, then lines, then nodes, in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Place> {
        self.blocks.iter().chain(self.lines.iter()).chain(self.nodes.iter())
    }

    /// Finds the first place whose anchor matches (coincident places of
    /// the same variant share an id; the earliest registration wins).
    pub fn find(&self, anchor: PlaceAnchor) -> Option<&Place> {
        let list = match anchor {
            PlaceAnchor::Block { .. } => &self.blocks,
            PlaceAnchor::Line { .. } => &self.lines,
            PlaceAnchor::Node { .. } => &self.nodes,
        };
        list.iter().find(|place| place.anchor() == anchor)
    }

    pub(crate) fn push(&mut self, place: Place) {
        let list = match place {
            Place::Block(_) => &mut self.blocks,
            Place::Line(_) => &mut self.lines,
            Place::Node(_) => &mut self.nodes,
        };
        list.push(place);
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_block, validate_line, validate_node, PlaceRegistry, RegisterError};
    use crate::grid::GridGraph;
    use crate::layout::LabelCell;
    use crate::model::kind::{Category, PlaceKind};
    use crate::model::place::{BlockPlace, NodePlace, Place};
    use crate::model::place_ref::PlaceAnchor;

    fn grid() -> GridGraph {
        GridGraph::new(10, 5).expect("grid")
    }

    #[test]
    fn block_footprint_must_fit_the_cell_space() {
        let grid = grid();

        assert_eq!(validate_block(&grid, 4, 2, 1, 2, PlaceKind::Park), Ok(()));
        // The rightmost cell column is width - 2.
        assert_eq!(validate_block(&grid, 8, 0, 1, 1, PlaceKind::Park), Ok(()));
        assert_eq!(
            validate_block(&grid, 9, 0, 1, 1, PlaceKind::Park),
            Err(RegisterError::InvalidPlacement { x: 9, y: 0, width: 1, height: 1 })
        );
        assert_eq!(
            validate_block(&grid, 4, 2, 0, 1, PlaceKind::Park),
            Err(RegisterError::InvalidPlacement { x: 4, y: 2, width: 0, height: 1 })
        );
        assert_eq!(
            validate_block(&grid, 10, 2, 1, 1, PlaceKind::Park),
            Err(RegisterError::OutOfBounds { x: 10, y: 2 })
        );
    }

    #[test]
    fn kind_category_must_match_the_variant() {
        let grid = grid();

        assert_eq!(
            validate_line(&grid, 0, 0, 8, 0, PlaceKind::Park),
            Err(RegisterError::KindCategoryMismatch {
                kind: PlaceKind::Park,
                variant: Category::Segment,
            })
        );
        assert_eq!(
            validate_node(&grid, 3, 2, PlaceKind::Street),
            Err(RegisterError::KindCategoryMismatch {
                kind: PlaceKind::Street,
                variant: Category::Point,
            })
        );
        assert_eq!(
            validate_block(&grid, 0, 0, 1, 1, PlaceKind::Poi),
            Err(RegisterError::KindCategoryMismatch {
                kind: PlaceKind::Poi,
                variant: Category::Area,
            })
        );
    }

    #[test]
    fn line_validation_normalizes_and_rejects_diagonals() {
        let grid = grid();

        assert_eq!(
            validate_line(&grid, 3, 4, 3, 0, PlaceKind::TransitLine),
            Ok(((3, 0), (3, 4)))
        );
        assert_eq!(
            validate_line(&grid, 0, 0, 2, 2, PlaceKind::Street),
            Err(RegisterError::NotAxisAligned { x1: 0, y1: 0, x2: 2, y2: 2 })
        );
        assert_eq!(
            validate_line(&grid, 0, 0, 9, 9, PlaceKind::Street),
            Err(RegisterError::OutOfBounds { x: 9, y: 9 })
        );
    }

    #[test]
    fn registry_iterates_blocks_then_lines_then_nodes() {
        let mut registry = PlaceRegistry::new();
        let label = LabelCell::new(0, 0);

        registry.push(Place::Node(NodePlace::new(
            3,
            2,
            PlaceKind::Poi,
            "Station",
            None,
            label,
        )));
        registry.push(Place::Block(BlockPlace::new(
            0,
            0,
            1,
            1,
            PlaceKind::Park,
            "North Park",
            None,
            label,
        )));

        let names: Vec<_> = registry.all().map(|place| place.name().to_owned()).collect();
        assert_eq!(names, vec!["North Park", "Station"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn find_resolves_anchors_to_the_earliest_registration() {
        let mut registry = PlaceRegistry::new();
        let label = LabelCell::new(0, 0);

        registry.push(Place::Node(NodePlace::new(1, 1, PlaceKind::Poi, "First", None, label)));
        registry.push(Place::Node(NodePlace::new(1, 1, PlaceKind::Incident, "Second", None, label)));

        let found = registry.find(PlaceAnchor::Node { x: 1, y: 1 }).expect("place");
        assert_eq!(found.name(), "First");
        assert!(registry.find(PlaceAnchor::Node { x: 9, y: 9 }).is_none());
        assert!(registry.find(PlaceAnchor::Block { x: 1, y: 1 }).is_none());
    }
}
