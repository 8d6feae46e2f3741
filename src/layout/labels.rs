// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;

use crate::grid::GridPoint;

/// A cell that can host one place label.
///
/// Cells use signed coordinates: the point-place fallback chain may claim
/// a cell one step left or up of the grid origin, letting a label hang off
/// the top-left edge of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelCell {
    x: i32,
    y: i32,
}

impl LabelCell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn x(self) -> i32 {
        self.x
    }

    pub const fn y(self) -> i32 {
        self.y
    }

    fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl fmt::Display for LabelCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<GridPoint> for LabelCell {
    fn from(point: GridPoint) -> Self {
        Self { x: point.x() as i32, y: point.y() as i32 }
    }
}

/// No unclaimed cell was available near a place's anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoFreeLabelSpot {
    anchor: LabelCell,
}

impl NoFreeLabelSpot {
    pub fn anchor(&self) -> LabelCell {
        self.anchor
    }
}

impl fmt::Display for NoFreeLabelSpot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no free label spot near {}", self.anchor)
    }
}

impl std::error::Error for NoFreeLabelSpot {}

// Point-place candidates relative to the anchor: anchor, left, up, up-left.
const POINT_CANDIDATES: [(i32, i32); 4] = [(0, 0), (-1, 0), (0, -1), (-1, -1)];

/// Occupied label cells of one map instance.
///
/// Claims are first-come-first-served and permanent: the set only grows
/// within a session, so earlier labels never move under later ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelBoard {
    claimed: BTreeSet<LabelCell>,
}

impl LabelBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self, cell: LabelCell) -> bool {
        self.claimed.contains(&cell)
    }

    pub fn claimed_count(&self) -> usize {
        self.claimed.len()
    }

    /// Claims a cell for a point place's label.
    ///
    /// Candidates are tried in fixed priority order (anchor, left, up,
    /// up-left); with all four taken the call fails and claims nothing.
    pub fn claim_for_point(&mut self, anchor: GridPoint) -> Result<LabelCell, NoFreeLabelSpot> {
        let base = LabelCell::from(anchor);
        for (dx, dy) in POINT_CANDIDATES {
            let cell = base.offset(dx, dy);
            if self.claimed.insert(cell) {
                return Ok(cell);
            }
        }
        Err(NoFreeLabelSpot { anchor: base })
    }

    /// Claims a cell inside a block/line footprint's bounding box.
    ///
    /// Scans row by row (increasing x within a row, then increasing y),
    /// including one extra row below the box before giving up.
    pub fn claim_for_box(
        &mut self,
        anchor: GridPoint,
        width: u32,
        height: u32,
    ) -> Result<LabelCell, NoFreeLabelSpot> {
        let base = LabelCell::from(anchor);
        let cols = width.max(1) as i32;
        let rows = height as i32;
        for dy in 0..=rows {
            for dx in 0..cols {
                let cell = base.offset(dx, dy);
                if self.claimed.insert(cell) {
                    return Ok(cell);
                }
            }
        }
        Err(NoFreeLabelSpot { anchor: base })
    }
}
