// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navigation: the selection state machine and shortest-path queries.

mod path;

use std::fmt;

use crate::grid::{GridGraph, GridPoint};
use crate::model::PlaceRef;

use path::{find_path, PathScratch};

/// Where the navigation flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    AwaitingSource,
    AwaitingDestination,
    /// Both endpoints are set; `navigate` can run.
    Ready,
    PathComputed,
}

/// A navigable location the presentation layer can hand to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Intersection(GridPoint),
    Place(PlaceRef),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intersection(point) => write!(f, "intersection {point}"),
            Self::Place(place_ref) => write!(f, "place {place_ref}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// The pick does not resolve to an intersection on this map.
    UnsupportedLocation { location: Location },
    MissingSourceOrDestination { has_source: bool, has_destination: bool },
    NoPathFound { source: GridPoint, destination: GridPoint },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLocation { location } => {
                write!(f, "{location} cannot be used for navigation")
            }
            Self::MissingSourceOrDestination { has_source, has_destination } => {
                match (has_source, has_destination) {
                    (false, false) => f.write_str("no source or destination selected"),
                    (false, true) => f.write_str("no source selected"),
                    (true, false) => f.write_str("no destination selected"),
                    (true, true) => f.write_str("source and destination already selected"),
                }
            }
            Self::NoPathFound { source, destination } => {
                write!(f, "no path between {source} and {destination}")
            }
        }
    }
}

impl std::error::Error for NavError {}

/// Per-map navigation engine.
///
/// Selection state and BFS scratch are owned by the instance; two maps on
/// one page never share a source, destination, or bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct NavigationEngine {
    state: SelectionState,
    source: Option<GridPoint>,
    destination: Option<GridPoint>,
    scratch: PathScratch,
}

impl NavigationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn source(&self) -> Option<GridPoint> {
        self.source
    }

    pub fn destination(&self) -> Option<GridPoint> {
        self.destination
    }

    /// Arms the source slot: the next pick becomes the source.
    pub fn begin_select_source(&mut self) {
        self.state = SelectionState::AwaitingSource;
    }

    /// Arms the destination slot: the next pick becomes the destination.
    pub fn begin_select_destination(&mut self) {
        self.state = SelectionState::AwaitingDestination;
    }

    /// Applies a resolved, bounds-checked pick to whichever slot is armed.
    ///
    /// A pick while nothing is armed is inert and returns the unchanged
    /// state.
    pub fn pick(&mut self, point: GridPoint) -> SelectionState {
        match self.state {
            SelectionState::AwaitingSource => {
                self.source = Some(point);
                self.state = if self.destination.is_some() {
                    SelectionState::Ready
                } else {
                    SelectionState::Idle
                };
            }
            SelectionState::AwaitingDestination => {
                self.destination = Some(point);
                self.state = if self.source.is_some() {
                    SelectionState::Ready
                } else {
                    SelectionState::Idle
                };
            }
            _ => {}
        }
        self.state
    }

    /// Drops both endpoints and returns to `Idle`.
    pub fn clear(&mut self) {
        self.source = None;
        self.destination = None;
        self.state = SelectionState::Idle;
    }

    /// Selection-driven path computation.
    ///
    /// Needs both endpoints; the selection is consumed whether or not a
    /// path exists (a new navigation starts from scratch either way), and
    /// the BFS bookkeeping is reset as part of every call.
    pub fn navigate(&mut self, grid: &GridGraph) -> Result<Vec<GridPoint>, NavError> {
        let (Some(source), Some(destination)) = (self.source, self.destination) else {
            return Err(NavError::MissingSourceOrDestination {
                has_source: self.source.is_some(),
                has_destination: self.destination.is_some(),
            });
        };

        self.source = None;
        self.destination = None;

        match find_path(grid, source, destination, &mut self.scratch) {
            Some(path) => {
                self.state = SelectionState::PathComputed;
                Ok(path)
            }
            None => {
                self.state = SelectionState::Idle;
                Err(NavError::NoPathFound { source, destination })
            }
        }
    }

    /// Direct shortest-path query; leaves the selection untouched.
    pub fn shortest_path(
        &mut self,
        grid: &GridGraph,
        source: GridPoint,
        destination: GridPoint,
    ) -> Result<Vec<GridPoint>, NavError> {
        for point in [source, destination] {
            if !grid.contains(point) {
                return Err(NavError::UnsupportedLocation {
                    location: Location::Intersection(point),
                });
            }
        }
        find_path(grid, source, destination, &mut self.scratch)
            .ok_or(NavError::NoPathFound { source, destination })
    }
}
