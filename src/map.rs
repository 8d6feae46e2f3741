// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `SchematicMap` — the facade the presentation layer drives.
//!
//! Registration orchestration lives here: validate, then claim a label
//! spot, then append, so a failure at any step leaves no trace. The order
//! registrations are issued in is meaningful (adjacency and label claims
//! are first-come-first-served) and is applied as issued.

use smol_str::SmolStr;
use tracing::debug;

use crate::grid::{Connection, ConnectionBatchError, GridError, GridGraph, GridPoint};
use crate::layout::LabelBoard;
use crate::model::registry::{validate_block, validate_line, validate_node};
use crate::model::{
    next_map_id, BlockPlace, Category, LinePlace, MapId, NodePlace, Place, PlaceKind, PlaceRef,
    PlaceRegistry, RegisterError,
};
use crate::nav::{Location, NavError, NavigationEngine, SelectionState};
use crate::query;

/// One interactive schematic map: grid, places, label spots, and
/// navigation state. Instances share nothing but the id counter.
#[derive(Debug, Clone)]
pub struct SchematicMap {
    map_id: MapId,
    grid: GridGraph,
    places: PlaceRegistry,
    labels: LabelBoard,
    nav: NavigationEngine,
}

impl SchematicMap {
    /// Creates a map with a process-unique owner id.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::with_id(next_map_id(), width, height)
    }

    /// Creates a map with a caller-managed owner id.
    pub fn with_id(map_id: MapId, width: u32, height: u32) -> Result<Self, GridError> {
        let grid = GridGraph::new(width, height)?;
        debug!(map = %map_id, width, height, "map created");
        Ok(Self {
            map_id,
            grid,
            places: PlaceRegistry::new(),
            labels: LabelBoard::new(),
            nav: NavigationEngine::new(),
        })
    }

    pub fn map_id(&self) -> MapId {
        self.map_id
    }

    pub fn grid(&self) -> &GridGraph {
        &self.grid
    }

    pub fn places(&self) -> &PlaceRegistry {
        &self.places
    }

    pub fn labels(&self) -> &LabelBoard {
        &self.labels
    }

    pub fn selection_state(&self) -> SelectionState {
        self.nav.state()
    }

    /// Registers one street connection.
    pub fn add_connection(&mut self, connection: Connection) -> Result<(), GridError> {
        self.grid.add_connection(connection)?;
        debug!(map = %self.map_id, a = %connection.a(), b = %connection.b(), "connection added");
        Ok(())
    }

    /// Registers a batch of connections atomically.
    pub fn add_connections(
        &mut self,
        connections: &[Connection],
    ) -> Result<(), ConnectionBatchError> {
        self.grid.add_connections(connections)?;
        debug!(map = %self.map_id, count = connections.len(), "connections added");
        Ok(())
    }

    /// Registers an area place covering the cells
    /// `[x, x+width) x [y, y+height)`.
    pub fn add_block_place(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        kind: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<PlaceRef, RegisterError> {
        let kind: PlaceKind = kind.parse()?;
        validate_block(&self.grid, x, y, width, height, kind)?;
        let label = self.labels.claim_for_box(GridPoint::new(x, y), width, height)?;

        let place = Place::Block(BlockPlace::new(
            x,
            y,
            width,
            height,
            kind,
            name,
            description.map(str::to_owned),
            label,
        ));
        let place_ref = place.place_ref(self.map_id);
        self.places.push(place);
        debug!(map = %self.map_id, id = %place_ref, kind = %kind, label = %label, "block place registered");
        Ok(place_ref)
    }

    /// Registers a segment place along an axis-aligned street.
    #[allow(clippy::too_many_arguments)]
    pub fn add_line_place(
        &mut self,
        x1: u32,
        y1: u32,
        x2: u32,
        y2: u32,
        kind: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<PlaceRef, RegisterError> {
        let kind: PlaceKind = kind.parse()?;
        let ((x1, y1), (x2, y2)) = validate_line(&self.grid, x1, y1, x2, y2, kind)?;
        let label = self.labels.claim_for_box(
            GridPoint::new(x1, y1),
            x2 - x1 + 1,
            y2 - y1 + 1,
        )?;

        let place = Place::Line(LinePlace::new(
            x1,
            y1,
            x2,
            y2,
            kind,
            name,
            description.map(str::to_owned),
            label,
        ));
        let place_ref = place.place_ref(self.map_id);
        self.places.push(place);
        debug!(map = %self.map_id, id = %place_ref, kind = %kind, label = %label, "line place registered");
        Ok(place_ref)
    }

    /// Registers a point place on a single intersection.
    pub fn add_node_place(
        &mut self,
        x: u32,
        y: u32,
        kind: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<PlaceRef, RegisterError> {
        let kind: PlaceKind = kind.parse()?;
        validate_node(&self.grid, x, y, kind)?;
        let label = self.labels.claim_for_point(GridPoint::new(x, y))?;

        let place = Place::Node(NodePlace::new(
            x,
            y,
            kind,
            name,
            description.map(str::to_owned),
            label,
        ));
        let place_ref = place.place_ref(self.map_id);
        self.places.push(place);
        debug!(map = %self.map_id, id = %place_ref, kind = %kind, label = %label, "node place registered");
        Ok(place_ref)
    }

    /// Every kind present, first-seen order (filter/legend option feed).
    pub fn all_kinds(&self) -> Vec<PlaceKind> {
        query::distinct_kinds(self.places.all())
    }

    /// Every name present, first-seen order (filter option feed).
    pub fn all_names(&self) -> Vec<SmolStr> {
        query::distinct_names(self.places.all())
    }

    /// Kinds present per structural category (grouped legend feed).
    pub fn kinds_by_category(&self) -> [(Category, Vec<PlaceKind>); 3] {
        [
            (Category::Area, query::distinct_kinds(self.places.blocks())),
            (Category::Segment, query::distinct_kinds(self.places.lines())),
            (Category::Point, query::distinct_kinds(self.places.nodes())),
        ]
    }

    /// Ids of all places of the given kind; a string outside the catalog
    /// matches nothing.
    pub fn ids_by_kind(&self, kind: &str) -> Vec<PlaceRef> {
        match kind.parse::<PlaceKind>() {
            Ok(kind) => query::refs_by_kind(self.map_id, self.places.all(), kind),
            Err(_) => Vec::new(),
        }
    }

    /// Ids of all places with the given name.
    pub fn ids_by_name(&self, name: &str) -> Vec<PlaceRef> {
        query::refs_by_name(self.map_id, self.places.all(), name)
    }

    fn resolve(&self, location: &Location) -> Result<GridPoint, NavError> {
        let unsupported = || NavError::UnsupportedLocation { location: location.clone() };
        match location {
            Location::Intersection(point) => {
                if !self.grid.contains(*point) {
                    return Err(unsupported());
                }
                Ok(*point)
            }
            Location::Place(place_ref) => {
                if place_ref.map_id() != self.map_id {
                    return Err(unsupported());
                }
                let place = self.places.find(place_ref.anchor()).ok_or_else(unsupported)?;
                place.nav_anchor().ok_or_else(unsupported)
            }
        }
    }

    /// Arms the source slot for the next pick.
    pub fn begin_select_source(&mut self) {
        self.nav.begin_select_source();
    }

    /// Arms the destination slot for the next pick.
    pub fn begin_select_destination(&mut self) {
        self.nav.begin_select_destination();
    }

    /// Reports a user pick. Unsupported locations are rejected without a
    /// state transition; picks while nothing is armed are inert.
    pub fn select_location(&mut self, location: &Location) -> Result<SelectionState, NavError> {
        let point = self.resolve(location)?;
        Ok(self.nav.pick(point))
    }

    /// Drops any selection and returns the flow to `Idle`.
    pub fn clear_selection(&mut self) {
        self.nav.clear();
    }

    /// Computes the path for the current selection (then consumes it).
    pub fn navigate(&mut self) -> Result<Vec<GridPoint>, NavError> {
        let path = self.nav.navigate(&self.grid)?;
        debug!(map = %self.map_id, hops = path.len().saturating_sub(1), "path computed");
        Ok(path)
    }

    /// Shortest path between two locations; the selection flow is not
    /// involved.
    pub fn find_path(
        &mut self,
        source: &Location,
        destination: &Location,
    ) -> Result<Vec<GridPoint>, NavError> {
        let source = self.resolve(source)?;
        let destination = self.resolve(destination)?;
        self.nav.shortest_path(&self.grid, source, destination)
    }
}
