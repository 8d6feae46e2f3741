// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use crate::grid::GridPoint;
use crate::layout::LabelCell;

use super::ids::MapId;
use super::kind::{Category, PlaceKind};
use super::place_ref::{PlaceAnchor, PlaceRef};

/// An area place occupying a rectangle of cells between streets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPlace {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    kind: PlaceKind,
    name: SmolStr,
    description: Option<String>,
    label: LabelCell,
}

impl BlockPlace {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        kind: PlaceKind,
        name: impl Into<SmolStr>,
        description: Option<String>,
        label: LabelCell,
    ) -> Self {
        Self { x, y, width, height, kind, name: name.into(), description, label }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn kind(&self) -> PlaceKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn label(&self) -> LabelCell {
        self.label
    }

    pub fn anchor(&self) -> PlaceAnchor {
        PlaceAnchor::Block { x: self.x, y: self.y }
    }
}

/// A segment place lying along a street (a road, a transit line, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePlace {
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
    kind: PlaceKind,
    name: SmolStr,
    description: Option<String>,
    label: LabelCell,
}

impl LinePlace {
    /// Endpoints are stored normalized so `(x1, y1) <= (x2, y2)`; the
    /// derived id is independent of the order the caller passed them in.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        x1: u32,
        y1: u32,
        x2: u32,
        y2: u32,
        kind: PlaceKind,
        name: impl Into<SmolStr>,
        description: Option<String>,
        label: LabelCell,
    ) -> Self {
        let ((x1, y1), (x2, y2)) = normalize_segment((x1, y1), (x2, y2));
        Self { x1, y1, x2, y2, kind, name: name.into(), description, label }
    }

    pub fn x1(&self) -> u32 {
        self.x1
    }

    pub fn y1(&self) -> u32 {
        self.y1
    }

    pub fn x2(&self) -> u32 {
        self.x2
    }

    pub fn y2(&self) -> u32 {
        self.y2
    }

    pub fn kind(&self) -> PlaceKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn label(&self) -> LabelCell {
        self.label
    }

    pub fn anchor(&self) -> PlaceAnchor {
        PlaceAnchor::Line { x1: self.x1, y1: self.y1, x2: self.x2, y2: self.y2 }
    }
}

/// A point place sitting on a single intersection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePlace {
    x: u32,
    y: u32,
    kind: PlaceKind,
    name: SmolStr,
    description: Option<String>,
    label: LabelCell,
}

impl NodePlace {
    pub(crate) fn new(
        x: u32,
        y: u32,
        kind: PlaceKind,
        name: impl Into<SmolStr>,
        description: Option<String>,
        label: LabelCell,
    ) -> Self {
        Self { x, y, kind, name: name.into(), description, label }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn kind(&self) -> PlaceKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn label(&self) -> LabelCell {
        self.label
    }

    pub fn anchor(&self) -> PlaceAnchor {
        PlaceAnchor::Node { x: self.x, y: self.y }
    }
}

pub(crate) fn normalize_segment(a: (u32, u32), b: (u32, u32)) -> ((u32, u32), (u32, u32)) {
    if b < a { (b, a) } else { (a, b) }
}

/// A registered map feature, tagged by its structural variant.
///
/// Places are immutable after registration; every accessor here is a pure
/// projection over the stored fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Place {
    Block(BlockPlace),
    Line(LinePlace),
    Node(NodePlace),
}

impl Place {
    pub fn kind(&self) -> PlaceKind {
        match self {
            Self::Block(place) => place.kind(),
            Self::Line(place) => place.kind(),
            Self::Node(place) => place.kind(),
        }
    }

    /// The structural category of the variant itself (always equal to
    /// `self.kind().category()` for registered places).
    pub fn category(&self) -> Category {
        match self {
            Self::Block(_) => Category::Area,
            Self::Line(_) => Category::Segment,
            Self::Node(_) => Category::Point,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Block(place) => place.name(),
            Self::Line(place) => place.name(),
            Self::Node(place) => place.name(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Block(place) => place.description(),
            Self::Line(place) => place.description(),
            Self::Node(place) => place.description(),
        }
    }

    pub fn label(&self) -> LabelCell {
        match self {
            Self::Block(place) => place.label(),
            Self::Line(place) => place.label(),
            Self::Node(place) => place.label(),
        }
    }

    pub fn anchor(&self) -> PlaceAnchor {
        match self {
            Self::Block(place) => place.anchor(),
            Self::Line(place) => place.anchor(),
            Self::Node(place) => place.anchor(),
        }
    }

    /// Derives the place's stable id under the owning map.
    pub fn place_ref(&self, map_id: MapId) -> PlaceRef {
        PlaceRef::new(map_id, self.anchor())
    }

    /// The intersection a navigation pick resolves to.
    ///
    /// Segment places have no single anchor intersection and resolve to
    /// `None`.
    pub fn nav_anchor(&self) -> Option<GridPoint> {
        match self {
            Self::Block(place) => Some(GridPoint::new(place.x(), place.y())),
            Self::Node(place) => Some(GridPoint::new(place.x(), place.y())),
            Self::Line(_) => None,
        }
    }
}
