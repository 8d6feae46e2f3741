// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;

use super::ids::MapId;
use super::kind::Category;

/// Variant tag plus the defining coordinates of a place id.
///
/// The coordinates are exactly the fields the place was registered with,
/// so re-deriving an anchor from a stored place always reproduces the same
/// id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlaceAnchor {
    Block { x: u32, y: u32 },
    Line { x1: u32, y1: u32, x2: u32, y2: u32 },
    Node { x: u32, y: u32 },
}

impl PlaceAnchor {
    fn tag(self) -> &'static str {
        match self {
            Self::Block { .. } => "b",
            Self::Line { .. } => "l",
            Self::Node { .. } => "n",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::Block { .. } => Category::Area,
            Self::Line { .. } => Category::Segment,
            Self::Node { .. } => Category::Point,
        }
    }
}

/// Canonical stable id of a registered place.
///
/// Rendered form:
/// - block: `<map>.b.<x>.<y>`
/// - line:  `<map>.l.<x1>.<y1>.<x2>.<y2>`
/// - node:  `<map>.n.<x>.<y>`
///
/// The presentation layer uses these as element ids; the core hands them
/// back for filter/highlight sets and accepts them in selection picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceRef {
    map_id: MapId,
    anchor: PlaceAnchor,
}

impl PlaceRef {
    pub fn new(map_id: MapId, anchor: PlaceAnchor) -> Self {
        Self { map_id, anchor }
    }

    pub fn map_id(&self) -> MapId {
        self.map_id
    }

    pub fn anchor(&self) -> PlaceAnchor {
        self.anchor
    }

    pub fn category(&self) -> Category {
        self.anchor.category()
    }

    /// The canonical id text (what [`fmt::Display`] renders).
    pub fn to_smolstr(&self) -> SmolStr {
        smol_str::format_smolstr!("{self}")
    }

    pub fn parse(input: &str) -> Result<Self, ParsePlaceRefError> {
        let mut fields = input.split('.');

        let map_id = fields.next().filter(|s| !s.is_empty()).ok_or(ParsePlaceRefError::MissingMapId)?;
        let map_id =
            MapId::new(map_id.parse::<u64>().map_err(ParsePlaceRefError::InvalidMapId)?);

        let tag = fields.next().ok_or(ParsePlaceRefError::MissingTag)?;

        let mut coords = [0u32; 4];
        let mut count = 0usize;
        for field in fields {
            if count == coords.len() {
                return Err(ParsePlaceRefError::TrailingInput);
            }
            coords[count] =
                field.parse::<u32>().map_err(ParsePlaceRefError::InvalidCoordinate)?;
            count += 1;
        }

        let anchor = match (tag, count) {
            ("b", 2) => PlaceAnchor::Block { x: coords[0], y: coords[1] },
            ("n", 2) => PlaceAnchor::Node { x: coords[0], y: coords[1] },
            ("l", 4) => PlaceAnchor::Line {
                x1: coords[0],
                y1: coords[1],
                x2: coords[2],
                y2: coords[3],
            },
            ("b" | "n", c) if c < 2 => return Err(ParsePlaceRefError::MissingCoordinate),
            ("l", c) if c < 4 => return Err(ParsePlaceRefError::MissingCoordinate),
            ("b" | "n", _) => return Err(ParsePlaceRefError::TrailingInput),
            (other, _) => return Err(ParsePlaceRefError::UnknownTag(other.to_owned())),
        };

        Ok(Self { map_id, anchor })
    }
}

impl fmt::Display for PlaceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.map_id, self.anchor.tag())?;
        match self.anchor {
            PlaceAnchor::Block { x, y } | PlaceAnchor::Node { x, y } => write!(f, ".{x}.{y}"),
            PlaceAnchor::Line { x1, y1, x2, y2 } => write!(f, ".{x1}.{y1}.{x2}.{y2}"),
        }
    }
}

impl FromStr for PlaceRef {
    type Err = ParsePlaceRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for PlaceRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlaceRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePlaceRefError {
    MissingMapId,
    InvalidMapId(std::num::ParseIntError),
    MissingTag,
    UnknownTag(String),
    MissingCoordinate,
    InvalidCoordinate(std::num::ParseIntError),
    TrailingInput,
}

impl fmt::Display for ParsePlaceRefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMapId => f.write_str("place id is missing its map id"),
            Self::InvalidMapId(err) => write!(f, "invalid map id: {err}"),
            Self::MissingTag => f.write_str("place id is missing its variant tag"),
            Self::UnknownTag(tag) => write!(f, "unknown place variant tag '{tag}'"),
            Self::MissingCoordinate => f.write_str("place id is missing coordinates"),
            Self::InvalidCoordinate(err) => write!(f, "invalid coordinate: {err}"),
            Self::TrailingInput => f.write_str("place id has trailing fields"),
        }
    }
}

impl std::error::Error for ParsePlaceRefError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidMapId(err) | Self::InvalidCoordinate(err) => Some(err),
            _ => None,
        }
    }
}
