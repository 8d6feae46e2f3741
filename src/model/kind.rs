// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Structural category a place kind belongs to.
///
/// The category gates which place variant a kind may be registered as:
/// areas fill blocks between streets, segments lie along a street, points
/// sit on a single intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Area,
    Segment,
    Point,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Area, Category::Segment, Category::Point];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Segment => "segment",
            Self::Point => "point",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed catalog of place kinds.
///
/// Wire strings are camelCase (`transitLine`, `specialEvent`, ...) and
/// double as the CSS class names the presentation layer styles against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceKind {
    Park,
    Building,
    Water,
    Hospital,
    Street,
    TransitLine,
    Poi,
    SpecialEvent,
    Incident,
}

impl PlaceKind {
    /// Every kind in catalog order, areas first.
    pub const ALL: [PlaceKind; 9] = [
        PlaceKind::Park,
        PlaceKind::Building,
        PlaceKind::Water,
        PlaceKind::Hospital,
        PlaceKind::Street,
        PlaceKind::TransitLine,
        PlaceKind::Poi,
        PlaceKind::SpecialEvent,
        PlaceKind::Incident,
    ];

    pub fn category(self) -> Category {
        match self {
            Self::Park | Self::Building | Self::Water | Self::Hospital => Category::Area,
            Self::Street | Self::TransitLine => Category::Segment,
            Self::Poi | Self::SpecialEvent | Self::Incident => Category::Point,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Park => "park",
            Self::Building => "building",
            Self::Water => "water",
            Self::Hospital => "hospital",
            Self::Street => "street",
            Self::TransitLine => "transitLine",
            Self::Poi => "poi",
            Self::SpecialEvent => "specialEvent",
            Self::Incident => "incident",
        }
    }
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceKind {
    type Err = UnknownPlaceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownPlaceKindError { value: s.to_owned() })
    }
}

/// The given string is not in the kind catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlaceKindError {
    value: String,
}

impl UnknownPlaceKindError {
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UnknownPlaceKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown place kind '{}'", self.value)
    }
}

impl std::error::Error for UnknownPlaceKindError {}
