// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pure projections feeding filter menus and highlight id-sets.
//!
//! Every function here is read-only over the places it is given and
//! reports in the iteration order it receives (the registry's
//! blocks-then-lines-then-nodes insertion order), so repeated calls on
//! unchanged state return identical sequences.

use smol_str::SmolStr;

use crate::model::{MapId, Place, PlaceKind, PlaceRef};

/// Ids of all places of the given kind.
pub fn refs_by_kind<'a, I>(map_id: MapId, places: I, kind: PlaceKind) -> Vec<PlaceRef>
where
    I: IntoIterator<Item = &'a Place>,
{
    places
        .into_iter()
        .filter(|place| place.kind() == kind)
        .map(|place| place.place_ref(map_id))
        .collect()
}

/// Ids of all places with the given name.
pub fn refs_by_name<'a, I>(map_id: MapId, places: I, name: &str) -> Vec<PlaceRef>
where
    I: IntoIterator<Item = &'a Place>,
{
    places
        .into_iter()
        .filter(|place| place.name() == name)
        .map(|place| place.place_ref(map_id))
        .collect()
}

/// Every kind present, in first-seen order.
pub fn distinct_kinds<'a, I>(places: I) -> Vec<PlaceKind>
where
    I: IntoIterator<Item = &'a Place>,
{
    let mut kinds = Vec::new();
    for place in places {
        if !kinds.contains(&place.kind()) {
            kinds.push(place.kind());
        }
    }
    kinds
}

/// Every name present, in first-seen order.
pub fn distinct_names<'a, I>(places: I) -> Vec<SmolStr>
where
    I: IntoIterator<Item = &'a Place>,
{
    let mut names = Vec::<SmolStr>::new();
    for place in places {
        if names.iter().all(|name| name.as_str() != place.name()) {
            names.push(SmolStr::new(place.name()));
        }
    }
    names
}
