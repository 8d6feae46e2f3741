// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Owner id of one map instance.
///
/// Every derived place id is prefixed with this value, so several maps
/// embedded on the same page produce non-colliding element ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapId(u64);

impl MapId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MapId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

static NEXT_MAP_ID: AtomicU64 = AtomicU64::new(0);

/// Allocates the next process-wide map id.
///
/// The counter is the only thing map instances share; it only ever hands a
/// value out once.
pub(crate) fn next_map_id() -> MapId {
    MapId(NEXT_MAP_ID.fetch_add(1, Ordering::Relaxed))
}
