// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galatea — embeddable schematic map core (grid graph + places + labels +
//! navigation).
//!
//! The crate is headless: it owns the spatial model and answers queries,
//! while the presentation layer renders and feeds user events back in
//! through [`map::SchematicMap`].

pub mod grid;
pub mod layout;
pub mod map;
pub mod model;
pub mod nav;
pub mod query;

pub use map::SchematicMap;
