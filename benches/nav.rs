// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use galatea::grid::{Connection, GridPoint};
use galatea::map::SchematicMap;
use galatea::model::MapId;
use galatea::nav::Location;

// Benchmark identity (keep stable):
// - Group names in this file: `nav.find_path`, `map.set_up`
// - Case IDs must remain stable across refactors so results stay
//   comparable over time (e.g. `campus_sparse`, `dense_64x48`).

fn campus_connections() -> Vec<Connection> {
    vec![
        Connection::from((0, 0, 8, 0)),
        Connection::from((0, 0, 0, 4)),
        Connection::from((0, 4, 8, 4)),
        Connection::from((8, 0, 8, 4)),
        Connection::from((2, 0, 2, 4)),
        Connection::from((0, 3, 8, 3)),
        Connection::from((7, 0, 7, 4)),
        Connection::from((3, 0, 3, 4)),
        Connection::from((4, 0, 4, 4)),
        Connection::from((0, 2, 8, 2)),
    ]
}

fn campus_map() -> SchematicMap {
    let mut map = SchematicMap::with_id(MapId::new(1), 10, 5).expect("map");
    map.add_connections(&campus_connections()).expect("connections");
    map
}

fn dense_map(width: u32, height: u32) -> SchematicMap {
    let mut map = SchematicMap::with_id(MapId::new(2), width, height).expect("map");
    for y in 0..height {
        map.add_connection(Connection::from((0, y, width - 1, y))).expect("row");
    }
    for x in 0..width {
        map.add_connection(Connection::from((x, 0, x, height - 1))).expect("column");
    }
    map
}

fn benches_nav(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("nav.find_path");

        let cases: Vec<(&str, SchematicMap)> =
            vec![("campus_sparse", campus_map()), ("dense_64x48", dense_map(64, 48))];

        for (case_id, mut map) in cases {
            let source = Location::Intersection(GridPoint::new(0, 0));
            let destination =
                Location::Intersection(GridPoint::new(map.grid().width() - 1, map.grid().height() - 1));

            group.throughput(Throughput::Elements(map.grid().node_count() as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let path = map
                        .find_path(black_box(&source), black_box(&destination))
                        .expect("path");
                    black_box(path.len())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("map.set_up");

        let connections = campus_connections();
        group.throughput(Throughput::Elements(connections.len() as u64));
        group.bench_function("campus", |b| {
            b.iter(|| {
                let mut map = SchematicMap::with_id(MapId::new(3), 10, 5).expect("map");
                map.add_connections(black_box(&connections)).expect("connections");
                let park = map
                    .add_block_place(4, 2, 1, 2, "park", "Central Park", None)
                    .expect("park");
                black_box(park)
            })
        });

        group.finish();
    }
}

criterion_group!(benches, benches_nav);
criterion_main!(benches);
