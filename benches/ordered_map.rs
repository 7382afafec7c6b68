use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flight_index::flight::{FlightIndex, Key};
use flight_index::ordered_map::OrderedMap;
use rand::Rng;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 1_000;

fn bench_btreemap_insert(c: &mut Criterion) {
    c.bench_function("bench btreemap insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = BTreeMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                let val = rng.next_u32();

                map.insert(key, val);
            }
        })
    });
}

fn bench_btreemap_range(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = BTreeMap::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        let val = rng.next_u32();

        map.insert(key, val);
    }

    c.bench_function("bench btreemap range", move |b| {
        b.iter(|| {
            for low in (0..u32::max_value() - (1 << 24)).step_by(1 << 28) {
                black_box(map.range(low..low + (1 << 24)).count());
            }
        })
    });
}

fn bench_ordered_map_insert(c: &mut Criterion) {
    c.bench_function("bench ordered map insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = OrderedMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                let val = rng.next_u32();

                map.insert(key, val);
            }
        })
    });
}

fn bench_ordered_map_get(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = OrderedMap::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        let val = rng.next_u32();

        map.insert(key, val);
        values.push(key);
    }

    c.bench_function("bench ordered map get", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_ordered_map_range(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = OrderedMap::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        let val = rng.next_u32();

        map.insert(key, val);
    }

    c.bench_function("bench ordered map range", move |b| {
        b.iter(|| {
            for low in (0..u32::max_value() - (1 << 24)).step_by(1 << 28) {
                black_box(map.range(&low, &(low + (1 << 24))).count());
            }
        })
    });
}

fn bench_flight_index_query_route(c: &mut Criterion) {
    let airports = ["A", "B", "C", "D", "E", "F", "G", "H"];
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut index = FlightIndex::new();
    for id in 0..NUM_OF_OPERATIONS {
        let key = Key::new(
            airports[rng.gen_range(0, airports.len())],
            airports[rng.gen_range(0, airports.len())],
            rng.gen_range(1, 366),
            rng.gen_range(0, 2400),
        );
        black_box(index.insert(key, id).is_ok());
    }

    c.bench_function("bench flight index query route", move |b| {
        b.iter(|| {
            for origin in airports.iter() {
                black_box(index.query_route(origin, "D").len());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreemap_insert,
    bench_btreemap_range,
    bench_ordered_map_insert,
    bench_ordered_map_get,
    bench_ordered_map_range,
    bench_flight_index_query_route,
);
criterion_main!(benches);
