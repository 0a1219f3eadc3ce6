//! Performance benchmarks for the Availability & Pricing Engine.
//!
//! This benchmark suite verifies that the calendar core stays responsive
//! at realistic hostel scale: a season of bookings across a few hundred
//! beds, conflict checks on every form edit, and quotes over long stays
//! with a large override set.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use booking_engine::calendar::{
    CalendarIndex, bar_geometry, check_conflict, occupancy_for_window, quote_stay,
};
use booking_engine::models::{
    DailyRateOverride, Reservation, ReservationStatus, Resource, ResourceKey, RoomKind,
    VisibleWindow,
};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn day(offset: u64) -> NaiveDate {
    base_date() + Days::new(offset)
}

/// Spreads `count` four-night stays across `beds` dorm beds over a year.
fn seed_reservations(count: usize, beds: i64) -> Vec<Reservation> {
    (0..count)
        .map(|i| {
            let start = (i as u64 * 5) % 360;
            Reservation {
                id: Uuid::new_v4(),
                room_id: 2,
                bed_id: Some((i as i64 % beds) + 200),
                check_in: day(start),
                check_out: day(start + 4),
                status: ReservationStatus::Confirmed,
                total_amount: Decimal::new(11400, 2),
                paid_amount: Decimal::ZERO,
                guest_name: format!("Guest {i}"),
            }
        })
        .collect()
}

fn seed_overrides(count: usize) -> Vec<DailyRateOverride> {
    (0..count)
        .map(|i| DailyRateOverride {
            room_id: 2,
            date: day(i as u64 % 365),
            price: Decimal::new(4000 + (i as i64 % 1000), 2),
        })
        .collect()
}

fn bed_resource() -> Resource {
    Resource {
        room_id: 2,
        bed_id: Some(203),
        default_nightly_rate: Decimal::new(2850, 2),
        kind: RoomKind::Dorm,
    }
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    for size in [100, 1_000, 10_000] {
        let reservations = seed_reservations(size, 200);
        let overrides = seed_overrides(365);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| CalendarIndex::build(black_box(&reservations), &[], black_box(&overrides)));
        });
    }
    group.finish();
}

fn bench_conflict_check(c: &mut Criterion) {
    let reservations = seed_reservations(10_000, 200);
    let index = CalendarIndex::build(&reservations, &[], &[]);

    c.bench_function("conflict_check_10k_reservations", |b| {
        b.iter(|| {
            check_conflict(
                black_box(ResourceKey::Bed(203)),
                day(100),
                day(104),
                &index,
                None,
            )
        });
    });
}

fn bench_quote_stay(c: &mut Criterion) {
    let overrides = seed_overrides(365);
    let index = CalendarIndex::build(&[], &[], &overrides);
    let resource = bed_resource();

    let mut group = c.benchmark_group("quote_stay");
    for nights in [2u64, 30, 365] {
        group.bench_with_input(BenchmarkId::from_parameter(nights), &nights, |b, &nights| {
            b.iter(|| quote_stay(black_box(&resource), day(0), day(nights), &index));
        });
    }
    group.finish();
}

fn bench_bar_geometry(c: &mut Criterion) {
    let window = VisibleWindow {
        start: base_date(),
        days: 90,
    };

    c.bench_function("bar_geometry_window_sweep", |b| {
        b.iter(|| {
            for offset in 0..100u64 {
                black_box(bar_geometry(day(offset), day(offset + 4), &window, 120.0));
            }
        });
    });
}

fn bench_occupancy(c: &mut Criterion) {
    let reservations = seed_reservations(2_000, 50);
    let index = CalendarIndex::build(&reservations, &[], &[]);
    let resources: Vec<Resource> = (0..50)
        .map(|i| Resource {
            room_id: 2,
            bed_id: Some(200 + i),
            default_nightly_rate: Decimal::new(2850, 2),
            kind: RoomKind::Dorm,
        })
        .collect();
    let window = VisibleWindow {
        start: base_date(),
        days: 90,
    };

    c.bench_function("occupancy_90_days_50_beds", |b| {
        b.iter(|| occupancy_for_window(black_box(&resources), &index, &window));
    });
}

criterion_group!(
    benches,
    bench_index_build,
    bench_conflict_check,
    bench_quote_stay,
    bench_bar_geometry,
    bench_occupancy
);
criterion_main!(benches);
