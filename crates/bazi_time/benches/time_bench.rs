use bazi_time::{calendar_to_jd, delta_t_seconds, jd_to_calendar, CivilInstant, UtcOffset};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_calendar_to_jd(c: &mut Criterion) {
    c.bench_function("calendar_to_jd", |b| {
        b.iter(|| calendar_to_jd(black_box(2024), black_box(6), black_box(15.5)))
    });
}

fn bench_jd_to_calendar(c: &mut Criterion) {
    c.bench_function("jd_to_calendar", |b| {
        b.iter(|| jd_to_calendar(black_box(2_460_477.125)))
    });
}

fn bench_delta_t(c: &mut Criterion) {
    c.bench_function("delta_t_seconds", |b| {
        b.iter(|| delta_t_seconds(black_box(2024.5)))
    });
}

fn bench_civil_instant_roundtrip(c: &mut Criterion) {
    c.bench_function("civil_instant_roundtrip", |b| {
        b.iter(|| {
            let instant = CivilInstant::from_civil(
                black_box(2024),
                black_box(6),
                black_box(15),
                black_box(13),
                black_box(30),
                black_box(0.0),
                UtcOffset::from_hm(8, 0),
            )
            .unwrap();
            black_box(instant.civil_fields())
        })
    });
}

criterion_group!(
    benches,
    bench_calendar_to_jd,
    bench_jd_to_calendar,
    bench_delta_t,
    bench_civil_instant_roundtrip
);
criterion_main!(benches);
