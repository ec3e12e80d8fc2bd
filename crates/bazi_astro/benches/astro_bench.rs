use bazi_astro::{apparent_solar_longitude, solar_term_instant, SolarTerm};
use bazi_time::J2000_JD;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_apparent_solar_longitude(c: &mut Criterion) {
    c.bench_function("apparent_solar_longitude", |b| {
        b.iter(|| apparent_solar_longitude(black_box(J2000_JD + 123.4)))
    });
}

fn bench_solar_term_instant(c: &mut Criterion) {
    c.bench_function("solar_term_instant", |b| {
        b.iter(|| solar_term_instant(black_box(SolarTerm::LiChun), black_box(2024)))
    });
}

criterion_group!(benches, bench_apparent_solar_longitude, bench_solar_term_instant);
criterion_main!(benches);
