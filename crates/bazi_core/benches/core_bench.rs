use bazi_core::{compute, DateType, Gender, Input, TimeType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_input() -> Input {
    Input {
        date_type: DateType::Solar,
        year: 1990,
        month: 6,
        day: 15,
        is_leap_month: None,
        hour: 10,
        minute: 30,
        time_type: TimeType::Standard,
        gender: Gender::Male,
        longitude: 116.4,
        dst_confirmed: None,
        early_rat_split: true,
    }
}

fn bench_compute(c: &mut Criterion) {
    c.bench_function("compute_full_chart", |b| {
        b.iter(|| compute(black_box(sample_input())).unwrap())
    });
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
