use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use varcond::{var_cond, var_cond_sweep, Displacement, FieldView};

fn make_field(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for r in 0..height {
        for c in 0..width {
            let value = ((c * 13) ^ (r * 7) ^ (c * r)) & 0xFF;
            data.push(value as u8);
        }
    }
    data
}

fn bench_descriptor(c: &mut Criterion) {
    let width = 512;
    let height = 512;
    let data = make_field(width, height);
    let field = FieldView::from_slice(&data, width, height).unwrap();

    c.bench_function("var_cond_right_neighbor", |b| {
        b.iter(|| black_box(var_cond(field, Displacement::new(1, 0)).unwrap()));
    });

    c.bench_function("var_cond_long_offset", |b| {
        b.iter(|| black_box(var_cond(field, Displacement::new(-7, 11)).unwrap()));
    });

    let bank: Vec<Displacement> = (-2..=2)
        .flat_map(|dy| (-2..=2).map(move |dx| Displacement::new(dx, dy)))
        .collect();
    c.bench_function("var_cond_sweep_25", |b| {
        b.iter(|| black_box(var_cond_sweep(field, &bank).unwrap()));
    });
}

criterion_group!(benches, bench_descriptor);
criterion_main!(benches);
