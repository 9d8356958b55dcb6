use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vector_math::{AngleUnit, Vector};

const DIM: usize = 64;

fn sample(offset: i64) -> Vector {
    Vector::new((0..DIM as i64).map(|i| (i * 7 + offset) % 19 - 9)).unwrap()
}

fn bench_construction(c: &mut Criterion) {
    let data: Vec<f64> = (0..DIM).map(|i| i as f64 * 0.125 - 3.0).collect();
    c.bench_function("construct 64-d from f64", |b| {
        b.iter(|| Vector::new(black_box(data.iter().copied())).unwrap())
    });
}

fn bench_arithmetic(c: &mut Criterion) {
    let a = sample(1);
    let b = sample(5);
    c.bench_function("add 64-d", |bencher| {
        bencher.iter(|| black_box(&a).add(black_box(&b)).unwrap())
    });
    c.bench_function("dot 64-d", |bencher| {
        bencher.iter(|| black_box(&a).dot(black_box(&b)).unwrap())
    });
}

fn bench_geometry(c: &mut Criterion) {
    let a = sample(2);
    let b = sample(11);
    c.bench_function("angle 64-d", |bencher| {
        bencher.iter(|| black_box(&a).angle_with(black_box(&b), AngleUnit::Radians).unwrap())
    });
    c.bench_function("projection 64-d", |bencher| {
        bencher.iter(|| black_box(&a).parallel_component(black_box(&b)).unwrap())
    });

    let x = Vector::new([8.462, 7.893, -8.187]).unwrap();
    let y = Vector::new([6.984, -5.975, 4.778]).unwrap();
    c.bench_function("triangle area 3-d", |bencher| {
        bencher.iter(|| black_box(&x).triangle_area(black_box(&y)).unwrap())
    });
}

criterion_group!(benches, bench_construction, bench_arithmetic, bench_geometry);
criterion_main!(benches);
