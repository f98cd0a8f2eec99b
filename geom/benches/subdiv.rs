use criterion::{Criterion, black_box, criterion_group, criterion_main};

use sierpinski_geom::{Tetra, Triangle, assemble};

fn subdivide(c: &mut Criterion) {
    let tetra = Tetra::regular(1.0);
    c.bench_function("subdivide tetra depth 6", |b| {
        b.iter(|| black_box(tetra.subdivide(black_box(6))))
    });

    let tri = Triangle::equilateral(1.0);
    c.bench_function("subdivide triangle depth 8", |b| {
        b.iter(|| black_box(tri.subdivide(black_box(8))))
    });
}

fn assemble_mesh(c: &mut Criterion) {
    let cells = Tetra::regular(1.0).subdivide(5);
    c.bench_function("assemble 1024 cells", |b| {
        b.iter(|| assemble(black_box(&cells)))
    });
}

criterion_group!(benches, subdivide, assemble_mesh);
criterion_main!(benches);
