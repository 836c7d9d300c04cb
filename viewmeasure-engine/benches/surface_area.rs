//! Benchmarks for surface area accumulation in local and global space

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::{UnitQuaternion, Vector3};
use viewmeasure_core::{quad_grid, SceneObject, Space, Transform3D};
use viewmeasure_engine::{surface_area, FacePolicy};

fn bench_surface_area(c: &mut Criterion) {
    let transform = Transform3D::translation(Vector3::new(1.0, 2.0, 3.0))
        * Transform3D::rotation(UnitQuaternion::from_euler_angles(0.2, 0.4, 0.1))
        * Transform3D::scaling(Vector3::new(2.0, 1.0, 0.5));

    let mut group = c.benchmark_group("surface_area");

    for &cells in &[16usize, 64, 256] {
        let object = SceneObject::mesh("Grid", transform, quad_grid(cells, 10.0));
        let face_count = cells * cells;

        for space in [Space::Local, Space::Global] {
            group.bench_with_input(
                BenchmarkId::new(format!("{space}"), format!("{face_count}f")),
                &object,
                |b, object| {
                    b.iter(|| {
                        let area = surface_area(black_box(object), false, space, FacePolicy::default()).unwrap();
                        black_box(area);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_surface_area);
criterion_main!(benches);
