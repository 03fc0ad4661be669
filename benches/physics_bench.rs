use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use slingshot::{
    geometry,
    projectile::ProjectileController,
    scene,
    world::{World, WorldBuilder},
};

const STEPS: [u32; 4] = [1, 10, 60, 240];

fn scene_world() -> World {
    let mut world = WorldBuilder::new().build();
    scene::build_scene(&mut world, 1000.0, 800.0).unwrap();
    world
}

fn scene_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scene step");
    for steps in STEPS {
        group.throughput(criterion::Throughput::Elements(steps as u64));
        group.bench_function(BenchmarkId::new("Scene", steps), |b| {
            b.iter_batched(
                scene_world,
                |mut world| {
                    for _ in 0..steps {
                        world.step();
                    }
                    world
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
}

fn scene_step_with_projectile(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scene step with projectile");
    group.bench_function("Launch and fly 60 steps", |b| {
        b.iter_batched(
            scene_world,
            |mut world| {
                let mut controller = ProjectileController::new(50.0);
                controller
                    .press(&mut world, black_box(Vec2::new(200.0, 600.0)))
                    .unwrap();
                controller
                    .press(&mut world, black_box(Vec2::new(100.0, 700.0)))
                    .unwrap();
                for _ in 0..60 {
                    world.step();
                }
                world
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn geometry_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Geometry");
    let p1 = Vec2::new(100.0, 100.0);
    let p2 = Vec2::new(340.0, -25.0);
    group.bench_function("distance", |b| {
        b.iter(|| geometry::distance(black_box(p1), black_box(p2)));
    });
    group.bench_function("angle", |b| {
        b.iter(|| geometry::angle(black_box(p1), black_box(p2)));
    });
}

criterion_group!(
    simulation,
    scene_step,
    scene_step_with_projectile,
    geometry_helpers
);
criterion_main!(simulation);
