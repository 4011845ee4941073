use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::quadtree::{Config, QuadTreeBoxes};
use quadtree::shapes::{AABox, Point2D, Ray2D};
use rand::prelude::*;

fn bench_config() -> Config {
    Config {
        bucket_size: 16,
        max_depth: 8,
        ..Config::default()
    }
}

fn random_boxes(rng: &mut StdRng, count: usize) -> Vec<AABox> {
    let bounds = AABox::square(Point2D::new(0.0, 0.0), 100.0);
    (0..count)
        .map(|_| bounds.get_random_box_inside(5.0, rng))
        .collect()
}

fn build_tree(boxes: &[AABox]) -> QuadTreeBoxes<u32> {
    let mut quadtree =
        QuadTreeBoxes::new_with_config(Point2D::new(0.0, 0.0), 100.0, bench_config()).unwrap();
    for (value, aabox) in boxes.iter().enumerate() {
        quadtree.insert(value as u32, *aabox).unwrap();
    }
    quadtree
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let boxes = random_boxes(&mut rng, 1000);

    c.bench_function("quadtree_insert_1000", |b| {
        b.iter(|| build_tree(black_box(&boxes)))
    });
}

fn ray_cast_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let boxes = random_boxes(&mut rng, 1000);
    let quadtree = build_tree(&boxes);
    let rays: Vec<Ray2D> = (0..256)
        .map(|_| {
            Ray2D::new(
                Point2D::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)),
                Point2D::new(rng.gen_range(-60.0..60.0), rng.gen_range(-60.0..60.0)),
            )
        })
        .collect();

    c.bench_function("quadtree_ray_cast", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % rays.len();
            quadtree.ray_cast(black_box(&rays[i])).unwrap()
        })
    });
}

fn ray_cast_brute_force_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let boxes = random_boxes(&mut rng, 1000);
    let ray = Ray2D::new(Point2D::new(1.0, 1.0), Point2D::new(98.0, 60.0));

    c.bench_function("brute_force_ray_cast", |b| {
        b.iter(|| {
            boxes
                .iter()
                .position(|aabox| collisions::intersect_box_segment(aabox, black_box(&ray)).is_some())
        })
    });
}

criterion_group!(
    quadtree_benchmarks,
    insert_benchmark,
    ray_cast_benchmark,
    ray_cast_brute_force_benchmark
);
criterion_main!(quadtree_benchmarks);
