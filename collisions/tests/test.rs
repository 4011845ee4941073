use collisions::*;
use common::shapes::{AABox, Point2D, Ray2D};

fn unit_box_at(x: f32, y: f32) -> AABox {
    AABox::new(Point2D::new(x, y), Point2D::new(1.0, 1.0))
}

#[test]
fn test_hit_in_front() {
    let b = AABox::from_min_max(Point2D::new(10.0, 10.0), Point2D::new(20.0, 20.0));
    let ray = Ray2D::new(Point2D::new(0.0, 0.0), Point2D::new(15.0, 15.0));
    let t = intersect_box_ray(&b, &ray).unwrap();
    assert!((t - 10.0 / 15.0).abs() < 1e-5);
    assert!(intersect_box_segment(&b, &ray).is_some());
}

#[test]
fn test_hit_beyond_horizon() {
    let b = unit_box_at(20.0, -0.5);
    let ray = Ray2D::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
    let t = intersect_box_ray(&b, &ray).unwrap();
    assert!((t - 2.0).abs() < 1e-5);
    assert_eq!(intersect_box_segment(&b, &ray), None);
}

#[test]
fn test_box_behind_origin() {
    let b = unit_box_at(-5.0, -0.5);
    let ray = Ray2D::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
    assert_eq!(intersect_box_ray(&b, &ray), None);
}

#[test]
fn test_miss_to_the_side() {
    let b = unit_box_at(5.0, 5.0);
    let ray = Ray2D::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
    assert_eq!(intersect_box_ray(&b, &ray), None);
}

#[test]
fn test_origin_inside() {
    let b = unit_box_at(0.0, 0.0);
    let ray = Ray2D::new(Point2D::new(0.5, 0.5), Point2D::new(3.0, 1.0));
    let t = intersect_box_segment(&b, &ray).unwrap();
    assert!(t <= 0.0);
}

#[test]
fn test_negative_direction() {
    let b = unit_box_at(-6.0, -6.0);
    let ray = Ray2D::new(Point2D::new(0.0, 0.0), Point2D::new(-10.0, -10.0));
    let t = intersect_box_segment(&b, &ray).unwrap();
    assert!((t - 0.5).abs() < 1e-5);
}
