use common::shapes::{AABox, Ray2D};
use nalgebra::{Point2, Vector2};
use parry2d::bounding_volume::Aabb;
use parry2d::query::{Ray, RayCast};

pub fn to_aabb(aabox: &AABox) -> Aabb {
    let max = aabox.max();
    Aabb::new(
        Point2::new(aabox.min.x, aabox.min.y),
        Point2::new(max.x, max.y),
    )
}

pub fn to_ray(ray: &Ray2D) -> Ray {
    Ray::new(
        Point2::new(ray.origin.x, ray.origin.y),
        Vector2::new(ray.direction.x, ray.direction.y),
    )
}

/// Intersects the ray's unbounded forward half-line with `aabox`.
///
/// Returns the parametric distance at which the ray enters the box, in units of
/// `ray.direction`, or `Some(0.0)` when the origin already lies inside it. The
/// caller decides whether a hit beyond `t = 1` counts.
pub fn intersect_box_ray(aabox: &AABox, ray: &Ray2D) -> Option<f32> {
    to_aabb(aabox).cast_local_ray(&to_ray(ray), f32::MAX, true)
}

/// Same as [`intersect_box_ray`] but only reports hits strictly before the
/// ray's horizon (`t < 1`).
pub fn intersect_box_segment(aabox: &AABox, ray: &Ray2D) -> Option<f32> {
    intersect_box_ray(aabox, ray).filter(|t| *t < 1.0)
}
