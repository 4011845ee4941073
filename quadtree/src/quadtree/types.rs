use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{AABox, Point2D, Ray2D};

pub(crate) const QUADRANT_Y_BIT: usize = 0b01;
pub(crate) const QUADRANT_X_BIT: usize = 0b10;

/// Parametric entry/exit values of a ray against a square region, one slab per
/// axis. In mirrored space the ray never has a negative direction component,
/// so `t0 <= t1` on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Interval {
    pub(crate) tx0: f32,
    pub(crate) ty0: f32,
    pub(crate) tx1: f32,
    pub(crate) ty1: f32,
}

impl Interval {
    #[inline(always)]
    pub(crate) fn new(tx0: f32, ty0: f32, tx1: f32, ty1: f32) -> Self {
        Self { tx0, ty0, tx1, ty1 }
    }

    /// Slab bounds of `ray` against the square at `origin` with side `length`.
    pub(crate) fn from_region(ray: &Ray2D, origin: Point2D, length: f32) -> Self {
        let (tx0, tx1) = slab(origin.x, origin.x + length, ray.origin.x, ray.direction.x);
        let (ty0, ty1) = slab(origin.y, origin.y + length, ray.origin.y, ray.direction.y);
        Self { tx0, ty0, tx1, ty1 }
    }

    #[inline(always)]
    pub(crate) fn entry(&self) -> f32 {
        self.tx0.max(self.ty0)
    }

    #[inline(always)]
    pub(crate) fn exit(&self) -> f32 {
        self.tx1.min(self.ty1)
    }

    // Either slab was left before the ray started.
    #[inline(always)]
    pub(crate) fn exited_before_origin(&self) -> bool {
        self.tx1 < 0.0 || self.ty1 < 0.0
    }
}

/// Entry and exit parameters of a ray along one axis. A zero direction never
/// divides: the slab is either always or never occupied.
#[inline(always)]
pub(crate) fn slab(lo: f32, hi: f32, origin: f32, direction: f32) -> (f32, f32) {
    if direction == 0.0 {
        if origin < lo {
            (f32::INFINITY, f32::INFINITY)
        } else if origin > hi {
            (f32::NEG_INFINITY, f32::NEG_INFINITY)
        } else {
            (f32::NEG_INFINITY, f32::INFINITY)
        }
    } else {
        let inv = 1.0 / direction;
        ((lo - origin) * inv, (hi - origin) * inv)
    }
}

/// Parameter at which the ray crosses a node's midline on one axis.
///
/// For an axis the ray runs parallel to, the interval is `(-inf, +inf)` and the
/// midpoint would be NaN; the midline is instead never crossed, and sits
/// after the ray when the origin is on the low side, before it otherwise.
#[inline(always)]
pub(crate) fn split_parameter(t0: f32, t1: f32, origin: f32, midline: f32) -> f32 {
    if t0 == f32::NEG_INFINITY && t1 == f32::INFINITY {
        if origin < midline {
            f32::INFINITY
        } else {
            f32::NEG_INFINITY
        }
    } else {
        0.5 * (t0 + t1)
    }
}

/// Origin of a child square. Bit 0 of `quadrant` selects the upper y-half,
/// bit 1 the upper x-half.
#[inline(always)]
pub(crate) fn quadrant_origin(origin: Point2D, length: f32, quadrant: usize) -> Point2D {
    let half = length * 0.5;
    let mut child_origin = origin;
    if quadrant & QUADRANT_Y_BIT != 0 {
        child_origin.y += half;
    }
    if quadrant & QUADRANT_X_BIT != 0 {
        child_origin.x += half;
    }
    child_origin
}

/// Quadrant a point falls in, together with that quadrant's origin. Points on
/// the midline belong to the upper half.
#[inline(always)]
pub(crate) fn find_quadrant(origin: Point2D, length: f32, point: Point2D) -> (Point2D, usize) {
    let half = length * 0.5;
    let center = origin + Point2D::splat(half);
    let mut quadrant = 0;
    if point.x >= center.x {
        quadrant |= QUADRANT_X_BIT;
    }
    if point.y >= center.y {
        quadrant |= QUADRANT_Y_BIT;
    }
    (quadrant_origin(origin, length, quadrant), quadrant)
}

pub(crate) fn validate_box(aabox: &AABox) -> QuadtreeResult<()> {
    if !aabox.has_positive_extents() {
        return Err(QuadtreeError::InvalidBoxExtents {
            min_x: aabox.min.x,
            min_y: aabox.min.y,
            width: aabox.extents.x,
            height: aabox.extents.y,
        });
    }
    Ok(())
}

pub(crate) fn validate_universe(origin: Point2D, length: f32) -> QuadtreeResult<()> {
    if !(origin.is_finite() && length.is_finite() && length > 0.0) {
        return Err(QuadtreeError::InvalidUniverse {
            origin_x: origin.x,
            origin_y: origin.y,
            length,
        });
    }
    Ok(())
}

pub(crate) fn validate_ray(ray: &Ray2D) -> QuadtreeResult<()> {
    if !(ray.origin.is_finite() && ray.direction.is_finite()) {
        return Err(QuadtreeError::NonFiniteRay {
            origin_x: ray.origin.x,
            origin_y: ray.origin.y,
            direction_x: ray.direction.x,
            direction_y: ray.direction.y,
        });
    }
    if ray.direction.x == 0.0 && ray.direction.y == 0.0 {
        return Err(QuadtreeError::ZeroRayDirection {
            origin_x: ray.origin.x,
            origin_y: ray.origin.y,
        });
    }
    Ok(())
}
