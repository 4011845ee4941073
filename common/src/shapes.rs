use rand::Rng;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn splat(value: f32) -> Self {
        Self { x: value, y: value }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Index<usize> for Point2D {
    type Output = f32;

    fn index(&self, axis: usize) -> &f32 {
        match axis {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Point2D axis out of range: {}", axis),
        }
    }
}

impl IndexMut<usize> for Point2D {
    fn index_mut(&mut self, axis: usize) -> &mut f32 {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Point2D axis out of range: {}", axis),
        }
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, other: Point2D) -> Point2D {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, other: Point2D) -> Point2D {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Point2D {
    type Output = Point2D;

    fn mul(self, scale: f32) -> Point2D {
        Point2D::new(self.x * scale, self.y * scale)
    }
}

/// Axis-aligned box stored as its min corner plus extents.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct AABox {
    pub min: Point2D,
    pub extents: Point2D,
}

impl AABox {
    pub fn new(min: Point2D, extents: Point2D) -> Self {
        Self { min, extents }
    }

    pub fn from_min_max(min: Point2D, max: Point2D) -> Self {
        Self {
            min,
            extents: max - min,
        }
    }

    // Square region, the shape every quadtree node covers
    pub fn square(origin: Point2D, length: f32) -> Self {
        Self {
            min: origin,
            extents: Point2D::splat(length),
        }
    }

    pub fn max(&self) -> Point2D {
        self.min + self.extents
    }

    pub fn center(&self) -> Point2D {
        self.min + self.extents * 0.5
    }

    pub fn width(&self) -> f32 {
        self.extents.x
    }

    pub fn height(&self) -> f32 {
        self.extents.y
    }

    /// Closed-interval overlap test: boxes that only share an edge overlap.
    pub fn overlaps(&self, other: &AABox) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        a_max.x >= other.min.x
            && b_max.x >= self.min.x
            && a_max.y >= other.min.y
            && b_max.y >= self.min.y
    }

    pub fn inside(&self, point: Point2D) -> bool {
        let max = self.max();
        self.min.x <= point.x && point.x <= max.x && self.min.y <= point.y && point.y <= max.y
    }

    pub fn has_positive_extents(&self) -> bool {
        self.min.is_finite()
            && self.extents.is_finite()
            && self.extents.x > 0.0
            && self.extents.y > 0.0
    }

    pub fn get_random_box_inside<R: Rng>(&self, max_extent: f32, rng: &mut R) -> AABox {
        let width = _safe_randf32(rng, max_extent * 0.1, max_extent);
        let height = _safe_randf32(rng, max_extent * 0.1, max_extent);
        let max = self.max();
        let min = Point2D::new(
            _safe_randf32(rng, self.min.x, max.x - width),
            _safe_randf32(rng, self.min.y, max.y - height),
        );
        AABox::new(min, Point2D::new(width, height))
    }
}

fn _safe_randf32<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

/// A bounded ray. The length of `direction` is the query horizon: the point at
/// parameter `t = 1` is the farthest point the ray reaches.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Ray2D {
    pub origin: Point2D,
    pub direction: Point2D,
}

impl Ray2D {
    pub fn new(origin: Point2D, direction: Point2D) -> Self {
        Self { origin, direction }
    }

    pub fn between(from: Point2D, to: Point2D) -> Self {
        Self {
            origin: from,
            direction: to - from,
        }
    }

    pub fn at(&self, t: f32) -> Point2D {
        self.origin + self.direction * t
    }

    pub fn end(&self) -> Point2D {
        self.at(1.0)
    }
}
