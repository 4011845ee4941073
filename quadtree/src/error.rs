use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidBoxExtents {
        min_x: f32,
        min_y: f32,
        width: f32,
        height: f32,
    },
    InvalidUniverse {
        origin_x: f32,
        origin_y: f32,
        length: f32,
    },
    InvalidConfig {
        bucket_size: usize,
        max_depth: usize,
        far_entry_guard: f32,
    },
    ZeroRayDirection {
        origin_x: f32,
        origin_y: f32,
    },
    NonFiniteRay {
        origin_x: f32,
        origin_y: f32,
        direction_x: f32,
        direction_y: f32,
    },
    UnregisteredKey,
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidBoxExtents {
                min_x,
                min_y,
                width,
                height,
            } => {
                write!(
                    f,
                    "box must have a finite min corner and finite, positive extents (min_x: {}, min_y: {}, width: {}, height: {})",
                    min_x, min_y, width, height
                )
            }
            QuadtreeError::InvalidUniverse {
                origin_x,
                origin_y,
                length,
            } => {
                write!(
                    f,
                    "quadtree universe must have a finite origin and a finite, positive length (origin_x: {}, origin_y: {}, length: {})",
                    origin_x, origin_y, length
                )
            }
            QuadtreeError::InvalidConfig {
                bucket_size,
                max_depth,
                far_entry_guard,
            } => {
                write!(
                    f,
                    "bucket_size must be at least 1 and far_entry_guard must be at least 1.0 (bucket_size: {}, max_depth: {}, far_entry_guard: {})",
                    bucket_size, max_depth, far_entry_guard
                )
            }
            QuadtreeError::ZeroRayDirection { origin_x, origin_y } => {
                write!(
                    f,
                    "ray direction must not be zero-length (origin_x: {}, origin_y: {})",
                    origin_x, origin_y
                )
            }
            QuadtreeError::NonFiniteRay {
                origin_x,
                origin_y,
                direction_x,
                direction_y,
            } => {
                write!(
                    f,
                    "ray origin and direction must be finite (origin_x: {}, origin_y: {}, direction_x: {}, direction_y: {})",
                    origin_x, origin_y, direction_x, direction_y
                )
            }
            QuadtreeError::UnregisteredKey => {
                write!(f, "key is stored in a node but has no registered box")
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
