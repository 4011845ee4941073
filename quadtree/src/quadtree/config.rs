use crate::error::{QuadtreeError, QuadtreeResult};

#[derive(Debug, Clone)]
pub struct Config {
    /// Keys a leaf holds before it is promoted to an inner node.
    pub bucket_size: usize,
    /// Depth at which leaves stop splitting and buckets grow unbounded.
    pub max_depth: usize,
    /// An inner node that does not contain the ray origin is skipped when both
    /// of its entry parameters exceed this magnitude.
    pub far_entry_guard: f32,
}

impl Config {
    pub(crate) fn validate(&self) -> QuadtreeResult<()> {
        // A guard below the horizon would prune nodes entered before t = 1.
        if self.bucket_size == 0 || self.far_entry_guard.is_nan() || self.far_entry_guard < 1.0 {
            return Err(QuadtreeError::InvalidConfig {
                bucket_size: self.bucket_size,
                max_depth: self.max_depth,
                far_entry_guard: self.far_entry_guard,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bucket_size: 1,
            max_depth: 13,
            far_entry_guard: 5.0,
        }
    }
}
