use super::node::{Bucket, Children, Node, NodeKind};
use super::registry::BoxRegistry;
use super::types::{split_parameter, Interval};
use crate::error::QuadtreeResult;
use collisions::intersect_box_segment;
use common::shapes::Ray2D;
use std::hash::Hash;

const STOP: usize = 4;

/// Everything a ray cast carries down the tree besides the per-node interval.
pub(crate) struct RayQuery<'a, D> {
    /// The caller's ray; boxes are always tested against this one.
    pub(crate) ray: &'a Ray2D,
    /// The ray reflected into non-negative direction space.
    pub(crate) mirrored: Ray2D,
    /// Quadrant bits flipped by the reflection.
    pub(crate) mirror_mask: usize,
    pub(crate) registry: &'a BoxRegistry<D>,
    pub(crate) far_entry_guard: f32,
}

impl<D: Copy + Eq + Hash> Node<D> {
    pub(crate) fn ray_cast_process_child(
        &self,
        interval: Interval,
        query: &RayQuery<'_, D>,
    ) -> QuadtreeResult<Option<D>> {
        match &self.kind {
            NodeKind::Leaf(bucket) => ray_cast_leaf(bucket, interval, query),
            NodeKind::Inner(children) => self.ray_cast_inner(children, interval, query),
        }
    }

    fn ray_cast_inner(
        &self,
        children: &Children<D>,
        interval: Interval,
        query: &RayQuery<'_, D>,
    ) -> QuadtreeResult<Option<D>> {
        let Interval { tx0, ty0, tx1, ty1 } = interval;
        if interval.exited_before_origin() {
            return Ok(None);
        }
        if !self.region().inside(query.ray.origin)
            && tx0.abs() > query.far_entry_guard
            && ty0.abs() > query.far_entry_guard
        {
            return Ok(None);
        }

        // Parallel axes are never mirrored, so the node's own midline is
        // valid in mirrored space for them.
        let half = self.length * 0.5;
        let txm = split_parameter(tx0, tx1, query.mirrored.origin.x, self.origin.x + half);
        let tym = split_parameter(ty0, ty1, query.mirrored.origin.y, self.origin.y + half);

        let mut state = first_state(tx0, ty0, txm, tym);
        while state < STOP {
            let (child_interval, next) = match state {
                0 => (
                    Interval::new(tx0, ty0, txm, tym),
                    next_state(txm, 2, tym, 1),
                ),
                1 => (
                    Interval::new(tx0, tym, txm, ty1),
                    next_state(txm, 3, ty1, STOP),
                ),
                2 => (
                    Interval::new(txm, ty0, tx1, tym),
                    next_state(tx1, STOP, tym, 3),
                ),
                _ => (Interval::new(txm, tym, tx1, ty1), STOP),
            };
            if let Some(child) = &children[state ^ query.mirror_mask] {
                if let Some(hit) = child.ray_cast_process_child(child_interval, query)? {
                    return Ok(Some(hit));
                }
            }
            state = next;
        }
        Ok(None)
    }
}

fn ray_cast_leaf<D: Copy + Eq + Hash>(
    bucket: &Bucket<D>,
    interval: Interval,
    query: &RayQuery<'_, D>,
) -> QuadtreeResult<Option<D>> {
    if interval.exited_before_origin() {
        return Ok(None);
    }
    for key in bucket.iter() {
        let aabox = query.registry.fetch(key)?;
        // First accepted box wins, even if a later one in the bucket is nearer.
        if intersect_box_segment(&aabox, query.ray).is_some() {
            return Ok(Some(*key));
        }
    }
    Ok(None)
}

/// Canonical quadrant the ray enters first, from the axis it enters last.
#[inline(always)]
fn first_state(tx0: f32, ty0: f32, txm: f32, tym: f32) -> usize {
    if tx0 > ty0 {
        if tym < tx0 {
            1
        } else {
            0
        }
    } else if txm < ty0 {
        2
    } else {
        0
    }
}

/// Picks the neighbour across whichever exit plane the ray reaches first.
#[inline(always)]
fn next_state(tx_exit: f32, x_neighbour: usize, ty_exit: f32, y_neighbour: usize) -> usize {
    if tx_exit < ty_exit {
        x_neighbour
    } else {
        y_neighbour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_state_follows_last_entry_axis() {
        // Enters through the x = min plane, below the y midline.
        assert_eq!(first_state(1.0, 0.0, 3.0, 2.0), 0);
        // Enters through the x = min plane, above the y midline.
        assert_eq!(first_state(2.0, 0.0, 3.0, 1.0), 1);
        // Enters through the y = min plane, past the x midline.
        assert_eq!(first_state(0.0, 2.0, 1.0, 3.0), 2);
        assert_eq!(first_state(0.0, 1.0, 2.0, 3.0), 0);
    }

    #[test]
    fn next_state_takes_nearest_exit() {
        assert_eq!(next_state(1.0, 2, 2.0, 1), 2);
        assert_eq!(next_state(2.0, 2, 1.0, 1), 1);
        assert_eq!(next_state(1.0, 2, 1.0, 1), 1);
        assert_eq!(next_state(f32::INFINITY, 3, 5.0, STOP), STOP);
    }
}
