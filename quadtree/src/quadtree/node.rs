use super::config::Config;
use super::registry::BoxRegistry;
use super::types::{find_quadrant, quadrant_origin};
use crate::error::QuadtreeResult;
use common::shapes::{AABox, Point2D};
use smallvec::SmallVec;
use std::hash::Hash;
use tracing::debug;

pub(crate) type Bucket<D> = SmallVec<[D; 4]>;
pub(crate) type Children<D> = [Option<Box<Node<D>>>; 4];

#[derive(Debug)]
pub(crate) enum NodeKind<D> {
    /// Keys in insertion order.
    Leaf(Bucket<D>),
    /// Child slots indexed by quadrant, created on first overlap.
    Inner(Children<D>),
}

/// One square region of the tree.
#[derive(Debug)]
pub(crate) struct Node<D> {
    pub(crate) origin: Point2D,
    pub(crate) length: f32,
    pub(crate) kind: NodeKind<D>,
}

impl<D: Copy + Eq + Hash> Node<D> {
    pub(crate) fn new_leaf(origin: Point2D, length: f32) -> Self {
        Self {
            origin,
            length,
            kind: NodeKind::Leaf(Bucket::new()),
        }
    }

    pub(crate) fn new_inner(origin: Point2D, length: f32) -> Self {
        Self {
            origin,
            length,
            kind: NodeKind::Inner([None, None, None, None]),
        }
    }

    #[inline(always)]
    pub(crate) fn region(&self) -> AABox {
        AABox::square(self.origin, self.length)
    }

    /// Inserts `key` into this subtree.
    ///
    /// Returns the node that must replace this one in its parent's slot, which
    /// only happens when a full leaf is promoted to an inner node. `None` means
    /// this node stays where it is.
    pub(crate) fn insert(
        &mut self,
        key: D,
        aabox: &AABox,
        registry: &BoxRegistry<D>,
        config: &Config,
        depth: usize,
    ) -> QuadtreeResult<Option<Node<D>>> {
        let origin = self.origin;
        let length = self.length;
        match &mut self.kind {
            NodeKind::Leaf(bucket) => {
                if !aabox.overlaps(&AABox::square(origin, length)) {
                    return Ok(None);
                }
                if bucket.len() < config.bucket_size || depth >= config.max_depth {
                    bucket.push(key);
                    return Ok(None);
                }

                let mut promoted = Node::new_inner(origin, length);
                for existing in bucket.iter() {
                    let existing_box = registry.fetch(existing)?;
                    promoted.insert(*existing, &existing_box, registry, config, depth + 1)?;
                }
                promoted.insert(key, aabox, registry, config, depth + 1)?;
                debug!(
                    origin_x = origin.x,
                    origin_y = origin.y,
                    length,
                    depth,
                    bucket_len = bucket.len(),
                    "promoted full leaf to inner node"
                );
                Ok(Some(promoted))
            }
            NodeKind::Inner(children) => {
                let half = length * 0.5;
                for (quadrant, slot) in children.iter_mut().enumerate() {
                    let child_origin = quadrant_origin(origin, length, quadrant);
                    if !aabox.overlaps(&AABox::square(child_origin, half)) {
                        continue;
                    }
                    let child =
                        slot.get_or_insert_with(|| Box::new(Node::new_leaf(child_origin, half)));
                    if let Some(replacement) =
                        child.insert(key, aabox, registry, config, depth + 1)?
                    {
                        **child = replacement;
                    }
                }
                Ok(None)
            }
        }
    }

    pub(crate) fn depth(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 0,
            NodeKind::Inner(children) => {
                1 + children
                    .iter()
                    .flatten()
                    .map(|child| child.depth())
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    // (inner, leaf)
    pub(crate) fn count_nodes(&self, counts: &mut (usize, usize)) {
        match &self.kind {
            NodeKind::Leaf(_) => counts.1 += 1,
            NodeKind::Inner(children) => {
                counts.0 += 1;
                for child in children.iter().flatten() {
                    child.count_nodes(counts);
                }
            }
        }
    }

    pub(crate) fn node_bounding_boxes(&self, bounding_boxes: &mut Vec<AABox>) {
        bounding_boxes.push(self.region());
        if let NodeKind::Inner(children) = &self.kind {
            for child in children.iter().flatten() {
                child.node_bounding_boxes(bounding_boxes);
            }
        }
    }

    pub(crate) fn leaf_regions_containing(&self, key: &D, regions: &mut Vec<AABox>) {
        match &self.kind {
            NodeKind::Leaf(bucket) => {
                if bucket.contains(key) {
                    regions.push(self.region());
                }
            }
            NodeKind::Inner(children) => {
                for child in children.iter().flatten() {
                    child.leaf_regions_containing(key, regions);
                }
            }
        }
    }

    /// Region of the leaf covering `point`, or `None` when the point falls in a
    /// quadrant that was never populated.
    pub(crate) fn leaf_region_at(&self, point: Point2D) -> Option<AABox> {
        let mut node = self;
        loop {
            match &node.kind {
                NodeKind::Leaf(_) => return Some(node.region()),
                NodeKind::Inner(children) => {
                    let (_, quadrant) = find_quadrant(node.origin, node.length, point);
                    node = children[quadrant].as_deref()?;
                }
            }
        }
    }
}
