use super::config::Config;
use super::node::Node;
use super::registry::BoxRegistry;
use super::traversal::RayQuery;
use super::types::{
    validate_box, validate_ray, validate_universe, Interval, QUADRANT_X_BIT, QUADRANT_Y_BIT,
};
use crate::error::QuadtreeResult;
use common::shapes::{AABox, Point2D, Ray2D};
use std::hash::Hash;
use tracing::{debug, trace};

/// A quadtree over axis-aligned boxes that accelerates bounded ray casts.
///
/// Boxes are keyed by `D`. A box is duplicated into every leaf it overlaps, so
/// a ray cast only ever tests the boxes stored along the ray's path. Keys are
/// never removed; inserting a key again overwrites its registered box but
/// leaves the placements made for the old box in place.
#[derive(Debug)]
pub struct QuadTreeBoxes<D> {
    root: Node<D>,
    registry: BoxRegistry<D>,
    origin: Point2D,
    length: f32,
    config: Config,
}

impl<D: Copy + Eq + Hash> QuadTreeBoxes<D> {
    /// `origin` is the min corner of the indexed square and `length` its side.
    pub fn new(origin: Point2D, length: f32) -> QuadtreeResult<Self> {
        Self::new_with_config(origin, length, Config::default())
    }

    pub fn new_with_config(origin: Point2D, length: f32, config: Config) -> QuadtreeResult<Self> {
        validate_universe(origin, length)?;
        config.validate()?;
        Ok(Self {
            root: Node::new_leaf(origin, length),
            registry: BoxRegistry::new(),
            origin,
            length,
            config,
        })
    }

    /// Registers `aabox` under `key` and indexes it.
    ///
    /// Returns `Ok(false)` when the box lies entirely outside the tree's
    /// bounds; the key stays registered but nothing is indexed.
    pub fn insert(&mut self, key: D, aabox: AABox) -> QuadtreeResult<bool> {
        validate_box(&aabox)?;
        self.registry.put(key, aabox);
        if !aabox.overlaps(&self.bounds()) {
            debug!(
                min_x = aabox.min.x,
                min_y = aabox.min.y,
                width = aabox.extents.x,
                height = aabox.extents.y,
                "box outside quadtree bounds, not indexed"
            );
            return Ok(false);
        }

        let replacement = self
            .root
            .insert(key, &aabox, &self.registry, &self.config, 0)?;
        if let Some(replacement) = replacement {
            self.root = replacement;
        }
        Ok(true)
    }

    /// Casts `ray` up to its horizon (`t = 1`) and returns the key of the first
    /// box accepted along the way.
    ///
    /// Quadrants are visited near to far and the cast stops at the first leaf
    /// with an accepted box, so the result is usually, but not always, the
    /// nearest box: a box straddling a quadrant boundary can lose to a farther
    /// box stored earlier in the leaf that is visited first.
    pub fn ray_cast(&self, ray: &Ray2D) -> QuadtreeResult<Option<D>> {
        validate_ray(ray)?;

        let center = self.bounds().center();
        let mut mirrored = *ray;
        let mut mirror_mask = 0;
        if mirrored.direction.x < 0.0 {
            mirrored.origin.x = 2.0 * center.x - mirrored.origin.x;
            mirrored.direction.x = -mirrored.direction.x;
            mirror_mask |= QUADRANT_X_BIT;
        }
        if mirrored.direction.y < 0.0 {
            mirrored.origin.y = 2.0 * center.y - mirrored.origin.y;
            mirrored.direction.y = -mirrored.direction.y;
            mirror_mask |= QUADRANT_Y_BIT;
        }

        let interval = Interval::from_region(&mirrored, self.origin, self.length);
        trace!(
            mirror_mask,
            tx0 = interval.tx0,
            ty0 = interval.ty0,
            tx1 = interval.tx1,
            ty1 = interval.ty1,
            "ray cast"
        );
        if interval.entry() >= interval.exit() {
            return Ok(None);
        }

        let query = RayQuery {
            ray,
            mirrored,
            mirror_mask,
            registry: &self.registry,
            far_entry_guard: self.config.far_entry_guard,
        };
        self.root.ray_cast_process_child(interval, &query)
    }

    /// Pushes the hit of [`ray_cast`](Self::ray_cast), if any, onto `results`.
    pub fn ray_cast_into(&self, ray: &Ray2D, results: &mut Vec<D>) -> QuadtreeResult<bool> {
        match self.ray_cast(ray)? {
            Some(key) => {
                results.push(key);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Number of inner levels on the longest path; a lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn bounds(&self) -> AABox {
        AABox::square(self.origin, self.length)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn get(&self, key: &D) -> Option<AABox> {
        self.registry.get(key)
    }

    pub fn registry(&self) -> &BoxRegistry<D> {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// (inner nodes, leaf nodes)
    pub fn node_count(&self) -> (usize, usize) {
        let mut counts = (0, 0);
        self.root.count_nodes(&mut counts);
        counts
    }

    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<AABox>) {
        self.root.node_bounding_boxes(bounding_boxes);
    }

    /// Regions of every leaf whose bucket holds `key`.
    pub fn leaf_regions_containing(&self, key: &D) -> Vec<AABox> {
        let mut regions = Vec::new();
        self.root.leaf_regions_containing(key, &mut regions);
        regions
    }

    pub fn leaf_region_at(&self, point: Point2D) -> Option<AABox> {
        if !self.bounds().inside(point) {
            return None;
        }
        self.root.leaf_region_at(point)
    }
}
