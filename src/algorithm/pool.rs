//! Self-collapsing octree over the available color cube
//!
//! The pool owns every color of the cube and answers nearest-available
//! queries with a branch-and-bound search over an octree of bounding boxes.
//! Nodes live in an arena addressed by index; a child keeps a back-reference
//! to its parent's slot purely so removals can splice the tree without a
//! downward search. Single-color leaves are identified by their flat cube
//! index and carry no allocation of their own.
//!
//! Each removal detaches one leaf, swap-removes it from its parent, splices
//! away octants left with a single child, and recomputes ancestor bounding
//! boxes upward until one is unchanged. The tree therefore only ever tightens
//! around the surviving colors.

use bitvec::prelude::{BitVec, bitvec};
use rand::Rng;

use crate::color::types::SquaredDistance;
use crate::color::{Color, ColorCube};
use crate::io::error::{GrowthError, Result};

/// Reference to a node in the pool arena
///
/// Leaves are flat cube indexes; octants index the arena. Absence of a node
/// (an exhausted pool's root, an unoccupied block position during
/// construction) is modeled as `Option<NodeRef>` rather than a third variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeRef {
    /// Internal node grouping up to eight children
    Octant(usize),
    /// Single available color, identified by flat cube index
    Leaf(usize),
}

/// Back-reference from a child to the octant slot holding it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ParentLink {
    octant: usize,
    slot: usize,
}

/// Internal tree node covering the bounding box of its descendants
///
/// Bounds are guarantees, not exact inventories: a color inside the box is
/// either reachable beneath this octant or no longer in the tree at all.
#[derive(Clone, Debug)]
struct Octant {
    min: Color,
    max: Color,
    children: Vec<NodeRef>,
    parent: Option<ParentLink>,
}

/// Shrinking set of available colors with nearest-neighbor search
#[derive(Clone, Debug)]
pub struct ColorPool {
    cube: ColorCube,
    octants: Vec<Octant>,
    leaf_parents: Vec<Option<ParentLink>>,
    available: BitVec,
    remaining: usize,
    root: Option<NodeRef>,
}

/// Upper bound on the number of octants a cube can ever need
fn max_octants(cube: &ColorCube) -> usize {
    let mut total = 0;
    let mut r = usize::from(cube.r_res());
    let mut g = usize::from(cube.g_res());
    let mut b = usize::from(cube.b_res());
    loop {
        r = r.div_ceil(2);
        g = g.div_ceil(2);
        b = b.div_ceil(2);
        let layer = r * g * b;
        total += layer;
        if layer == 1 {
            return total;
        }
    }
}

fn set_parent(
    octants: &mut [Octant],
    leaf_parents: &mut [Option<ParentLink>],
    node: NodeRef,
    link: Option<ParentLink>,
) {
    match node {
        NodeRef::Leaf(index) => {
            if let Some(entry) = leaf_parents.get_mut(index) {
                *entry = link;
            }
        }
        NodeRef::Octant(index) => {
            if let Some(octant) = octants.get_mut(index) {
                octant.parent = link;
            }
        }
    }
}

fn node_bounds(octants: &[Octant], cube: &ColorCube, node: NodeRef) -> (Color, Color) {
    match node {
        NodeRef::Leaf(index) => {
            let color = cube.color_at(index);
            (color, color)
        }
        NodeRef::Octant(index) => octants
            .get(index)
            .map_or((Color::new(0, 0, 0), Color::new(0, 0, 0)), |octant| {
                (octant.min, octant.max)
            }),
    }
}

fn bounds_of_children(octants: &[Octant], cube: &ColorCube, children: &[NodeRef]) -> (Color, Color) {
    let mut min = Color::new(u8::MAX, u8::MAX, u8::MAX);
    let mut max = Color::new(0, 0, 0);
    for &child in children {
        let (child_min, child_max) = node_bounds(octants, cube, child);
        min.r = min.r.min(child_min.r);
        min.g = min.g.min(child_min.g);
        min.b = min.b.min(child_min.b);
        max.r = max.r.max(child_max.r);
        max.g = max.g.max(child_max.g);
        max.b = max.b.max(child_max.b);
    }
    (min, max)
}

/// Replace every octant that has exactly one child with that child
///
/// Only meaningful immediately after construction, where a collapsed chain's
/// bounds are provably identical to its survivor's.
fn collapse_single_children(
    octants: &mut [Octant],
    leaf_parents: &mut [Option<ParentLink>],
    node: NodeRef,
) -> NodeRef {
    let NodeRef::Octant(index) = node else {
        return node;
    };

    let child_count = octants.get(index).map_or(0, |octant| octant.children.len());
    for slot in 0..child_count {
        let Some(child) = octants
            .get(index)
            .and_then(|octant| octant.children.get(slot).copied())
        else {
            continue;
        };
        let replacement = collapse_single_children(octants, leaf_parents, child);
        if replacement != child {
            if let Some(entry) = octants
                .get_mut(index)
                .and_then(|octant| octant.children.get_mut(slot))
            {
                *entry = replacement;
            }
            set_parent(
                octants,
                leaf_parents,
                replacement,
                Some(ParentLink {
                    octant: index,
                    slot,
                }),
            );
        }
    }

    let (count, parent) = octants
        .get(index)
        .map_or((0, None), |octant| (octant.children.len(), octant.parent));
    if count == 1 {
        if let Some(survivor) = octants
            .get(index)
            .and_then(|octant| octant.children.first().copied())
        {
            set_parent(octants, leaf_parents, survivor, parent);
            return survivor;
        }
    }
    node
}

impl ColorPool {
    /// Build a pool containing every color of the cube
    ///
    /// The tree is assembled bottom-up in layers: each layer groups the
    /// previous one into ceiling-divided 2×2×2 blocks, one octant per
    /// occupied block, until a single node remains. Octant chains with a
    /// lone child are then collapsed away.
    pub fn new(cube: ColorCube) -> Self {
        let color_count = cube.len();
        let mut octants: Vec<Octant> = Vec::with_capacity(max_octants(&cube));
        let mut leaf_parents: Vec<Option<ParentLink>> = vec![None; color_count];

        // Leaf layer, in the cube's flat red-major order.
        let mut layer: Vec<NodeRef> = (0..color_count).map(NodeRef::Leaf).collect();
        let mut layer_dims = (
            usize::from(cube.r_res()),
            usize::from(cube.g_res()),
            usize::from(cube.b_res()),
        );

        while layer.len() > 1 {
            let next_dims = (
                layer_dims.0.div_ceil(2),
                layer_dims.1.div_ceil(2),
                layer_dims.2.div_ceil(2),
            );
            let mut next = Vec::with_capacity(next_dims.0 * next_dims.1 * next_dims.2);

            for block_r in 0..next_dims.0 {
                for block_g in 0..next_dims.1 {
                    for block_b in 0..next_dims.2 {
                        let index = octants.len();
                        let mut children = Vec::with_capacity(8);

                        for dr in 0..2 {
                            for dg in 0..2 {
                                for db in 0..2 {
                                    let r = block_r * 2 + dr;
                                    let g = block_g * 2 + dg;
                                    let b = block_b * 2 + db;
                                    if r >= layer_dims.0 || g >= layer_dims.1 || b >= layer_dims.2
                                    {
                                        continue;
                                    }
                                    let position =
                                        ((r * layer_dims.1) + g) * layer_dims.2 + b;
                                    let Some(&child) = layer.get(position) else {
                                        continue;
                                    };
                                    set_parent(
                                        &mut octants,
                                        &mut leaf_parents,
                                        child,
                                        Some(ParentLink {
                                            octant: index,
                                            slot: children.len(),
                                        }),
                                    );
                                    children.push(child);
                                }
                            }
                        }

                        let (min, max) = bounds_of_children(&octants, &cube, &children);
                        octants.push(Octant {
                            min,
                            max,
                            children,
                            parent: None,
                        });
                        next.push(NodeRef::Octant(index));
                    }
                }
            }

            layer = next;
            layer_dims = next_dims;
        }

        let mut root = layer.first().copied();
        if let Some(node) = root {
            let collapsed = collapse_single_children(&mut octants, &mut leaf_parents, node);
            set_parent(&mut octants, &mut leaf_parents, collapsed, None);
            root = Some(collapsed);
        }

        Self {
            cube,
            octants,
            leaf_parents,
            available: bitvec![1; color_count],
            remaining: color_count,
            root,
        }
    }

    /// The cube this pool was built over
    pub const fn cube(&self) -> &ColorCube {
        &self.cube
    }

    /// Number of colors still available
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Whether every color has been removed
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Whether a color is still available, in O(1) via the flat flag table
    pub fn is_available(&self, color: Color) -> bool {
        self.cube.contains(color)
            && self.available.get(self.cube.flat_index(color)).as_deref() == Some(&true)
    }

    /// Remove a color from the pool
    ///
    /// Detaches the color's leaf, splices away any octant left with a single
    /// child, and recomputes ancestor bounds upward, stopping at the first
    /// ancestor whose bounding box the removal did not change.
    ///
    /// # Errors
    ///
    /// Returns `ColorOutOfCube` for a color outside the cube and
    /// `ColorUnavailable` for a color already removed; neither changes the
    /// tree.
    pub fn remove(&mut self, color: Color) -> Result<()> {
        if !self.cube.contains(color) {
            return Err(GrowthError::ColorOutOfCube { color });
        }
        let index = self.cube.flat_index(color);
        if self.available.get(index).as_deref() != Some(&true) {
            return Err(GrowthError::ColorUnavailable { color });
        }

        self.available.set(index, false);
        self.remaining -= 1;

        let parent = self.leaf_parents.get(index).copied().flatten();
        if let Some(entry) = self.leaf_parents.get_mut(index) {
            *entry = None;
        }

        match parent {
            // A parentless leaf is the root: the pool held exactly one color.
            None => self.root = None,
            Some(link) => self.detach_child(link),
        }
        Ok(())
    }

    /// Remove the child at `link` from its octant and repair the tree above
    fn detach_child(&mut self, link: ParentLink) {
        let remaining_children = match self.octants.get_mut(link.octant) {
            Some(octant) if link.slot < octant.children.len() => {
                octant.children.swap_remove(link.slot);
                octant.children.len()
            }
            _ => return,
        };

        // The former last child now occupies the freed slot.
        if let Some(moved) = self
            .octants
            .get(link.octant)
            .and_then(|octant| octant.children.get(link.slot).copied())
        {
            set_parent(&mut self.octants, &mut self.leaf_parents, moved, Some(link));
        }

        if remaining_children == 1 {
            self.splice_survivor(link.octant);
        } else {
            self.refresh_bounds_upward(link.octant);
        }
    }

    /// Replace a single-child octant with its survivor, then continue upward
    ///
    /// The survivor's own bounds are untouched, so only ancestors above the
    /// spliced position can need recomputation.
    fn splice_survivor(&mut self, octant: usize) {
        let survivor = self
            .octants
            .get(octant)
            .and_then(|entry| entry.children.first().copied());
        let parent = self.octants.get(octant).and_then(|entry| entry.parent);
        let Some(survivor) = survivor else { return };

        match parent {
            None => {
                self.root = Some(survivor);
                set_parent(&mut self.octants, &mut self.leaf_parents, survivor, None);
            }
            Some(link) => {
                if let Some(entry) = self
                    .octants
                    .get_mut(link.octant)
                    .and_then(|parent_octant| parent_octant.children.get_mut(link.slot))
                {
                    *entry = survivor;
                }
                set_parent(
                    &mut self.octants,
                    &mut self.leaf_parents,
                    survivor,
                    Some(link),
                );
                self.refresh_bounds_upward(link.octant);
            }
        }
    }

    /// Recompute bounding boxes upward until one is unchanged or the root is reached
    fn refresh_bounds_upward(&mut self, start: usize) {
        let mut current = start;
        loop {
            let recomputed = self.octants.get(current).map(|octant| {
                (
                    bounds_of_children(&self.octants, &self.cube, &octant.children),
                    (octant.min, octant.max),
                    octant.parent,
                )
            });
            let Some(((new_min, new_max), (old_min, old_max), parent)) = recomputed else {
                return;
            };
            if new_min == old_min && new_max == old_max {
                return;
            }
            if let Some(octant) = self.octants.get_mut(current) {
                octant.min = new_min;
                octant.max = new_max;
            }
            match parent {
                None => return,
                Some(link) => current = link.octant,
            }
        }
    }

    /// Squared distance from the query to the closest point of a node's box
    fn best_case(&self, node: NodeRef, query: Color) -> SquaredDistance {
        let (min, max) = node_bounds(&self.octants, &self.cube, node);
        let closest = Color::new(
            query.r.clamp(min.r, max.r),
            query.g.clamp(min.g, max.g),
            query.b.clamp(min.b, max.b),
        );
        query.squared_distance(closest)
    }

    /// Squared distance to the per-axis far corner of a node's box
    ///
    /// Each axis independently picks whichever of the box's min or max lies
    /// farther from the query on that axis. This is a valid upper bound on
    /// the distance to any color beneath the node but not the tightest one;
    /// it is the bound the search has always used, and the set of candidates
    /// that survives to the final random tie-break depends on it.
    fn worst_case(&self, node: NodeRef, query: Color) -> SquaredDistance {
        let (min, max) = node_bounds(&self.octants, &self.cube, node);
        let farthest = Color::new(
            Self::far_channel(min.r, max.r, query.r),
            Self::far_channel(min.g, max.g, query.g),
            Self::far_channel(min.b, max.b, query.b),
        );
        query.squared_distance(farthest)
    }

    const fn far_channel(min: u8, max: u8, query: u8) -> u8 {
        if 2 * query as i32 - min as i32 - max as i32 > 0 {
            min
        } else {
            max
        }
    }

    /// The available color closest to a query, ties broken uniformly at random
    ///
    /// Branch-and-bound over the octree: a working set starts at the root
    /// with the bound seeded from the root's worst case. Each pass discards
    /// nodes whose best case exceeds the bound, expands surviving octants
    /// into their children (tightening the bound from any child whose worst
    /// case beats it, then keeping children whose best case passes the
    /// possibly-tightened bound), and carries surviving leaves forward. The
    /// search stops once a pass expands no octant and tightens nothing; at
    /// that point every carried leaf is at the minimal distance.
    ///
    /// The pool is not mutated; the caller reserves the returned color with
    /// a separate `remove`.
    ///
    /// # Errors
    ///
    /// Returns `PoolExhausted` when no colors remain.
    pub fn nearest_available<R: Rng>(&self, query: Color, rng: &mut R) -> Result<Color> {
        let root = self.root.ok_or(GrowthError::PoolExhausted)?;

        let mut working = vec![root];
        let mut bound = self.worst_case(root, query);

        loop {
            let mut next = Vec::with_capacity(working.len());
            let mut expanded = false;
            let mut tightened = false;

            for &node in &working {
                if self.best_case(node, query) > bound {
                    continue;
                }
                match node {
                    NodeRef::Leaf(_) => next.push(node),
                    NodeRef::Octant(index) => {
                        let Some(octant) = self.octants.get(index) else {
                            continue;
                        };
                        for &child in &octant.children {
                            let child_worst = self.worst_case(child, query);
                            if child_worst < bound {
                                bound = child_worst;
                                tightened = true;
                            }
                            if self.best_case(child, query) <= bound {
                                if matches!(child, NodeRef::Octant(_)) {
                                    expanded = true;
                                }
                                next.push(child);
                            }
                        }
                    }
                }
            }

            working = next;
            if !expanded && !tightened {
                break;
            }
        }

        if working.is_empty() {
            return Err(GrowthError::PoolExhausted);
        }
        let pick = rng.random_range(0..working.len());
        match working.get(pick) {
            Some(&NodeRef::Leaf(index)) => Ok(self.cube.color_at(index)),
            _ => Err(GrowthError::PoolExhausted),
        }
    }
}
