//! Pending-cell set with O(1) removal and uniform random selection
//!
//! A dense array of queued coordinates plus a slot-index side table keyed by
//! grid position. Removal swaps the last element into the freed slot, so the
//! dense array stays gap-free and random picks remain uniform over the
//! current membership regardless of removal history.

use ndarray::Array2;
use rand::Rng;

use crate::io::error::{GrowthError, Result};
use crate::spatial::Coord;

/// Priority hint used by the growth loop when queueing neighbors
///
/// The reference scheduling policy is uniformly random and ignores the hint;
/// it exists so alternative prioritizing queues can share the interface.
pub const ENQUEUE_PRIORITY: i32 = -1;

/// Fixed-capacity set of coordinates awaiting color assignment
#[derive(Clone, Debug)]
pub struct FrontierQueue {
    coords: Vec<Coord>,
    slots: Array2<Option<usize>>,
    width: u32,
    height: u32,
}

impl FrontierQueue {
    /// Create an empty frontier sized for every cell of a grid
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            coords: Vec::with_capacity(width as usize * height as usize),
            slots: Array2::from_elem((width as usize, height as usize), None),
            width,
            height,
        }
    }

    /// Number of queued coordinates
    pub const fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether no coordinates are queued
    pub const fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Maximum number of coordinates the frontier can hold
    pub const fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }

    const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.x < self.width as i32
            && coord.y >= 0
            && coord.y < self.height as i32
    }

    fn slot_of(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            self.slots
                .get([coord.x as usize, coord.y as usize])
                .copied()
                .flatten()
        } else {
            None
        }
    }

    fn set_slot(&mut self, coord: Coord, slot: Option<usize>) {
        if let Some(entry) = self.slots.get_mut([coord.x as usize, coord.y as usize]) {
            *entry = slot;
        }
    }

    /// Whether a coordinate is currently queued
    pub fn contains(&self, coord: Coord) -> bool {
        self.slot_of(coord).is_some()
    }

    /// Queue a coordinate
    ///
    /// Adding a coordinate that is already queued is a no-op. The priority
    /// hint is accepted for interface symmetry with prioritizing scheduling
    /// policies; uniform random selection never consults it.
    ///
    /// # Errors
    ///
    /// Returns `CoordOutOfBounds` for a coordinate off the grid and
    /// `FrontierFull` if every cell is already queued.
    pub fn add(&mut self, coord: Coord, priority: i32) -> Result<()> {
        let _ = priority;

        if !self.in_bounds(coord) {
            return Err(GrowthError::CoordOutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            });
        }
        if self.contains(coord) {
            return Ok(());
        }
        if self.coords.len() == self.capacity() {
            return Err(GrowthError::FrontierFull {
                capacity: self.capacity(),
            });
        }

        self.set_slot(coord, Some(self.coords.len()));
        self.coords.push(coord);
        Ok(())
    }

    /// Remove a queued coordinate
    ///
    /// The last queued coordinate moves into the freed slot so removal stays
    /// O(1) and the dense array gap-free.
    ///
    /// # Errors
    ///
    /// Returns `NotQueued` if the coordinate is not a member (including any
    /// out-of-bounds coordinate).
    pub fn remove(&mut self, coord: Coord) -> Result<()> {
        let Some(slot) = self.slot_of(coord) else {
            return Err(GrowthError::NotQueued { coord });
        };

        self.coords.swap_remove(slot);
        if let Some(&moved) = self.coords.get(slot) {
            self.set_slot(moved, Some(slot));
        }
        self.set_slot(coord, None);
        Ok(())
    }

    /// A uniformly random queued coordinate, left in place
    ///
    /// Returns `None` when the frontier is empty.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Option<Coord> {
        if self.coords.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.coords.len());
        self.coords.get(index).copied()
    }
}
