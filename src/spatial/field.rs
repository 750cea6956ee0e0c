//! Growth field grid and preferred-color averaging
//!
//! The field tracks each cell's progress through the one-way status chain
//! Unset → Queued → Set. Queued cells are exactly the members of the
//! frontier queue; committing a cell removes it from the frontier and
//! queues its untouched neighbors.

use ndarray::Array2;

use crate::algorithm::frontier::{ENQUEUE_PRIORITY, FrontierQueue};
use crate::color::Color;
use crate::io::error::{GrowthError, Result};
use crate::spatial::coords::{Coord, NEIGHBOR_OFFSETS};

/// Per-cell growth state
///
/// Transitions are monotonic: a cell never moves backward along
/// Unset → Queued → Set, and a committed color is never replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Not yet reached by the growth front
    Unset,
    /// Adjacent to a committed cell and awaiting selection
    Queued,
    /// Committed with its final color
    Set(Color),
}

/// Grid of cell states with neighbor-averaged color preference
#[derive(Clone, Debug)]
pub struct GrowthField {
    cells: Array2<Cell>,
    width: u32,
    height: u32,
    set_count: usize,
}

impl GrowthField {
    /// Create a field of entirely unset cells
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: Array2::from_elem((width as usize, height as usize), Cell::Unset),
            width,
            height,
            set_count: 0,
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the grid has no cells
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of committed cells
    pub const fn set_count(&self) -> usize {
        self.set_count
    }

    /// Whether a coordinate lies on the grid
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.x < self.width as i32
            && coord.y >= 0
            && coord.y < self.height as i32
    }

    /// The state of the cell at a coordinate, or `None` out of bounds
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        if self.contains(coord) {
            self.cells
                .get([coord.x as usize, coord.y as usize])
                .copied()
        } else {
            None
        }
    }

    fn put(&mut self, coord: Coord, cell: Cell) {
        if let Some(slot) = self.cells.get_mut([coord.x as usize, coord.y as usize]) {
            *slot = cell;
        }
    }

    /// The color preferred by a cell's committed neighbors
    ///
    /// Averages each channel over the up-to-8 neighbors that are already Set,
    /// clamped at grid edges (border cells simply have fewer neighbors).
    /// Division is rounded, not truncated, by adding half the neighbor count
    /// to each channel sum. Returns `None` when no neighbor is Set; only the
    /// seed cell may legitimately be in that position, and it bypasses this
    /// function entirely.
    pub fn preferred_color(&self, coord: Coord) -> Option<Color> {
        let mut sum_r: u32 = 0;
        let mut sum_g: u32 = 0;
        let mut sum_b: u32 = 0;
        let mut neighbors: u32 = 0;

        for (dx, dy) in NEIGHBOR_OFFSETS {
            if let Some(Cell::Set(color)) = self.cell(coord.offset(dx, dy)) {
                sum_r += u32::from(color.r);
                sum_g += u32::from(color.g);
                sum_b += u32::from(color.b);
                neighbors += 1;
            }
        }

        if neighbors == 0 {
            return None;
        }

        let half = neighbors / 2;
        Some(Color::new(
            ((sum_r + half) / neighbors) as u8,
            ((sum_g + half) / neighbors) as u8,
            ((sum_b + half) / neighbors) as u8,
        ))
    }

    /// Commit a color to a cell and queue its untouched neighbors
    ///
    /// The cell leaves the frontier if it was queued, then every Unset
    /// neighbor is added to the frontier and marked Queued. Re-queueing of
    /// already-queued neighbors is suppressed by the frontier itself.
    ///
    /// # Errors
    ///
    /// Returns `CoordOutOfBounds` for a coordinate off the grid and
    /// `CellAlreadySet` when the cell has a committed color; neither leaves
    /// any side effects.
    pub fn commit(
        &mut self,
        frontier: &mut FrontierQueue,
        coord: Coord,
        color: Color,
    ) -> Result<()> {
        match self.cell(coord) {
            None => {
                return Err(GrowthError::CoordOutOfBounds {
                    coord,
                    width: self.width,
                    height: self.height,
                });
            }
            Some(Cell::Set(_)) => return Err(GrowthError::CellAlreadySet { coord }),
            Some(Cell::Queued) => frontier.remove(coord)?,
            Some(Cell::Unset) => {}
        }

        self.put(coord, Cell::Set(color));
        self.set_count += 1;

        for (dx, dy) in NEIGHBOR_OFFSETS {
            let neighbor = coord.offset(dx, dy);
            if self.cell(neighbor) == Some(Cell::Unset) {
                frontier.add(neighbor, ENQUEUE_PRIORITY)?;
                self.put(neighbor, Cell::Queued);
            }
        }

        Ok(())
    }
}
