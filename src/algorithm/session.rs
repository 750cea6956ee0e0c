//! Growth session configuration and step loop
//!
//! A session owns the growth field, the frontier queue, the color pool, and
//! the seeded random source, created together and dropped together. Each
//! step is atomic: one frontier cell transitions to Set, one color leaves
//! the pool, and newly reachable neighbors join the frontier, or the step
//! is not attempted at all.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::algorithm::frontier::FrontierQueue;
use crate::algorithm::pool::ColorPool;
use crate::color::{Color, ColorCube};
use crate::io::error::{GrowthError, Result, invalid_parameter};
use crate::spatial::{Coord, GrowthField};

/// Parameters for a growth session
///
/// Seed coordinate and color default to the grid and cube centers; the
/// random seed fully determines the commit sequence for a given
/// configuration.
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    /// Grid width in cells
    pub width: u32,
    /// Grid height in cells
    pub height: u32,
    /// Red channel resolution
    pub r_res: u16,
    /// Green channel resolution
    pub g_res: u16,
    /// Blue channel resolution
    pub b_res: u16,
    /// Seed for the session's random source
    pub seed: u64,
    /// Starting cell; `None` selects the grid center
    pub seed_coord: Option<Coord>,
    /// Starting color; `None` selects the cube center
    pub seed_color: Option<Color>,
}

impl SessionConfig {
    /// Validate the configuration and produce its color cube
    ///
    /// # Errors
    ///
    /// Returns `ResolutionOutOfRange` for a channel resolution outside
    /// 1..=256, `DimensionMismatch` unless the cell count equals the color
    /// count exactly, and `InvalidParameter` for a seed coordinate or color
    /// outside its domain.
    pub fn validate(&self) -> Result<ColorCube> {
        let cube = ColorCube::new(self.r_res, self.g_res, self.b_res)?;

        let cells = u64::from(self.width) * u64::from(self.height);
        if cells == 0 || cells != cube.len() as u64 {
            return Err(GrowthError::DimensionMismatch {
                width: self.width,
                height: self.height,
                r_res: self.r_res,
                g_res: self.g_res,
                b_res: self.b_res,
            });
        }

        if let Some(coord) = self.seed_coord {
            let in_bounds = coord.x >= 0
                && coord.x < self.width as i32
                && coord.y >= 0
                && coord.y < self.height as i32;
            if !in_bounds {
                return Err(invalid_parameter(
                    "seed_coord",
                    &coord,
                    &"seed coordinate lies outside the grid",
                ));
            }
        }
        if let Some(color) = self.seed_color {
            if !cube.contains(color) {
                return Err(invalid_parameter(
                    "seed_color",
                    &color,
                    &"seed color lies outside the color cube",
                ));
            }
        }

        Ok(cube)
    }

    const fn resolved_seed_coord(&self) -> Coord {
        match self.seed_coord {
            Some(coord) => coord,
            None => Coord::new((self.width / 2) as i32, (self.height / 2) as i32),
        }
    }

    fn resolved_seed_color(&self, cube: &ColorCube) -> Color {
        self.seed_color.unwrap_or_else(|| cube.center())
    }
}

/// Lifecycle state of a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Frontier cells remain to be colored
    Running,
    /// Every cell is Set and the pool is empty
    Completed,
}

/// A single growth run from seed to finished image
#[derive(Debug)]
pub struct Session {
    field: GrowthField,
    frontier: FrontierQueue,
    pool: ColorPool,
    rng: StdRng,
    state: SessionState,
    last_assignment: (Coord, Color),
}

impl Session {
    /// Create a session and commit its seed cell
    ///
    /// The seed bypasses preferred-color averaging (it has no committed
    /// neighbors) and is removed from the pool directly; its enqueued
    /// neighbors form the initial frontier.
    ///
    /// # Errors
    ///
    /// Returns any configuration error from `SessionConfig::validate`; no
    /// session exists on failure.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let cube = config.validate()?;
        let seed_coord = config.resolved_seed_coord();
        let seed_color = config.resolved_seed_color(&cube);

        let mut field = GrowthField::new(config.width, config.height);
        let mut frontier = FrontierQueue::new(config.width, config.height);
        let mut pool = ColorPool::new(cube);
        let rng = StdRng::seed_from_u64(config.seed);

        pool.remove(seed_color)?;
        field.commit(&mut frontier, seed_coord, seed_color)?;

        let state = if frontier.is_empty() {
            SessionState::Completed
        } else {
            SessionState::Running
        };

        Ok(Self {
            field,
            frontier,
            pool,
            rng,
            state,
            last_assignment: (seed_coord, seed_color),
        })
    }

    /// Perform one atomic growth step
    ///
    /// Picks a random frontier cell, asks its committed neighbors for a
    /// preferred color, reserves the nearest available color, and commits
    /// it. Returns `true` while more work remains and `false` once the
    /// session has completed; calling again after completion keeps
    /// returning `false`.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the session's structures disagree
    /// with one another; such an error means the session state can no longer
    /// be trusted and the session should be discarded.
    pub fn step(&mut self) -> Result<bool> {
        if self.state == SessionState::Completed {
            return Ok(false);
        }

        let Some(coord) = self.frontier.pick_random(&mut self.rng) else {
            self.state = SessionState::Completed;
            return Ok(false);
        };

        let preferred = self
            .field
            .preferred_color(coord)
            .ok_or(GrowthError::IsolatedCell { coord })?;
        let color = self.pool.nearest_available(preferred, &mut self.rng)?;
        self.pool.remove(color)?;
        self.field.commit(&mut self.frontier, coord, color)?;
        self.last_assignment = (coord, color);

        if self.frontier.is_empty() {
            self.state = SessionState::Completed;
            return Ok(false);
        }
        Ok(true)
    }

    /// The most recent commit, the sole data pushed outward for rendering
    pub const fn current_assignment(&self) -> (Coord, Color) {
        self.last_assignment
    }

    /// Current lifecycle state
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Number of committed cells
    pub const fn committed_cells(&self) -> usize {
        self.field.set_count()
    }

    /// Number of colors still available in the pool
    pub const fn remaining_colors(&self) -> usize {
        self.pool.remaining()
    }

    /// Total number of cells in the grid
    pub const fn cell_count(&self) -> usize {
        self.field.len()
    }

    /// Read access to the growth field
    pub const fn field(&self) -> &GrowthField {
        &self.field
    }

    /// Read access to the color pool
    pub const fn pool(&self) -> &ColorPool {
        &self.pool
    }

    /// Read access to the frontier queue
    pub const fn frontier(&self) -> &FrontierQueue {
        &self.frontier
    }
}
