//! Command-line interface and run orchestration

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::algorithm::{Session, SessionConfig};
use crate::io::configuration::{
    DEFAULT_B_RES, DEFAULT_G_RES, DEFAULT_HEIGHT, DEFAULT_R_RES, DEFAULT_SEED, DEFAULT_WIDTH,
    GIF_FRAME_DELAY_MS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_field_as_png;
use crate::io::progress::ProgressManager;
use crate::io::visualization::FrameCapture;
use crate::spatial::Coord;

/// Command-line arguments for the growth generator
#[derive(Parser)]
#[command(name = "chromagrow")]
#[command(
    author,
    version,
    about = "Grow a full-spectrum image outward from a seed pixel"
)]
pub struct Cli {
    /// Output PNG path
    #[arg(value_name = "OUTPUT", default_value = "growth.png")]
    pub output: PathBuf,

    /// Image width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Image height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Red channel resolution (width * height must equal red * green * blue)
    #[arg(short = 'r', long = "red", default_value_t = DEFAULT_R_RES)]
    pub r_res: u16,

    /// Green channel resolution
    #[arg(short = 'g', long = "green", default_value_t = DEFAULT_G_RES)]
    pub g_res: u16,

    /// Blue channel resolution
    #[arg(short = 'b', long = "blue", default_value_t = DEFAULT_B_RES)]
    pub b_res: u16,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Seed cell x position (defaults to the grid center)
    #[arg(long, requires = "seed_y")]
    pub seed_x: Option<i32>,

    /// Seed cell y position (defaults to the grid center)
    #[arg(long, requires = "seed_x")]
    pub seed_y: Option<i32>,

    /// Export an animated GIF of the growth alongside the PNG
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    const fn session_config(&self) -> SessionConfig {
        let seed_coord = match (self.seed_x, self.seed_y) {
            (Some(x), Some(y)) => Some(Coord::new(x, y)),
            _ => None,
        };
        SessionConfig {
            width: self.width,
            height: self.height,
            r_res: self.r_res,
            g_res: self.g_res,
            b_res: self.b_res,
            seed: self.seed,
            seed_coord,
            seed_color: None,
        }
    }
}

/// Orchestrates a complete growth run with progress and export
pub struct GrowthRunner {
    cli: Cli,
}

impl GrowthRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the session to completion and export its artifacts
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, a growth step, or an
    /// export operation fails.
    pub fn run(&mut self) -> Result<()> {
        let config = self.cli.session_config();
        let mut session = Session::new(config)?;

        let mut progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(session.cell_count()));

        let mut capture = self
            .cli
            .visualize
            .then(|| FrameCapture::new(self.cli.width, self.cli.height));

        // The seed commit happened inside Session::new.
        Self::record_assignment(&session, capture.as_mut());

        loop {
            let more = session.step()?;
            if session.committed_cells() > capture.as_ref().map_or(1, FrameCapture::commit_count) {
                Self::record_assignment(&session, capture.as_mut());
            }
            if let Some(ref mut bar) = progress {
                bar.update(session.committed_cells());
            }
            if !more {
                break;
            }
        }

        if let Some(ref bar) = progress {
            bar.finish();
        }

        let output = self
            .cli
            .output
            .to_str()
            .ok_or_else(|| invalid_parameter("output", &self.cli.output.display(), &"Output path is not valid UTF-8"))?;
        export_field_as_png(session.field(), session.pool().cube(), output)?;

        if let Some(capture) = capture {
            let gif_path = Self::visualization_path(&self.cli.output);
            let gif = gif_path.to_str().ok_or_else(|| {
                invalid_parameter(
                    "output",
                    &gif_path.display(),
                    &"Visualization path is not valid UTF-8",
                )
            })?;
            capture.export_gif(gif, GIF_FRAME_DELAY_MS)?;
        }

        Ok(())
    }

    fn record_assignment(session: &Session, capture: Option<&mut FrameCapture>) {
        if let Some(capture) = capture {
            let (coord, color) = session.current_assignment();
            capture.record_commit(coord, session.pool().cube().display_rgba(color));
        }
    }

    fn visualization_path(output: &Path) -> PathBuf {
        let stem = output.file_stem().unwrap_or_default();
        output.with_file_name(format!("{}_growth.gif", stem.to_string_lossy()))
    }
}
