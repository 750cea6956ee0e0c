//! Core growth machinery
//!
//! This module contains the three collaborators of the growth loop:
//! - The frontier queue of cells eligible to be colored next
//! - The color pool octree with branch-and-bound nearest search
//! - The session driving them one atomic step at a time

/// Pending-cell set with O(1) removal and uniform random selection
pub mod frontier;
/// Self-collapsing octree over the available color cube
pub mod pool;
/// Growth session configuration and step loop
pub mod session;

pub use frontier::FrontierQueue;
pub use pool::ColorPool;
pub use session::{Session, SessionConfig, SessionState};
