//! Error type for grid construction and bulk reads.
//!
//! Simulation commands never fail; they report "no effect" through their
//! return values. Only configuration and caller-supplied buffers can be wrong.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Grid side length is zero or does not fit signed cell coordinates.
    #[error("invalid grid size: {0}")]
    InvalidSize(usize),

    /// Brush half-width must be at least 1.
    #[error("invalid brush radius: {0}")]
    InvalidBrush(i32),

    /// A zero cascade depth would disable corrosion entirely.
    #[error("max cascade depth must be at least 1")]
    InvalidCascadeDepth,

    /// Output buffer cannot hold one RGBA pixel per cell.
    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
}
