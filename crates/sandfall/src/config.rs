//! Grid construction parameters.

use crate::error::{Error, Result};

/// Side length of the square grid used by the desktop host.
pub const DEFAULT_SIZE: usize = 480;

/// Half-width of the placement brush: a brush of `n` covers `2n × 2n` cells.
pub const DEFAULT_BRUSH: i32 = 1;

pub const DEFAULT_SEED: u64 = 0x5EED_5A4D;

/// Corrosion chains deeper than this stop converting for the rest of the
/// generation. Each link succeeds with at most a 10% chance, so real chains
/// are far shorter.
pub const DEFAULT_MAX_CASCADE_DEPTH: u32 = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub brush: i32,
    pub seed: u64,
    pub max_cascade_depth: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            brush: DEFAULT_BRUSH,
            seed: DEFAULT_SEED,
            max_cascade_depth: DEFAULT_MAX_CASCADE_DEPTH,
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_brush(mut self, brush: i32) -> Self {
        self.brush = brush;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_max_cascade_depth(mut self, depth: u32) -> Self {
        self.max_cascade_depth = depth;
        self
    }

    /// Reject values the grid cannot work with.
    ///
    /// # Errors
    /// Returns the first offending field as an [`Error`] variant.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || i32::try_from(self.size).is_err() {
            return Err(Error::InvalidSize(self.size));
        }
        if self.brush < 1 {
            return Err(Error::InvalidBrush(self.brush));
        }
        if self.max_cascade_depth == 0 {
            return Err(Error::InvalidCascadeDepth);
        }
        Ok(())
    }
}
