//! Falling sand cellular automaton: sand, stone, water and toxic particles on
//! a square grid, advanced one generation per [`Grid::step`].

pub mod api;
pub mod cell;
pub mod config;
pub mod dice;
pub mod elements;
pub mod error;
pub mod universe;

use cell::{Cell, Particle, Rgb, Species};
use config::Config;
use dice::{Dice, SeededDice};
use error::{Error, Result};

pub use universe::Universe;

/// Counters for one generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Particle updates that ran (stone excluded).
    pub updates: u32,
    /// Successful swaps.
    pub moves: u32,
    /// Particles turned into toxic.
    pub conversions: u32,
    /// Corrosions skipped because the cascade hit its depth cap.
    pub cascade_cutoffs: u32,
}

/// Square grid of cells. Out-of-bounds reads are empty, writes are no-ops.
#[derive(Debug)]
pub struct Grid {
    size: usize,
    pub cells: Vec<Cell>,
    /// Stamp of the generation the next `step` runs. Particles created now
    /// carry it; particles that ran this generation carry `generation + 1`.
    pub generation: u32,
    brush: i32,
    pub(crate) max_cascade_depth: u32,
    pub(crate) dice: Box<dyn Dice>,
}

impl Grid {
    /// Grid of side `size` with the default brush, seed and cascade cap.
    /// Every `u16` side passes [`Config::validate`]; larger grids go
    /// through [`Grid::with_config`].
    #[must_use]
    pub fn new(size: u16) -> Self {
        Self::build(Config::default().with_size(usize::from(size)))
    }

    /// # Errors
    /// Returns the validation error for a bad [`Config`].
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        log::debug!(
            "creating {size}x{size} grid (seed {seed:#x}, cascade cap {cap})",
            size = config.size,
            seed = config.seed,
            cap = config.max_cascade_depth,
        );
        Self {
            size: config.size,
            cells: vec![None; config.size * config.size],
            generation: 1,
            brush: config.brush,
            max_cascade_depth: config.max_cascade_depth,
            dice: Box::new(SeededDice::new(config.seed)),
        }
    }

    /// Replace the random source.
    #[must_use]
    pub fn with_dice(mut self, dice: impl Dice + 'static) -> Self {
        self.dice = Box::new(dice);
        self
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Brush half-width used by [`Grid::paint`] and [`Grid::erase_brush`].
    #[must_use]
    pub fn brush(&self) -> i32 {
        self.brush
    }

    #[must_use]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.size && col >= 0 && (col as usize) < self.size
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        self.in_bounds(row, col)
            .then(|| row as usize * self.size + col as usize)
    }

    #[must_use]
    pub fn get(&self, row: i32, col: i32) -> Cell {
        self.index(row, col).and_then(|i| self.cells[i])
    }

    /// Overwrite a cell, dropping any previous occupant.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = cell;
        }
    }

    /// In bounds and unoccupied.
    #[must_use]
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some_and(|i| self.cells[i].is_none())
    }

    /// Exchange two cells. Both must be in bounds.
    pub fn swap(&mut self, r1: i32, c1: i32, r2: i32, c2: i32) -> bool {
        match (self.index(r1, c1), self.index(r2, c2)) {
            (Some(a), Some(b)) => {
                self.cells.swap(a, b);
                true
            }
            _ => false,
        }
    }

    /// Create a particle in an empty in-bounds cell.
    pub fn place(&mut self, species: Species, row: i32, col: i32) -> bool {
        let Some(i) = self.index(row, col) else {
            return false;
        };
        if self.cells[i].is_some() {
            return false;
        }
        self.cells[i] = Some(Particle::new(species, self.generation, self.dice.as_mut()));
        true
    }

    pub fn erase(&mut self, row: i32, col: i32) -> bool {
        match self.index(row, col) {
            Some(i) => self.cells[i].take().is_some(),
            None => false,
        }
    }

    /// Erase every particle, bottom row first. Returns how many were removed.
    pub fn clear_all(&mut self) -> usize {
        let n = self.size as i32;
        let mut erased = 0;
        for row in (0..n).rev() {
            for col in 0..n {
                if self.erase(row, col) {
                    erased += 1;
                }
            }
        }
        log::debug!("cleared {erased} particles");
        erased
    }

    /// Brush placement: the `2·brush` square whose lower-right quadrant
    /// starts at `(row, col)`. Occupied cells are left alone.
    pub fn paint(&mut self, species: Species, row: i32, col: i32) -> usize {
        let placed = brush_cells(self.brush, row, col)
            .filter(|&(r, c)| self.place(species, r, c))
            .count();
        if placed == 0 && !self.brush_touches_grid(row, col) {
            log::warn!("paint at ({row}, {col}) is outside the grid");
        }
        placed
    }

    /// Erase under the brush.
    pub fn erase_brush(&mut self, row: i32, col: i32) -> usize {
        let erased = brush_cells(self.brush, row, col)
            .filter(|&(r, c)| self.erase(r, c))
            .count();
        if erased == 0 && !self.brush_touches_grid(row, col) {
            log::warn!("erase at ({row}, {col}) is outside the grid");
        }
        erased
    }

    fn brush_touches_grid(&self, row: i32, col: i32) -> bool {
        brush_cells(self.brush, row, col).any(|(r, c)| self.in_bounds(r, c))
    }

    #[must_use]
    pub fn color_at(&self, row: i32, col: i32) -> Option<Rgb> {
        self.get(row, col).map(|p| p.color)
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Fill `out` with one RGBA pixel per cell, row-major. Empty cells are
    /// opaque black.
    ///
    /// # Errors
    /// [`Error::BufferTooSmall`] if `out` holds fewer than `size² · 4` bytes.
    pub fn write_rgba(&self, out: &mut [u8]) -> Result<()> {
        let needed = self.cells.len() * 4;
        if out.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                got: out.len(),
            });
        }
        for (cell, px) in self.cells.iter().zip(out.chunks_exact_mut(4)) {
            let Rgb { r, g, b } = cell.map(|p| p.color).unwrap_or_default();
            px.copy_from_slice(&[r, g, b, u8::MAX]);
        }
        Ok(())
    }

    /// Advance the simulation by one generation.
    ///
    /// Scans rows bottom-to-top (row 0 is never scanned), columns
    /// left-to-right. Only particles whose age equals the current stamp
    /// run; each update bumps its own age so it cannot run twice.
    pub fn step(&mut self) -> TickStats {
        let stamp = self.generation;
        let n = self.size as i32;
        let mut stats = TickStats::default();

        for row in (1..n).rev() {
            for col in 0..n {
                let Some(particle) = self.get(row, col) else {
                    continue;
                };
                if particle.age != stamp {
                    continue;
                }
                let mut api = api::SandApi::new(self, row, col, stamp, &mut stats);
                elements::update_cell(particle.species, &mut api);
            }
        }

        self.generation = stamp.wrapping_add(1);
        log::trace!("generation {stamp}: {stats:?}");
        stats
    }
}

/// Cells `(row + i, col + j)` for `i, j` in `[-brush, brush)`. Offsets that
/// overflow `i32` are dropped; they could never be in bounds.
pub(crate) fn brush_cells(brush: i32, row: i32, col: i32) -> impl Iterator<Item = (i32, i32)> {
    (-brush..brush)
        .filter_map(move |i| row.checked_add(i))
        .flat_map(move |r| {
            (-brush..brush).filter_map(move |j| col.checked_add(j).map(|c| (r, c)))
        })
}
