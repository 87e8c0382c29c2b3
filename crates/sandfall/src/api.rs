//! Relative-offset API for element update functions.
//!
//! Offsets are `(dr, dc)`: rows grow downward, columns grow rightward.
//! Elements read their own particle by value with `get(0, 0)`, change it,
//! and hand it back through `store` or `swap_with`. Moving rebases the
//! origin, so later offsets are relative to the new cell.

use crate::cell::{Cell, Particle, Species};
use crate::dice::Dice;
use crate::{Grid, TickStats};

#[derive(Debug)]
pub struct SandApi<'a> {
    pub grid: &'a mut Grid,
    pub row: i32,
    pub col: i32,
    pub generation: u32,
    pub stats: &'a mut TickStats,
    /// Corrosion nesting level; 0 for updates started by the scan.
    pub depth: u32,
}

impl<'a> SandApi<'a> {
    pub fn new(
        grid: &'a mut Grid,
        row: i32,
        col: i32,
        generation: u32,
        stats: &'a mut TickStats,
    ) -> Self {
        Self {
            grid,
            row,
            col,
            generation,
            stats,
            depth: 0,
        }
    }

    /// Out-of-bounds and empty cells both read as `None`.
    #[must_use]
    pub fn get(&self, dr: i32, dc: i32) -> Cell {
        self.grid.get(self.row + dr, self.col + dc)
    }

    #[must_use]
    pub fn is_empty(&self, dr: i32, dc: i32) -> bool {
        self.grid.is_empty(self.row + dr, self.col + dc)
    }

    /// In bounds and either empty or holding a low-density particle.
    #[must_use]
    pub fn is_passable(&self, dr: i32, dc: i32) -> bool {
        let (row, col) = (self.row + dr, self.col + dc);
        self.grid.in_bounds(row, col) && self.grid.get(row, col).is_none_or(|p| p.low_density)
    }

    pub fn dice(&mut self) -> &mut dyn Dice {
        self.grid.dice.as_mut()
    }

    /// Mark `me` as having run this generation.
    pub fn bump_age(&mut self, me: &mut Particle) {
        me.age = me.age.wrapping_add(1);
        self.stats.updates += 1;
    }

    /// Write `me` back into the origin cell without moving.
    pub fn store(&mut self, me: Particle) {
        self.grid.set(self.row, self.col, Some(me));
    }

    /// Write `me` back, then exchange the origin with `(dr, dc)`.
    /// Whatever occupied the target ends up in the old origin.
    /// An out-of-bounds target only stores.
    pub fn swap_with(&mut self, dr: i32, dc: i32, me: Particle) -> bool {
        self.store(me);
        let (row, col) = (self.row + dr, self.col + dc);
        if !self.grid.swap(self.row, self.col, row, col) {
            return false;
        }
        self.row = row;
        self.col = col;
        self.stats.moves += 1;
        true
    }

    /// Replace the particle at `(dr, dc)` with a fresh Toxic stamped with
    /// the current generation.
    pub fn convert(&mut self, dr: i32, dc: i32) -> bool {
        let (row, col) = (self.row + dr, self.col + dc);
        if !self.grid.in_bounds(row, col) {
            return false;
        }
        let fresh = Particle::new(Species::Toxic, self.generation, self.grid.dice.as_mut());
        self.grid.set(row, col, Some(fresh));
        self.stats.conversions += 1;
        true
    }

    /// Api rooted at `(dr, dc)`, one corrosion level deeper.
    pub fn neighbour(&mut self, dr: i32, dc: i32) -> SandApi<'_> {
        SandApi {
            grid: &mut *self.grid,
            row: self.row + dr,
            col: self.col + dc,
            generation: self.generation,
            stats: &mut *self.stats,
            depth: self.depth + 1,
        }
    }

    #[must_use]
    pub fn cascade_exhausted(&self) -> bool {
        self.depth >= self.grid.max_cascade_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::FixedDice;
    use proptest::prelude::*;

    fn grid(size: u16) -> Grid {
        Grid::new(size).with_dice(FixedDice::low())
    }

    #[test]
    fn passable_accepts_empty_and_water_only() {
        let mut grid = grid(8);
        grid.place(Species::Water, 4, 3);
        grid.place(Species::Stone, 4, 4);
        grid.place(Species::Sand, 4, 5);
        let mut stats = TickStats::default();
        let api = SandApi::new(&mut grid, 3, 4, 1, &mut stats);
        assert!(api.is_passable(0, 0));
        assert!(api.is_passable(1, -1));
        assert!(!api.is_passable(1, 0));
        assert!(!api.is_passable(1, 1));
        assert!(!api.is_passable(-4, 0));
        assert!(!api.is_empty(1, -1));
    }

    #[test]
    fn swap_with_rebases_origin() {
        let mut grid = grid(8);
        grid.place(Species::Sand, 2, 2);
        let mut stats = TickStats::default();
        let mut api = SandApi::new(&mut grid, 2, 2, 1, &mut stats);
        let Some(mut me) = api.get(0, 0) else {
            panic!("sand missing");
        };
        me.direction = 1;
        assert!(api.swap_with(1, 1, me));
        assert_eq!((api.row, api.col), (3, 3));
        assert_eq!(api.get(0, 0).map(|p| p.direction), Some(1));
        assert!(api.get(-1, -1).is_none());
        assert_eq!(stats.moves, 1);
    }

    #[test]
    fn swap_with_out_of_bounds_only_stores() {
        let mut grid = grid(4);
        grid.place(Species::Sand, 3, 0);
        let mut stats = TickStats::default();
        let mut api = SandApi::new(&mut grid, 3, 0, 1, &mut stats);
        let Some(mut me) = api.get(0, 0) else {
            panic!("sand missing");
        };
        me.velocity = 2.5;
        assert!(!api.swap_with(1, 0, me));
        assert_eq!((api.row, api.col), (3, 0));
        assert_eq!(api.get(0, 0).map(|p| p.velocity), Some(2.5));
    }

    #[test]
    fn convert_stamps_current_generation() {
        let mut grid = grid(4);
        grid.place(Species::Sand, 1, 1);
        let mut stats = TickStats::default();
        let mut api = SandApi::new(&mut grid, 0, 0, 9, &mut stats);
        assert!(api.convert(1, 1));
        let converted = api.get(1, 1);
        assert_eq!(converted.map(|p| p.species), Some(Species::Toxic));
        assert_eq!(converted.map(|p| p.age), Some(9));
        assert!(!api.convert(-1, 0));
        assert_eq!(stats.conversions, 1);
    }

    #[test]
    fn neighbour_goes_one_level_deeper() {
        let mut grid = Grid::new(4);
        let mut stats = TickStats::default();
        let mut api = SandApi::new(&mut grid, 1, 1, 1, &mut stats);
        let inner = api.neighbour(1, -1);
        assert_eq!((inner.row, inner.col, inner.depth), (2, 0, 1));
    }

    // Every relative read outside the grid is empty, never a panic.
    proptest! {
        #[test]
        fn prop_sandapi_out_of_bounds_reads_none(
            row in 0i32..16,
            col in 0i32..16,
            dr in -64i32..64,
            dc in -64i32..64,
        ) {
            let (tr, tc) = (row + dr, col + dc);
            prop_assume!(!(0..16).contains(&tr) || !(0..16).contains(&tc));
            let mut grid = Grid::new(16);
            let mut stats = TickStats::default();
            let api = SandApi::new(&mut grid, row, col, 1, &mut stats);
            prop_assert!(api.get(dr, dc).is_none());
            prop_assert!(!api.is_empty(dr, dc));
            prop_assert!(!api.is_passable(dr, dc));
        }
    }
}
