//! WASM-facing command surface.
//!
//! The host translates pointer and key input into `paint`/`erase_brush`
//! calls, calls `step` once per frame, and blits the RGBA frame buffer.
//! Species travel as `u8` ids (see [`Species`]) and colors as `0xRRGGBB`.

use wasm_bindgen::prelude::*;

use crate::cell::{Rgb, Species};
use crate::config::Config;
use crate::{brush_cells, Grid};

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
    frame: Vec<u8>,
}

#[wasm_bindgen]
impl Universe {
    /// # Errors
    /// Rejects a zero or oversized `size`.
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize, seed: u64) -> Result<Universe, JsError> {
        let config = Config::default().with_size(size).with_seed(seed);
        let grid = Grid::with_config(config)?;
        Ok(Self::from_grid(grid))
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[must_use]
    pub fn generation(&self) -> u32 {
        self.grid.generation
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.grid.particle_count()
    }

    /// Species id bound to a host key (S, C, W, T), or 0 for any other
    /// key, the eraser `E` included.
    #[must_use]
    pub fn species_for_key(key: char) -> u8 {
        Species::from_key(key).map_or(0, |s| s as u8)
    }

    /// Unknown species ids are ignored.
    pub fn place(&mut self, species: u8, row: i32, col: i32) -> bool {
        let placed = Species::from_id(species).is_some_and(|s| self.grid.place(s, row, col));
        if placed {
            self.sync_pixel(row, col);
        }
        placed
    }

    pub fn paint(&mut self, species: u8, row: i32, col: i32) -> usize {
        let Some(species) = Species::from_id(species) else {
            return 0;
        };
        let placed = self.grid.paint(species, row, col);
        if placed > 0 {
            self.sync_brush(row, col);
        }
        placed
    }

    pub fn erase(&mut self, row: i32, col: i32) -> bool {
        let erased = self.grid.erase(row, col);
        if erased {
            self.sync_pixel(row, col);
        }
        erased
    }

    pub fn erase_brush(&mut self, row: i32, col: i32) -> usize {
        let erased = self.grid.erase_brush(row, col);
        if erased > 0 {
            self.sync_brush(row, col);
        }
        erased
    }

    pub fn clear_all(&mut self) -> usize {
        let erased = self.grid.clear_all();
        self.sync_frame();
        erased
    }

    /// Advance one generation and refresh the frame. Returns the number of
    /// particle updates that ran.
    pub fn step(&mut self) -> u32 {
        let stats = self.grid.step();
        self.sync_frame();
        stats.updates
    }

    /// `0xRRGGBB`, or -1 for an empty or out-of-bounds cell.
    #[must_use]
    pub fn color_at(&self, row: i32, col: i32) -> i32 {
        self.grid
            .color_at(row, col)
            .map_or(-1, |c| c.packed() as i32)
    }

    /// Pointer to the RGBA frame, `size * size * 4` bytes.
    #[must_use]
    pub fn frame_ptr(&self) -> *const u8 {
        self.frame.as_ptr()
    }

    #[must_use]
    pub fn frame_len(&self) -> usize {
        self.frame.len()
    }
}

impl Universe {
    /// Wrap an existing grid, e.g. one with custom dice.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        let mut universe = Self {
            frame: vec![0; grid.cells.len() * 4],
            grid,
        };
        universe.sync_frame();
        universe
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    fn sync_frame(&mut self) {
        if let Err(err) = self.grid.write_rgba(&mut self.frame) {
            log::warn!("frame sync failed: {err}");
        }
    }

    /// Refresh the one frame pixel behind `(row, col)`.
    fn sync_pixel(&mut self, row: i32, col: i32) {
        if !self.grid.in_bounds(row, col) {
            return;
        }
        let i = (row as usize * self.grid.size() + col as usize) * 4;
        let Rgb { r, g, b } = self.grid.color_at(row, col).unwrap_or_default();
        if let Some(px) = self.frame.get_mut(i..i + 4) {
            px.copy_from_slice(&[r, g, b, u8::MAX]);
        }
    }

    fn sync_brush(&mut self, row: i32, col: i32) {
        for (r, c) in brush_cells(self.grid.brush(), row, col) {
            self.sync_pixel(r, c);
        }
    }
}
