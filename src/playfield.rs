//! Playfield grid model and geometry.
//!
//! The playfield is a grid of fixed-size blocks derived once from the display
//! dimensions: a score bar is reserved at the top, the remaining area is
//! trimmed until the bordered interior is an exact multiple of the block
//! size, and the result is centered horizontally. Cell state lives in a flat
//! mapping from linear cell index to [`Cell`].

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{BLOCK_SIZE, COIN_SIZE, SCORE_BAR_HEIGHT};
use crate::input::Direction;

/// State of one playfield cell.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Cell {
    #[default]
    Empty,
    Snake,
    Coin,
}

/// The playfield: outer rectangle (including the 1px border), block counts
/// and the flat cell-state mapping. Immutable geometry after construction.
pub struct Playfield {
    /// Outer playfield rectangle, border included.
    pub area: Rectangle,
    /// Blocks per row.
    pub cols: usize,
    /// Rows of blocks.
    pub rows: usize,
    cells: Box<[Cell]>,
}

impl Playfield {
    /// Derive the playfield from the display dimensions.
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        let mut y = SCORE_BAR_HEIGHT;
        let mut h = screen_height - SCORE_BAR_HEIGHT;

        // Shrink from the top until the interior (minus the 2px of border)
        // divides evenly into blocks, then do the same for the width.
        while (h - 2) % BLOCK_SIZE != 0 {
            y += 1;
            h -= 1;
        }
        let mut w = screen_width;
        while (w - 2) % BLOCK_SIZE != 0 {
            w -= 1;
        }
        let x = (screen_width - w) / 2;

        let cols = ((w - 2) / BLOCK_SIZE) as usize;
        let rows = ((h - 2) / BLOCK_SIZE) as usize;

        Self {
            area: Rectangle::new(Point::new(x as i32, y as i32), Size::new(w, h)),
            cols,
            rows,
            cells: vec![Cell::Empty; cols * rows].into_boxed_slice(),
        }
    }

    /// Total number of cells.
    pub fn total(&self) -> usize {
        self.cols * self.rows
    }

    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Cell index one block away in `dir`, or `None` when the move would
    /// leave the grid. `Direction::None` holds the index in place.
    pub fn neighbor(&self, index: usize, dir: Direction) -> Option<usize> {
        match dir {
            Direction::Left => {
                if index % self.cols == 0 {
                    None
                } else {
                    Some(index - 1)
                }
            }
            Direction::Right => {
                if index % self.cols == self.cols - 1 {
                    None
                } else {
                    Some(index + 1)
                }
            }
            Direction::Up => {
                if index / self.cols == 0 {
                    None
                } else {
                    Some(index - self.cols)
                }
            }
            Direction::Down => {
                if index / self.cols == self.rows - 1 {
                    None
                } else {
                    Some(index + self.cols)
                }
            }
            Direction::None => Some(index),
        }
    }

    /// Pixel rectangle of the block at `index`, inset past the border.
    pub fn block_rect(&self, index: usize) -> Rectangle {
        let col = (index % self.cols) as i32;
        let row = (index / self.cols) as i32;
        Rectangle::new(
            Point::new(
                col * BLOCK_SIZE as i32 + self.area.top_left.x + 1,
                row * BLOCK_SIZE as i32 + self.area.top_left.y + 1,
            ),
            Size::new(BLOCK_SIZE, BLOCK_SIZE),
        )
    }

    /// Pixel rectangle of the coin marker at `index`, centered in its block.
    pub fn coin_rect(&self, index: usize) -> Rectangle {
        let block = self.block_rect(index);
        Rectangle::new(block.top_left + Point::new(1, 1), Size::new(COIN_SIZE, COIN_SIZE))
    }

    /// Index of the `rank`-th empty cell in a single linear pass, or `None`
    /// when fewer than `rank + 1` cells are empty.
    pub fn nth_empty(&self, rank: usize) -> Option<usize> {
        let mut seen = 0;
        for (index, cell) in self.cells.iter().enumerate() {
            if *cell == Cell::Empty {
                if seen == rank {
                    return Some(index);
                }
                seen += 1;
            }
        }
        None
    }

    /// Number of cells currently in `state`. Linear scan, used by tests and
    /// assertions rather than the per-tick path.
    pub fn count_of(&self, state: Cell) -> usize {
        self.cells.iter().filter(|c| **c == state).count()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
