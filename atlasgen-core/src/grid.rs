//! Cell grid: maps logical (col, row) cells to pixel origins.

use crate::error::{AtlasError, Result};
use glam::IVec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub col: u32,
    pub row: u32,
}

impl CellCoord {
    pub const fn new(col: u32, row: u32) -> Self { Self { col, row } }
}

/// Square cells laid out in `columns x rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGrid {
    pub cell_size: u32,
    pub columns: u32,
    pub rows: u32,
}

impl CellGrid {
    pub fn new(cell_size: u32, columns: u32, rows: u32) -> Result<Self> {
        if cell_size == 0 || columns == 0 || rows == 0 {
            return Err(AtlasError::InvalidGrid(format!(
                "cell_size, columns and rows must be non-zero (got {cell_size}, {columns}, {rows})"
            )));
        }
        let limit = i32::MAX as u64;
        if cell_size as u64 * columns as u64 > limit || cell_size as u64 * rows as u64 > limit {
            return Err(AtlasError::InvalidGrid(format!(
                "{columns}x{rows} cells of {cell_size}px overflow the pixel range"
            )));
        }
        Ok(Self { cell_size, columns, rows })
    }

    pub fn width(&self) -> u32 { self.columns * self.cell_size }
    pub fn height(&self) -> u32 { self.rows * self.cell_size }

    pub fn contains(&self, cell: CellCoord) -> bool {
        cell.col < self.columns && cell.row < self.rows
    }

    /// Top-left pixel of a cell: `(col * cell_size, row * cell_size)`.
    pub fn origin(&self, cell: CellCoord) -> Result<IVec2> {
        self.check(cell)?;
        let px = |i: u32| {
            i32::try_from(i as i64 * self.cell_size as i64).map_err(|_| {
                AtlasError::InvalidGrid(format!("cell ({}, {}) lies beyond the pixel range", cell.col, cell.row))
            })
        };
        Ok(IVec2::new(px(cell.col)?, px(cell.row)?))
    }

    /// Row-major cell for a linear index; `None` past the last cell.
    pub fn cell_at(&self, index: u32) -> Option<CellCoord> {
        let col = index.checked_rem(self.columns)?;
        let cell = CellCoord::new(col, index / self.columns);
        self.contains(cell).then_some(cell)
    }

    pub fn check(&self, cell: CellCoord) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(AtlasError::CellOutOfGrid {
                col: cell.col,
                row: cell.row,
                columns: self.columns,
                rows: self.rows,
            })
        }
    }

    /// Normalized texture offset and scale of a cell, as sampled by the game's sprite shader.
    pub fn uv_rect(&self, cell: CellCoord) -> ([f32; 2], [f32; 2]) {
        let su = 1.0 / self.columns as f32;
        let sv = 1.0 / self.rows as f32;
        ([cell.col as f32 * su, cell.row as f32 * sv], [su, sv])
    }
}
