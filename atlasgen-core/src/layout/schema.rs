use crate::error::{AtlasError, Result};
use crate::grid::{CellCoord, CellGrid};
use crate::sprites::SpriteDef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_CELL_SIZE: u32 = 64;

/// Atlas manifest: grid parameters, the ordered cell registry, and optional
/// extra sprite art.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasLayout {
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    /// Derived from the highest referenced column when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    /// Derived from the highest referenced row when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    /// Drawn in list order.
    pub cells: Vec<Placement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sprites: Vec<SpriteDef>,
}

fn default_cell_size() -> u32 { DEFAULT_CELL_SIZE }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub sprite: String,
    pub col: u32,
    pub row: u32,
}

impl Placement {
    pub fn new(sprite: &str, col: u32, row: u32) -> Self {
        Self { sprite: sprite.to_string(), col, row }
    }

    pub fn cell(&self) -> CellCoord { CellCoord::new(self.col, self.row) }
}

impl AtlasLayout {
    pub fn new(cell_size: u32, columns: u32, rows: u32, cells: Vec<Placement>) -> Self {
        Self { cell_size, columns: Some(columns), rows: Some(rows), cells, sprites: Vec::new() }
    }

    /// The compact 2x2 sheet: 128x128 with the four core sprites.
    pub fn classic() -> Self {
        Self::new(DEFAULT_CELL_SIZE, 2, 2, vec![
            Placement::new("player", 0, 0),
            Placement::new("blob", 1, 0),
            Placement::new("skeleton", 0, 1),
            Placement::new("crystal", 1, 1),
        ])
    }

    /// The 4x4 sheet the game samples with a uv scale of 0.25.
    pub fn game() -> Self {
        Self::new(DEFAULT_CELL_SIZE, 4, 4, vec![
            Placement::new("player", 0, 0),
            Placement::new("blob", 1, 0),
            Placement::new("skeleton", 2, 0),
            Placement::new("crystal", 3, 0),
            Placement::new("health_gem", 0, 1),
            Placement::new("piercing_gem", 1, 1),
            Placement::new("blob_corpse", 2, 1),
            Placement::new("skeleton_corpse", 3, 1),
            Placement::new("sword", 0, 2),
            Placement::new("axe", 1, 2),
            Placement::new("slash", 2, 2),
            Placement::new("grass", 0, 3),
            Placement::new("dirt", 1, 3),
        ])
    }

    /// Named preset lookup (`classic` or `game`).
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "game" => Some(Self::game()),
            _ => None,
        }
    }

    /// Resolve the grid and check that every placement fits and no cell is
    /// claimed twice.
    pub fn grid(&self) -> Result<CellGrid> {
        let max_col = self.cells.iter().map(|p| p.col.saturating_add(1)).max().unwrap_or(1);
        let max_row = self.cells.iter().map(|p| p.row.saturating_add(1)).max().unwrap_or(1);
        let grid = CellGrid::new(
            self.cell_size,
            self.columns.unwrap_or(max_col),
            self.rows.unwrap_or(max_row),
        )?;

        let mut seen = BTreeSet::new();
        for p in &self.cells {
            grid.check(p.cell())?;
            if !seen.insert(p.cell()) {
                return Err(AtlasError::DuplicateCell { col: p.col, row: p.row });
            }
        }
        Ok(grid)
    }
}
