//! Atlas metadata (JSON) describing where each sprite lives.

use crate::error::Result;
use crate::grid::CellGrid;
use crate::layout::Placement;
use crate::persist;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasMeta {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub cols: u32,
    pub rows: u32,
    pub frames: u32,
    pub sprites: Vec<SpriteMeta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteMeta {
    pub name: String,
    pub col: u32,
    pub row: u32,
    /// x, y, w, h in pixels
    pub px: [u32; 4],
    pub uv_offset: [f32; 2],
    pub uv_scale: [f32; 2],
}

impl AtlasMeta {
    pub fn describe(grid: &CellGrid, placements: &[Placement]) -> Result<Self> {
        let sprites = placements
            .iter()
            .map(|p| {
                let origin = grid.origin(p.cell())?;
                let (uv_offset, uv_scale) = grid.uv_rect(p.cell());
                Ok(SpriteMeta {
                    name: p.sprite.clone(),
                    col: p.col,
                    row: p.row,
                    px: [origin.x as u32, origin.y as u32, grid.cell_size, grid.cell_size],
                    uv_offset,
                    uv_scale,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            width: grid.width(),
            height: grid.height(),
            cell_size: grid.cell_size,
            cols: grid.columns,
            rows: grid.rows,
            frames: sprites.len() as u32,
            sprites,
        })
    }

    pub fn sprite(&self, name: &str) -> Option<&SpriteMeta> {
        self.sprites.iter().find(|s| s.name == name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        persist::write_atomic(path, self.to_json()?.as_bytes())
    }
}
