//! Atlas composition: resolve each placement to a cell origin, draw the sprite,
//! and hand back one finished canvas ready for persistence.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::export::AtlasMeta;
use crate::grid::CellGrid;
use crate::layout::{AtlasLayout, Placement};
use crate::persist;
use crate::sprites::SpriteLibrary;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ComposedAtlas {
    grid: CellGrid,
    canvas: Canvas,
    placements: Vec<Placement>,
}

/// Compose a layout using the built-in sprites plus any the layout defines.
pub fn compose(layout: &AtlasLayout) -> Result<ComposedAtlas> {
    let mut library = SpriteLibrary::builtin();
    for sprite in &layout.sprites {
        library.insert(sprite.clone());
    }
    compose_with(layout, &library)
}

/// Compose a layout against an explicit sprite library.
///
/// Each sprite is drawn into its own cell-sized canvas first, so a sprite that
/// reaches past its cell fails the whole run instead of bleeding into a
/// neighbour. Nothing is written to disk here.
pub fn compose_with(layout: &AtlasLayout, library: &SpriteLibrary) -> Result<ComposedAtlas> {
    let grid = layout.grid()?;
    let mut canvas = Canvas::new(grid.width(), grid.height());

    for placement in &layout.cells {
        let sprite = library.get(&placement.sprite)?;
        let cell = sprite.render_cell(grid.cell_size)?;
        let origin = grid.origin(placement.cell())?;
        canvas.blit(&cell, origin.x, origin.y);
        log::debug!("drew '{}' at cell ({}, {}) origin {origin}", sprite.name, placement.col, placement.row);
    }

    log::info!("composed {}x{} atlas with {} sprite(s)", canvas.width(), canvas.height(), layout.cells.len());
    Ok(ComposedAtlas { grid, canvas, placements: layout.cells.clone() })
}

impl ComposedAtlas {
    pub fn grid(&self) -> &CellGrid { &self.grid }
    pub fn canvas(&self) -> &Canvas { &self.canvas }
    pub fn into_canvas(self) -> Canvas { self.canvas }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.canvas.encode_png()
    }

    /// Encode the whole atlas in memory, then persist it in one step.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        persist::write_atomic(path, &bytes)
    }

    pub fn meta(&self) -> Result<AtlasMeta> {
        AtlasMeta::describe(&self.grid, &self.placements)
    }
}
