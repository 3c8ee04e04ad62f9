//! Bitmap font atlas: printable ASCII rasterized into a grid of small cells.
//!
//! Glyph shapes come from a [`GlyphSource`]; [`FontdueGlyphs`] backs it with a
//! TrueType font picked from a fallback chain.

use crate::canvas::{Canvas, Color};
use crate::error::{AtlasError, Result};
use crate::grid::{CellCoord, CellGrid};
use std::path::{Path, PathBuf};

/// Coverage bitmap for one glyph, positioned relative to the pen and baseline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    /// Horizontal offset from the pen to the bitmap's left edge.
    pub xmin: i32,
    /// Offset from the baseline up to the bitmap's bottom edge.
    pub ymin: i32,
    pub coverage: Vec<u8>,
}

/// Text rendering capability used to fill the atlas.
pub trait GlyphSource {
    /// Distance from the top of a line to the baseline, in pixels.
    fn ascent(&self) -> f32;
    fn rasterize(&self, ch: char) -> GlyphBitmap;
}

pub struct FontdueGlyphs {
    font: fontdue::Font,
    px: f32,
}

impl FontdueGlyphs {
    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| AtlasError::Font(e.to_string()))?;
        Ok(Self { font, px })
    }

    /// Load the first font in `chain` that can be read and parsed.
    pub fn load_first<P: AsRef<Path>>(chain: &[P], px: f32) -> Result<Self> {
        for path in chain {
            let path = path.as_ref();
            let loaded = std::fs::read(path)
                .map_err(|e| e.to_string())
                .and_then(|bytes| Self::from_bytes(&bytes, px).map_err(|e| e.to_string()));
            match loaded {
                Ok(glyphs) => {
                    log::info!("using font {}", path.display());
                    return Ok(glyphs);
                }
                Err(e) => log::warn!("skipping font {}: {e}", path.display()),
            }
        }
        Err(AtlasError::Font(format!("no usable font among {} candidate(s)", chain.len())))
    }
}

impl GlyphSource for FontdueGlyphs {
    fn ascent(&self) -> f32 {
        self.font.horizontal_line_metrics(self.px).map(|m| m.ascent).unwrap_or(self.px)
    }

    fn rasterize(&self, ch: char) -> GlyphBitmap {
        let (m, coverage) = self.font.rasterize(ch, self.px);
        GlyphBitmap { width: m.width, height: m.height, xmin: m.xmin, ymin: m.ymin, coverage }
    }
}

/// Default fallback chain, tried in order.
pub fn default_font_chain() -> Vec<PathBuf> {
    vec![
        PathBuf::from("consola.ttf"),
        PathBuf::from("cour.ttf"),
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontAtlasConfig {
    pub cell_size: u32,
    pub columns: u32,
    pub rows: u32,
    pub first_code: u32,
    pub last_code: u32,
    /// Pen position inside each cell.
    pub pad: (i32, i32),
    pub color: [u8; 3],
}

impl Default for FontAtlasConfig {
    fn default() -> Self {
        Self { cell_size: 16, columns: 16, rows: 16, first_code: 32, last_code: 127, pad: (2, 1), color: [255, 255, 255] }
    }
}

impl FontAtlasConfig {
    pub fn grid(&self) -> Result<CellGrid> {
        CellGrid::new(self.cell_size, self.columns, self.rows)
    }

    /// Cell for a character code: `i = code - first`, `col = i % columns`, `row = i / columns`.
    /// `None` for codes outside the range or past the last cell.
    pub fn cell_for(&self, code: u32) -> Option<CellCoord> {
        if !(self.first_code..=self.last_code).contains(&code) {
            return None;
        }
        self.grid().ok()?.cell_at(code - self.first_code)
    }
}

/// Rasterize every configured character into its cell. Coverage becomes alpha;
/// glyph pixels that would leave their cell are clipped.
pub fn compose_font_atlas(source: &dyn GlyphSource, cfg: &FontAtlasConfig) -> Result<Canvas> {
    let grid = cfg.grid()?;
    let mut canvas = Canvas::new(grid.width(), grid.height());
    let ascent = source.ascent().round() as i32;
    let [r, g, b] = cfg.color;
    let size = cfg.cell_size as i32;

    for code in cfg.first_code..=cfg.last_code {
        let (Some(cell), Some(ch)) = (cfg.cell_for(code), char::from_u32(code)) else { continue };
        let glyph = source.rasterize(ch);
        let origin = grid.origin(cell)?;
        let left = cfg.pad.0 + glyph.xmin;
        let top = cfg.pad.1 + ascent - glyph.ymin - glyph.height as i32;

        for gy in 0..glyph.height {
            for gx in 0..glyph.width {
                let alpha = glyph.coverage[gy * glyph.width + gx];
                let (cx, cy) = (left + gx as i32, top + gy as i32);
                if alpha == 0 || !(0..size).contains(&cx) || !(0..size).contains(&cy) {
                    continue;
                }
                let color: Color = [r, g, b, alpha];
                canvas.set_pixel(origin.x + cx, origin.y + cy, color);
            }
        }
    }
    log::info!("composed {}x{} font atlas", canvas.width(), canvas.height());
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::TRANSPARENT;

    /// Solid 4x6 block for every glyph except space, sitting on the baseline.
    struct BlockGlyphs;

    impl GlyphSource for BlockGlyphs {
        fn ascent(&self) -> f32 { 10.0 }
        fn rasterize(&self, ch: char) -> GlyphBitmap {
            if ch == ' ' {
                return GlyphBitmap::default();
            }
            GlyphBitmap { width: 4, height: 6, xmin: 0, ymin: 0, coverage: vec![200; 24] }
        }
    }

    /// Oversized glyph that would spill into neighbouring cells.
    struct HugeGlyphs;

    impl GlyphSource for HugeGlyphs {
        fn ascent(&self) -> f32 { 10.0 }
        fn rasterize(&self, _: char) -> GlyphBitmap {
            GlyphBitmap { width: 40, height: 40, xmin: -10, ymin: -20, coverage: vec![255; 1600] }
        }
    }

    #[test]
    fn ascii_codes_map_row_major_from_space() {
        let cfg = FontAtlasConfig::default();
        assert_eq!(cfg.cell_for(32), Some(CellCoord::new(0, 0)));
        assert_eq!(cfg.cell_for('A' as u32), Some(CellCoord::new(1, 2)));
        assert_eq!(cfg.cell_for(127), Some(CellCoord::new(15, 5)));
        assert_eq!(cfg.cell_for(31), None);
        assert_eq!(cfg.cell_for(128), None);
    }

    #[test]
    fn degenerate_config_maps_nothing_and_fails_to_compose() {
        let cfg = FontAtlasConfig { columns: 0, ..Default::default() };
        assert_eq!(cfg.cell_for(65), None);
        assert!(matches!(compose_font_atlas(&BlockGlyphs, &cfg), Err(AtlasError::InvalidGrid(_))));
    }

    #[test]
    fn glyph_lands_at_pen_and_baseline() {
        let cfg = FontAtlasConfig::default();
        let atlas = compose_font_atlas(&BlockGlyphs, &cfg).unwrap();
        assert_eq!((atlas.width(), atlas.height()), (256, 256));

        // 'A' is cell (1, 2) at pixel (16, 32); block spans x 2..6, y 5..11
        let (ox, oy) = (16, 32);
        assert_eq!(atlas.get_pixel(ox + 2, oy + 5), Some([255, 255, 255, 200]));
        assert_eq!(atlas.get_pixel(ox + 5, oy + 10), Some([255, 255, 255, 200]));
        assert_eq!(atlas.get_pixel(ox + 6, oy + 5), Some(TRANSPARENT));
        assert_eq!(atlas.get_pixel(ox + 2, oy + 11), Some(TRANSPARENT));
        // space stays empty
        assert!((0..16).all(|y| (0..16).all(|x| atlas.get_pixel(x, y) == Some(TRANSPARENT))));
        // rows past DEL are unused
        assert!(atlas.pixels()[256 * 96..].iter().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn glyphs_are_clipped_to_their_cell() {
        let cfg = FontAtlasConfig { first_code: 65, last_code: 65, ..Default::default() };
        let atlas = compose_font_atlas(&HugeGlyphs, &cfg).unwrap();
        assert_eq!(atlas.rejected_writes(), 0);
        let painted: Vec<(i32, i32)> = (0..256)
            .flat_map(|y| (0..256).map(move |x| (x, y)))
            .filter(|&(x, y)| atlas.get_pixel(x, y) != Some(TRANSPARENT))
            .collect();
        assert!(!painted.is_empty());
        assert!(painted.iter().all(|&(x, y)| (16..32).contains(&x) && (32..48).contains(&y)));
    }

    #[test]
    fn empty_fallback_chain_is_an_error() {
        let chain: Vec<PathBuf> = Vec::new();
        assert!(matches!(FontdueGlyphs::load_first(&chain, 14.0), Err(AtlasError::Font(_))));
    }

    #[test]
    fn unreadable_fonts_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let garbage = dir.path().join("broken.ttf");
        std::fs::write(&garbage, b"not a font").unwrap();
        let chain = [dir.path().join("missing.ttf"), garbage];
        let err = FontdueGlyphs::load_first(&chain, 14.0).err().unwrap();
        assert!(err.to_string().contains("2 candidate"));
    }
}
