//! Sprite descriptors: each sprite is a named, fixed script of shape calls.
//!
//! Built-in art lives in [`builtin`] as literal tables; layouts can add or
//! replace sprites with the same descriptor format (see [`crate::layout`]).

mod builtin;
pub mod palette;

use crate::canvas::{Canvas, Color};
use crate::error::{AtlasError, Result};
use crate::raster::{self, SplitMix64};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One primitive call with offsets relative to the sprite's cell origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rect { x0: i32, y0: i32, x1: i32, y1: i32, color: Color },
    Pixel { x: i32, y: i32, color: Color },
    Ellipse { x0: i32, y0: i32, x1: i32, y1: i32, color: Color },
    Polygon { points: Vec<[i32; 2]>, color: Color },
    Line {
        from: [i32; 2],
        to: [i32; 2],
        #[serde(default = "default_width")]
        width: u32,
        color: Color,
    },
    Arc {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        start_deg: f32,
        end_deg: f32,
        #[serde(default = "default_width")]
        width: u32,
        color: Color,
    },
    /// Seeded texture detail; the seed is part of the art.
    Speckle {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        count: u32,
        size: u32,
        seed: u64,
        colors: Vec<Color>,
    },
}

fn default_width() -> u32 { 1 }

impl Shape {
    pub fn rect(x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> Self {
        Self::Rect { x0, y0, x1, y1, color }
    }

    pub fn pixel(x: i32, y: i32, color: Color) -> Self {
        Self::Pixel { x, y, color }
    }

    pub fn ellipse(x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> Self {
        Self::Ellipse { x0, y0, x1, y1, color }
    }

    pub fn polygon(points: &[[i32; 2]], color: Color) -> Self {
        Self::Polygon { points: points.to_vec(), color }
    }

    pub fn line(from: [i32; 2], to: [i32; 2], width: u32, color: Color) -> Self {
        Self::Line { from, to, width, color }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc(x0: i32, y0: i32, x1: i32, y1: i32, start_deg: f32, end_deg: f32, width: u32, color: Color) -> Self {
        Self::Arc { x0, y0, x1, y1, start_deg, end_deg, width, color }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn speckle(x0: i32, y0: i32, x1: i32, y1: i32, count: u32, size: u32, seed: u64, colors: &[Color]) -> Self {
        Self::Speckle { x0, y0, x1, y1, count, size, seed, colors: colors.to_vec() }
    }

    /// Rasterize this shape with its offsets translated by `origin`.
    pub fn draw(&self, canvas: &mut Canvas, origin: IVec2) {
        let at = |x: i32, y: i32| IVec2::new(origin.x.saturating_add(x), origin.y.saturating_add(y));
        match self {
            Shape::Rect { x0, y0, x1, y1, color } => {
                raster::fill_rect(canvas, at(*x0, *y0), at(*x1, *y1), *color)
            }
            Shape::Pixel { x, y, color } => {
                let p = at(*x, *y);
                canvas.set_pixel(p.x, p.y, *color)
            }
            Shape::Ellipse { x0, y0, x1, y1, color } => {
                raster::fill_ellipse(canvas, at(*x0, *y0), at(*x1, *y1), *color)
            }
            Shape::Polygon { points, color } => {
                let pts: Vec<IVec2> = points.iter().map(|[x, y]| at(*x, *y)).collect();
                raster::fill_polygon(canvas, &pts, *color)
            }
            Shape::Line { from, to, width, color } => {
                raster::stroke_line(canvas, at(from[0], from[1]), at(to[0], to[1]), *width, *color)
            }
            Shape::Arc { x0, y0, x1, y1, start_deg, end_deg, width, color } => raster::stroke_arc(
                canvas,
                at(*x0, *y0),
                at(*x1, *y1),
                *start_deg,
                *end_deg,
                *width,
                *color,
            ),
            Shape::Speckle { x0, y0, x1, y1, count, size, seed, colors } => {
                let mut rng = SplitMix64::new(*seed);
                raster::scatter_speckles(canvas, at(*x0, *y0), at(*x1, *y1), *count, *size, &mut rng, colors)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteDef {
    pub name: String,
    pub shapes: Vec<Shape>,
}

impl SpriteDef {
    /// Run the shape script in order with every offset relative to `origin`.
    pub fn draw(&self, canvas: &mut Canvas, origin: IVec2) {
        for shape in &self.shapes {
            shape.draw(canvas, origin);
        }
    }

    /// Draw into a fresh `cell_size` square canvas, failing if any write
    /// would have left the cell.
    pub fn render_cell(&self, cell_size: u32) -> Result<Canvas> {
        let mut cell = Canvas::new(cell_size, cell_size);
        self.draw(&mut cell, IVec2::ZERO);
        match cell.rejected_writes() {
            0 => Ok(cell),
            count => Err(AtlasError::CellOverflow { sprite: self.name.clone(), count, cell_size }),
        }
    }
}

/// Look up a built-in sprite by name.
pub fn builtin(name: &str) -> Option<SpriteDef> {
    builtin::CATALOG.iter().find(|(n, _)| *n == name).map(|(_, build)| build())
}

pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    builtin::CATALOG.iter().map(|(n, _)| *n)
}

/// Name to sprite mapping used when composing an atlas.
#[derive(Debug, Clone, Default)]
pub struct SpriteLibrary {
    sprites: BTreeMap<String, SpriteDef>,
}

impl SpriteLibrary {
    /// Library holding every built-in sprite.
    pub fn builtin() -> Self {
        let sprites = builtin::CATALOG.iter().map(|(n, build)| (n.to_string(), build())).collect();
        Self { sprites }
    }

    /// Add a sprite, replacing any existing sprite of the same name.
    pub fn insert(&mut self, sprite: SpriteDef) -> Option<SpriteDef> {
        let replaced = self.sprites.insert(sprite.name.clone(), sprite);
        if let Some(old) = &replaced {
            log::warn!("sprite '{}' replaced by layout definition", old.name);
        }
        replaced
    }

    pub fn get(&self, name: &str) -> Result<&SpriteDef> {
        self.sprites.get(name).ok_or_else(|| AtlasError::UnknownSprite(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sprites.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.sprites.len() }
    pub fn is_empty(&self) -> bool { self.sprites.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::palette::*;
    use super::*;
    use crate::canvas::TRANSPARENT;

    const CELL: u32 = 64;

    fn colors(c: &Canvas) -> Vec<Color> {
        let mut v: Vec<Color> = c.pixels().iter().copied().filter(|p| *p != TRANSPARENT).collect();
        v.sort();
        v.dedup();
        v
    }

    #[test]
    fn every_builtin_stays_inside_its_cell() {
        for name in builtin_names() {
            let sprite = builtin(name).unwrap();
            let cell = sprite.render_cell(CELL).unwrap_or_else(|e| panic!("{name}: {e}"));
            assert!(!colors(&cell).is_empty(), "{name} drew nothing");
        }
    }

    #[test]
    fn builtin_names_are_unique() {
        let mut names: Vec<_> = builtin_names().collect();
        let n = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), n);
        assert_eq!(n, 13);
    }

    #[test]
    fn drawing_at_an_origin_translates_the_cell() {
        let sprite = builtin("skeleton").unwrap();
        let cell = sprite.render_cell(CELL).unwrap();
        let mut big = Canvas::new(128, 128);
        sprite.draw(&mut big, IVec2::new(64, 64));
        for y in 0..64 {
            for x in 0..64 {
                assert_eq!(big.get_pixel(x + 64, y + 64), cell.get_pixel(x, y));
                assert_eq!(big.get_pixel(x, y), Some(TRANSPARENT));
            }
        }
    }

    #[test]
    fn player_keeps_hand_placed_pixels() {
        let cell = builtin("player").unwrap().render_cell(CELL).unwrap();
        assert_eq!(cell.get_pixel(29, 21), Some(FACE));
        assert_eq!(cell.get_pixel(33, 21), Some(FACE));
        assert_eq!(cell.get_pixel(30, 15), Some(METAL));
        assert_eq!(cell.get_pixel(20, 30), Some(CAPE));
        assert_eq!(cell.get_pixel(30, 40), Some(ARMOR));
        assert_eq!(cell.get_pixel(0, 0), Some(TRANSPARENT));
    }

    /// Per-pixel loops for the four row 0 sprites, written out longhand so
    /// the shape tables can be checked against them.
    fn hand_drawn(name: &str) -> Canvas {
        let mut c = Canvas::new(CELL, CELL);
        let mut put = |x: i32, y: i32, color: Color| c.set_pixel(x, y, color);
        match name {
            "player" => {
                for y in 28..50 {
                    for x in (18..22).chain(42..46) {
                        put(x, y, CAPE);
                    }
                }
                for y in 28..58 {
                    for x in 24..40 {
                        put(x, y, ARMOR);
                    }
                }
                for y in 16..28 {
                    for x in 26..38 {
                        put(x, y, SKIN);
                    }
                }
                for y in 14..20 {
                    for x in 24..40 {
                        put(x, y, METAL);
                    }
                }
                put(29, 21, FACE);
                put(33, 21, FACE);
            }
            "blob" => {
                for y in 0..64 {
                    for x in 0..64 {
                        let d2 = (x - 32) * (x - 32) + (y - 32) * (y - 32);
                        if d2 < 24 * 24 {
                            put(x, y, BLOB);
                        } else if d2 < 26 * 26 {
                            put(x, y, BLOB_DARK);
                        }
                    }
                }
                put(24, 24, WHITE);
                put(40, 24, WHITE);
                put(24, 25, BLACK);
                put(40, 25, BLACK);
            }
            "skeleton" => {
                for y in 16..56 {
                    put(31, y, BONE);
                    put(32, y, BONE);
                }
                for y in (30..40).step_by(3) {
                    for x in 24..40 {
                        put(x, y, BONE);
                    }
                }
                for y in 16..28 {
                    for x in 26..38 {
                        put(x, y, BONE);
                    }
                }
                put(29, 22, BLACK);
                put(34, 22, BLACK);
            }
            "crystal" => {
                for y in 16i32..48 {
                    for x in 16i32..48 {
                        if (x - 32).abs() + (y - 32).abs() < 16 {
                            put(x, y, CRYSTAL);
                        }
                    }
                }
                put(32, 24, WHITE);
                put(32, 25, WHITE);
            }
            other => panic!("no hand-drawn version of {other}"),
        }
        c
    }

    #[test]
    fn row_zero_sprites_match_hand_drawn_pixels() {
        for name in ["player", "blob", "skeleton", "crystal"] {
            let table = builtin(name).unwrap().render_cell(CELL).unwrap();
            let expected = hand_drawn(name);
            let diffs: Vec<(i32, i32)> = (0..64)
                .flat_map(|y| (0..64).map(move |x| (x, y)))
                .filter(|&(x, y)| table.get_pixel(x, y) != expected.get_pixel(x, y))
                .collect();
            assert!(diffs.is_empty(), "{name}: {} differing pixel(s), first {:?}", diffs.len(), diffs.first());
        }
    }

    #[test]
    fn crystal_is_a_single_color_diamond_with_shine() {
        let cell = builtin("crystal").unwrap().render_cell(CELL).unwrap();
        assert_eq!(colors(&cell), vec![CRYSTAL, WHITE]);
        assert_eq!(cell.get_pixel(32, 17), Some(CRYSTAL));
        assert_eq!(cell.get_pixel(31, 17), Some(TRANSPARENT));
        assert_eq!(cell.get_pixel(17, 32), Some(CRYSTAL));
        assert_eq!(cell.get_pixel(16, 32), Some(TRANSPARENT));
        // 1 + 3 + ... + 29 twice, plus the 31-wide middle row
        assert_eq!(cell.pixels().iter().filter(|p| **p != TRANSPARENT).count(), 2 * 15 * 15 + 31);
    }

    #[test]
    fn blob_has_body_rim_and_eyes() {
        let cell = builtin("blob").unwrap().render_cell(CELL).unwrap();
        assert_eq!(cell.get_pixel(32, 32), Some(BLOB));
        assert_eq!(cell.get_pixel(7, 32), Some(BLOB_DARK));
        assert_eq!(cell.get_pixel(6, 32), Some(TRANSPARENT));
        assert_eq!(cell.get_pixel(24, 24), Some(WHITE));
        assert_eq!(cell.get_pixel(40, 25), Some(BLACK));
        assert_eq!(colors(&cell).len(), 4);
    }

    #[test]
    fn ground_tiles_are_seeded_and_opaque() {
        let grass = builtin("grass").unwrap().render_cell(CELL).unwrap();
        assert_eq!(grass, builtin("grass").unwrap().render_cell(CELL).unwrap());
        assert!(grass.pixels().iter().all(|p| p[3] == 255));
        // first speckle of seed 42 lands at (14, 50)
        assert_eq!(grass.get_pixel(14, 50), Some(GRASS_DARK));
        assert_eq!(grass.get_pixel(15, 51), Some(GRASS_DARK));
        assert_eq!(colors(&grass).len(), 4);

        let dirt = builtin("dirt").unwrap().render_cell(CELL).unwrap();
        assert!(dirt.pixels().iter().all(|p| p[3] == 255));
        assert_eq!(colors(&dirt), vec![DIRT_DARK, DIRT, PEBBLE]);
    }

    #[test]
    fn corpses_are_translucent() {
        for name in ["blob_corpse", "skeleton_corpse"] {
            let cell = builtin(name).unwrap().render_cell(CELL).unwrap();
            assert!(cell.pixels().iter().any(|p| p[3] > 0 && p[3] < 255), "{name}");
        }
    }

    #[test]
    fn slash_is_an_upper_crescent() {
        let cell = builtin("slash").unwrap().render_cell(CELL).unwrap();
        for y in 32..64 {
            for x in 0..64 {
                assert_eq!(cell.get_pixel(x, y), Some(TRANSPARENT));
            }
        }
    }

    #[test]
    fn overflowing_sprite_is_reported() {
        let bad = SpriteDef { name: "spill".into(), shapes: vec![Shape::rect(60, 60, 70, 61, WHITE)] };
        match bad.render_cell(CELL) {
            Err(AtlasError::CellOverflow { sprite, count, cell_size }) => {
                assert_eq!(sprite, "spill");
                assert_eq!(count, 7 * 2);
                assert_eq!(cell_size, 64);
            }
            other => panic!("expected overflow, got {other:?}"),
        }
    }

    #[test]
    fn library_lookup_and_replacement() {
        let mut lib = SpriteLibrary::builtin();
        assert_eq!(lib.len(), 13);
        let mut expected: Vec<&str> = builtin_names().collect();
        expected.sort();
        assert_eq!(lib.names().collect::<Vec<_>>(), expected);
        assert!(matches!(lib.get("dragon"), Err(AtlasError::UnknownSprite(n)) if n == "dragon"));
        let custom = SpriteDef { name: "blob".into(), shapes: vec![Shape::pixel(1, 1, WHITE)] };
        assert!(lib.insert(custom.clone()).is_some());
        assert_eq!(lib.get("blob").unwrap(), &custom);
        assert_eq!(lib.len(), 13);
    }

    #[test]
    fn shapes_parse_from_yaml() {
        let yaml = r#"
name: crate_box
shapes:
  - { kind: rect, x0: 8, y0: 8, x1: 55, y1: 55, color: [120, 80, 40, 255] }
  - { kind: line, from: [8, 8], to: [55, 55], color: [60, 40, 20, 255] }
  - kind: speckle
    x0: 10
    y0: 10
    x1: 50
    y1: 50
    count: 5
    size: 1
    seed: 7
    colors: [[0, 0, 0, 255]]
"#;
        let def: SpriteDef = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(def.name, "crate_box");
        assert_eq!(def.shapes.len(), 3);
        assert_eq!(def.shapes[1], Shape::line([8, 8], [55, 55], 1, [60, 40, 20, 255]));
        assert!(def.render_cell(CELL).is_ok());
    }
}
