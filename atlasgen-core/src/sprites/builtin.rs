//! Hand-authored sprite tables. Offsets are relative to the cell's top-left
//! and sized for 64px cells.

use super::palette::*;
use super::{Shape, SpriteDef};

type Builder = fn() -> SpriteDef;

/// Every built-in sprite, in catalog order.
pub(crate) const CATALOG: &[(&str, Builder)] = &[
    ("player", player),
    ("blob", blob),
    ("skeleton", skeleton),
    ("crystal", crystal),
    ("health_gem", health_gem),
    ("piercing_gem", piercing_gem),
    ("blob_corpse", blob_corpse),
    ("skeleton_corpse", skeleton_corpse),
    ("sword", sword),
    ("axe", axe),
    ("slash", slash),
    ("grass", grass),
    ("dirt", dirt),
];

fn sprite(name: &str, shapes: Vec<Shape>) -> SpriteDef {
    SpriteDef { name: name.to_string(), shapes }
}

// ============================================================================
// CHARACTERS
// ============================================================================

fn player() -> SpriteDef {
    sprite("player", vec![
        // cape shows either side of the body
        Shape::rect(18, 28, 21, 49, CAPE),
        Shape::rect(42, 28, 45, 49, CAPE),
        Shape::rect(24, 28, 39, 57, ARMOR),
        Shape::rect(26, 16, 37, 27, SKIN),
        Shape::rect(24, 14, 39, 19, METAL),
        Shape::pixel(29, 21, FACE),
        Shape::pixel(33, 21, FACE),
    ])
}

fn blob() -> SpriteDef {
    sprite("blob", vec![
        // radius 26 rim under a radius 24 body
        Shape::ellipse(6, 6, 58, 58, BLOB_DARK),
        Shape::ellipse(8, 8, 56, 56, BLOB),
        Shape::pixel(24, 24, WHITE),
        Shape::pixel(40, 24, WHITE),
        Shape::pixel(24, 25, BLACK),
        Shape::pixel(40, 25, BLACK),
    ])
}

fn skeleton() -> SpriteDef {
    sprite("skeleton", vec![
        Shape::rect(31, 16, 32, 55, BONE),
        Shape::rect(24, 30, 39, 30, BONE),
        Shape::rect(24, 33, 39, 33, BONE),
        Shape::rect(24, 36, 39, 36, BONE),
        Shape::rect(24, 39, 39, 39, BONE),
        Shape::rect(26, 16, 37, 27, BONE),
        Shape::pixel(29, 22, BLACK),
        Shape::pixel(34, 22, BLACK),
    ])
}

// ============================================================================
// PICKUPS
// ============================================================================

fn crystal() -> SpriteDef {
    // diamond |x - 32| + |y - 32| < 16, one span per row
    let mut shapes: Vec<Shape> = (17..=47)
        .map(|y: i32| {
            let half = 15 - (y - 32).abs();
            Shape::rect(32 - half, y, 32 + half, y, CRYSTAL)
        })
        .collect();
    shapes.push(Shape::rect(32, 24, 32, 25, WHITE));
    sprite("crystal", shapes)
}

fn health_gem() -> SpriteDef {
    sprite("health_gem", vec![
        Shape::polygon(&[[32, 18], [44, 28], [32, 46], [20, 28]], HEALTH_GEM_DARK),
        Shape::polygon(&[[32, 21], [41, 28], [32, 42], [23, 28]], HEALTH_GEM),
        Shape::rect(28, 25, 29, 26, WHITE),
    ])
}

fn piercing_gem() -> SpriteDef {
    sprite("piercing_gem", vec![
        Shape::polygon(&[[32, 12], [42, 32], [32, 52], [22, 32]], PIERCING_GEM_DARK),
        Shape::polygon(&[[32, 16], [39, 32], [32, 48], [25, 32]], PIERCING_GEM),
        Shape::line([30, 22], [28, 28], 1, WHITE),
    ])
}

// ============================================================================
// CORPSES
// ============================================================================

fn blob_corpse() -> SpriteDef {
    sprite("blob_corpse", vec![
        Shape::ellipse(10, 38, 54, 54, BLOB_PUDDLE),
        Shape::ellipse(18, 41, 40, 50, BLOB_PUDDLE_LIGHT),
        Shape::ellipse(47, 32, 53, 38, BLOB_PUDDLE),
        // crossed-out eyes
        Shape::line([24, 43], [28, 47], 1, SOCKET),
        Shape::line([28, 43], [24, 47], 1, SOCKET),
        Shape::line([34, 43], [38, 47], 1, SOCKET),
        Shape::line([38, 43], [34, 47], 1, SOCKET),
    ])
}

fn skeleton_corpse() -> SpriteDef {
    sprite("skeleton_corpse", vec![
        Shape::line([28, 50], [50, 42], 3, BONE_FADED),
        Shape::line([32, 40], [52, 52], 3, BONE_FADED),
        Shape::ellipse(46, 38, 54, 46, BONE_FADED),
        Shape::ellipse(48, 48, 56, 56, BONE_FADED),
        Shape::ellipse(14, 32, 34, 50, BONE),
        Shape::rect(19, 39, 21, 41, BLACK),
        Shape::rect(26, 39, 28, 41, BLACK),
        Shape::rect(21, 45, 27, 46, BONE_FADED),
    ])
}

// ============================================================================
// WEAPONS AND EFFECTS
// ============================================================================

fn sword() -> SpriteDef {
    sprite("sword", vec![
        Shape::polygon(&[[29, 40], [29, 12], [32, 6], [35, 12], [35, 40]], BLADE),
        Shape::line([32, 10], [32, 39], 1, BLADE_EDGE),
        Shape::rect(24, 41, 40, 44, GUARD),
        Shape::rect(30, 45, 33, 54, HILT),
        Shape::ellipse(28, 54, 36, 60, GUARD),
    ])
}

fn axe() -> SpriteDef {
    sprite("axe", vec![
        Shape::line([20, 56], [42, 10], 4, HANDLE),
        Shape::polygon(&[[36, 8], [52, 4], [56, 18], [52, 32], [38, 26]], AXE_HEAD),
        Shape::arc(40, 2, 60, 34, -70.0, 70.0, 2, BLADE_EDGE),
    ])
}

fn slash() -> SpriteDef {
    sprite("slash", vec![
        Shape::arc(6, 6, 58, 58, 20.0, 160.0, 7, SLASH_GLOW),
        Shape::arc(12, 12, 52, 52, 35.0, 145.0, 3, SLASH),
    ])
}

// ============================================================================
// GROUND TILES
// ============================================================================

fn grass() -> SpriteDef {
    sprite("grass", vec![
        Shape::rect(0, 0, 63, 63, GRASS),
        Shape::speckle(2, 2, 61, 61, 48, 2, 42, &[GRASS_DARK, GRASS_LIGHT, GRASS_DARK, FLOWER]),
    ])
}

fn dirt() -> SpriteDef {
    sprite("dirt", vec![
        Shape::rect(0, 0, 63, 63, DIRT),
        Shape::speckle(1, 1, 62, 62, 64, 1, 99, &[DIRT_DARK, PEBBLE]),
        Shape::speckle(4, 4, 59, 59, 6, 3, 199, &[DIRT_DARK]),
    ])
}
