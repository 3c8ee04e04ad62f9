//! Named colors shared by the built-in sprites.

use crate::canvas::Color;

pub const WHITE: Color = [255, 255, 255, 255];
pub const BLACK: Color = [0, 0, 0, 255];

// player
pub const SKIN: Color = [255, 220, 180, 255];
pub const ARMOR: Color = [60, 80, 120, 255];
pub const CAPE: Color = [140, 40, 50, 255];
pub const METAL: Color = [160, 170, 180, 255];
pub const FACE: Color = [40, 40, 40, 255];

// monsters
pub const BLOB: Color = [50, 200, 50, 255];
pub const BLOB_DARK: Color = [20, 140, 20, 255];
pub const BONE: Color = [220, 220, 220, 255];

// pickups
pub const CRYSTAL: Color = [100, 200, 255, 255];
pub const HEALTH_GEM: Color = [60, 220, 90, 255];
pub const HEALTH_GEM_DARK: Color = [30, 150, 60, 255];
pub const PIERCING_GEM: Color = [190, 80, 230, 255];
pub const PIERCING_GEM_DARK: Color = [120, 40, 160, 255];

// corpses are translucent so they read as residue under live sprites
pub const BLOB_PUDDLE: Color = [20, 140, 20, 160];
pub const BLOB_PUDDLE_LIGHT: Color = [50, 200, 50, 120];
pub const SOCKET: Color = [0, 0, 0, 200];
pub const BONE_FADED: Color = [200, 200, 200, 210];

// weapons and effects
pub const BLADE: Color = [200, 210, 220, 255];
pub const BLADE_EDGE: Color = [240, 245, 250, 255];
pub const HILT: Color = [110, 70, 40, 255];
pub const GUARD: Color = [200, 170, 60, 255];
pub const AXE_HEAD: Color = [150, 155, 165, 255];
pub const HANDLE: Color = [120, 80, 45, 255];
pub const SLASH: Color = [255, 255, 255, 220];
pub const SLASH_GLOW: Color = [180, 220, 255, 110];

// ground
pub const GRASS: Color = [60, 120, 50, 255];
pub const GRASS_DARK: Color = [40, 95, 35, 255];
pub const GRASS_LIGHT: Color = [90, 150, 70, 255];
pub const FLOWER: Color = [230, 220, 90, 255];
pub const DIRT: Color = [110, 85, 60, 255];
pub const DIRT_DARK: Color = [85, 65, 45, 255];
pub const PEBBLE: Color = [140, 120, 100, 255];
