//! RGBA pixel buffer that owns the atlas memory for one generation run.
//!
//! Writes overwrite (no blending) and alpha is stored straight, so translucent
//! sprites reach the image file exactly as authored.

use crate::error::Result;
use image::{codecs::png::PngEncoder, ColorType, ImageEncoder};

/// Straight-alpha RGBA, one byte per channel.
pub type Color = [u8; 4];

pub const TRANSPARENT: Color = [0, 0, 0, 0];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    rejected_writes: usize,
}

impl Canvas {
    /// Create a canvas with every pixel transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; (width as usize) * (height as usize)],
            rejected_writes: 0,
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Overwrite one pixel. Writes outside the canvas are dropped and counted,
    /// see [`Canvas::rejected_writes`].
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        match self.index(x, y) {
            Some(i) => self.pixels[i] = color,
            None => {
                log::trace!("rejected write at ({x}, {y}) on {}x{} canvas", self.width, self.height);
                self.rejected_writes = self.rejected_writes.saturating_add(1);
            }
        }
    }

    /// Count `count` writes that a primitive clipped away without visiting.
    pub(crate) fn reject(&mut self, count: usize) {
        if count > 0 {
            log::trace!("rejected {count} clipped write(s) on {}x{} canvas", self.width, self.height);
            self.rejected_writes = self.rejected_writes.saturating_add(count);
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Number of writes that fell outside the canvas since creation.
    pub fn rejected_writes(&self) -> usize { self.rejected_writes }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Color] { &self.pixels }

    /// Copy every pixel of `src` (transparent ones included) with its top-left at `(x, y)`.
    pub fn blit(&mut self, src: &Canvas, x: i32, y: i32) {
        for sy in 0..src.height as i32 {
            for sx in 0..src.width as i32 {
                let i = sy as usize * src.width as usize + sx as usize;
                self.set_pixel(x.saturating_add(sx), y.saturating_add(sy), src.pixels[i]);
            }
        }
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Lossless PNG encoding with the alpha channel preserved.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out).write_image(self.as_bytes(), self.width, self.height, ColorType::Rgba8)?;
        Ok(out)
    }
}
