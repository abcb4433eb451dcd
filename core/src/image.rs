use crate::error::{Error, Result};

pub type Rgba = [u8; 4];

/// Decoded RGBA8 raster, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Image {
    /// Image filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Image {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Wraps an interleaved RGBA8 buffer, `None` if its length does not match
    /// the dimensions.
    pub fn from_rgba8(width: u32, height: u32, raw: &[u8]) -> Option<Self> {
        if raw.len() != width as usize * height as usize * 4 {
            return None;
        }
        let pixels = raw
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Some(Image {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    /// Pixels in raster order together with their coordinates.
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (u32, u32, Rgba)> + '_ {
        let width = self.width.max(1);
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &px)| (i as u32 % width, i as u32 / width, px))
    }

    /// Fails unless the image is exactly `size`x`size`.
    pub fn ensure_size(&self, size: u32) -> Result<()> {
        if self.width != size || self.height != size {
            return Err(Error::SizeMismatch {
                expected: size,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
