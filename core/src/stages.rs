//! Background + particle encoding for the particle renderer.

use log::debug;

use crate::{
    error::Result,
    gamma::gamma_table,
    image::Image,
    particles::{MAX_PARTICLES, Particle, ParticleList},
};

/// Encoded stage: static background plus the particles lifted out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub width: u32,
    /// One `r | g << 8 | b << 16` value per pixel, 0 where a particle was taken
    pub background: Vec<u32>,
    pub particles: Vec<Particle>,
}

pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) | (g as u32) << 8 | (b as u32) << 16
}

/// Encodes `image` into a [`Stage`].
///
/// Every pixel that is not fully opaque becomes a particle and leaves a 0 in
/// the background so the two layers never draw the same cell.
pub fn encode_stage(image: &Image, size: u32, gamma: bool) -> Result<Stage> {
    image.ensure_size(size)?;

    let table = gamma.then(gamma_table);
    let mut background = Vec::with_capacity(image.width() as usize * image.height() as usize);
    let mut particles = ParticleList::new();

    for (x, y, [mut r, mut g, mut b, a]) in image.enumerate_pixels() {
        if let Some(table) = &table {
            r = table[r as usize];
            g = table[g as usize];
            b = table[b as usize];
        }
        let color = pack_rgb(r, g, b);
        if a != 0xFF {
            particles.push(x, y, color);
            background.push(0);
        } else {
            background.push(color);
        }
    }

    debug!(
        "Encoded {}x{} stage with {} particles (gamma: {})",
        image.width(),
        image.height(),
        particles.len(),
        gamma
    );

    Ok(Stage {
        width: image.width(),
        background,
        particles: particles.finish(MAX_PARTICLES)?,
    })
}
