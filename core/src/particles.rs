use crate::error::{Error, Result};

/// Number of particles the simulation can hold per stage.
pub const MAX_PARTICLES: usize = 512;

/// Foreground pixel that is simulated instead of drawn as background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Particle {
    pub x: u32,
    pub y: u32,
    /// Packed as `r | g << 8 | b << 16`
    pub color: u32,
}

/// Collects particles of one image in raster order.
///
/// Capacity is only checked once in [`ParticleList::finish`], so an oversized
/// image reports its exact particle count.
#[derive(Debug, Default)]
pub struct ParticleList {
    particles: Vec<Particle>,
}

impl ParticleList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: u32, y: u32, color: u32) {
        self.particles.push(Particle { x, y, color });
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn finish(self, max: usize) -> Result<Vec<Particle>> {
        if self.particles.len() > max {
            return Err(Error::ParticleOverflow {
                count: self.particles.len(),
                max,
            });
        }
        Ok(self.particles)
    }
}
