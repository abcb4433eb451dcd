//! Initial universes for the Game of Life.

use crate::{error::Result, image::Image};

pub const ALIVE: u8 = 0xFF;
pub const DEAD: u8 = 0x00;

/// Red channel value from which a cell starts alive.
const THRESHOLD: u8 = 0x80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    pub width: u32,
    pub cells: Vec<u8>,
}

/// Thresholds the red channel of every pixel. Green, blue and alpha are
/// ignored.
pub fn encode_universe(image: &Image, size: u32) -> Result<Universe> {
    image.ensure_size(size)?;
    let cells = image
        .enumerate_pixels()
        .map(|(_, _, [r, ..])| if r >= THRESHOLD { ALIVE } else { DEAD })
        .collect();
    Ok(Universe {
        width: image.width(),
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn alternating_rows() {
        let mut image = Image::filled(8, 8, [0; 4]);
        for y in 0..8u32 {
            for x in 0..8u32 {
                let red = if y % 2 == 0 { 0x00 } else { 0xFF };
                // noise in the channels that must not matter
                let other = (x * 37 + y * 11) as u8;
                image.set_pixel(x, y, [red, other, !other, other ^ 0x5A]);
            }
        }
        let universe = encode_universe(&image, 8).unwrap();
        for (y, row) in universe.cells.chunks(8).enumerate() {
            let expected = if y % 2 == 0 { DEAD } else { ALIVE };
            assert!(row.iter().all(|&c| c == expected), "row {y}: {row:?}");
        }
    }

    #[test]
    fn threshold_boundary() {
        let mut image = Image::filled(2, 2, [0; 4]);
        image.set_pixel(0, 0, [0x7F, 0xFF, 0xFF, 0xFF]);
        image.set_pixel(1, 0, [0x80, 0, 0, 0]);
        image.set_pixel(0, 1, [0xFF, 0, 0, 0xFF]);
        let universe = encode_universe(&image, 2).unwrap();
        assert_eq!(universe.cells, [DEAD, ALIVE, ALIVE, DEAD]);
    }

    #[test]
    fn wrong_size_is_rejected() {
        let image = Image::filled(32, 31, [0; 4]);
        assert!(matches!(
            encode_universe(&image, 32),
            Err(Error::SizeMismatch { .. })
        ));
    }
}
