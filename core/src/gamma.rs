//! sRGB to linear channel correction for the LED panel.

/// Piecewise sRGB to linear curve on a normalized channel value.
fn srgb_to_linear(s: f64) -> f64 {
    if s <= 0.04045 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Gamma-corrects one 8-bit channel.
///
/// The scaled result is truncated, not rounded, so regenerated headers stay
/// bit-identical to previously generated ones.
pub fn gamma8(v: u8) -> u8 {
    (255.0 * srgb_to_linear(v as f64 / 255.0)) as u8
}

/// Lookup table of [`gamma8`] for every channel value.
pub fn gamma_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    for (v, out) in table.iter_mut().enumerate() {
        *out = gamma8(v as u8);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(gamma8(0), 0);
        assert_eq!(gamma8(255), 255);
    }

    #[test]
    fn monotonic() {
        for v in 0..255u8 {
            assert!(gamma8(v) <= gamma8(v + 1), "gamma8({v}) > gamma8({})", v + 1);
        }
    }

    #[test]
    fn truncates_instead_of_rounding() {
        // linear segment: 255 * (12/255) / 12.92 = 0.93..
        assert_eq!(gamma8(12), 0);
        assert_eq!(gamma8(13), 1);
        assert_eq!(gamma8(128), 55);
        // 255 * ((200/255 + 0.055) / 1.055)^2.4 = 147.28..
        assert_eq!(gamma8(200), 147);
    }

    #[test]
    fn table_matches_function() {
        let table = gamma_table();
        for v in 0..=255u8 {
            assert_eq!(table[v as usize], gamma8(v));
        }
    }
}
