//! RGB565 expansion and palette interpolation

/// Expand a packed RGB565 colour to 8 bits per channel.
///
/// Uses the nearest-value multipliers (`527`, `259`) rather than bit
/// replication, matching the client's reference decoder exactly.
#[inline]
pub fn expand_rgb565(color: u16) -> [u8; 3] {
    let r5 = u32::from((color >> 11) & 0x1F);
    let g6 = u32::from((color >> 5) & 0x3F);
    let b5 = u32::from(color & 0x1F);

    [
        ((r5 * 527 + 23) >> 6) as u8,
        ((g6 * 259 + 33) >> 6) as u8,
        ((b5 * 527 + 23) >> 6) as u8,
    ]
}

/// Weighted per-channel blend `(a * w0 + b * w1) / (w0 + w1)`, truncating.
#[inline]
pub fn lerp_rgb(a: [u8; 3], b: [u8; 3], w0: u32, w1: u32) -> [u8; 3] {
    let mix = |x: u8, y: u8| ((u32::from(x) * w0 + u32::from(y) * w1) / (w0 + w1)) as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

/// Four-entry interpolated palette for a colour sub-block.
///
/// Always the four-colour form: entries 2 and 3 sit at 1/3 and 2/3 between the
/// reference colours regardless of their ordering.
#[inline]
pub fn build_palette(color0: u16, color1: u16) -> [[u8; 3]; 4] {
    let c0 = expand_rgb565(color0);
    let c1 = expand_rgb565(color1);
    [c0, c1, lerp_rgb(c0, c1, 2, 1), lerp_rgb(c0, c1, 1, 2)]
}

/// Expand a 4-bit alpha nibble to 8 bits (`0xF` becomes `0xFF`).
#[inline]
pub const fn expand_alpha4(nibble: u8) -> u8 {
    (nibble & 0x0F) * 17
}
