use bevy::prelude::*;

/// `0xRRGGBB` as an sRGB colour.
pub fn hex_color(hex: u32, alpha: f32) -> Color {
    let [_, r, g, b] = hex.to_be_bytes();
    Color::srgba_u8(r, g, b, 0).with_alpha(alpha)
}
