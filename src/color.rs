//! Vertex colors and the packed framebuffer pixel format.
//!
//! Packed pixels are `u32` words laid out `0xAABBGGRR`: read as little-endian
//! bytes they come out R, G, B, A, which is what raylib's
//! `PIXELFORMAT_UNCOMPRESSED_R8G8B8A8` and `image::RgbaImage` both expect.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColorRGB {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorRGB {
    pub const RED: ColorRGB = ColorRGB::new(0xFF, 0x00, 0x00);
    pub const GREEN: ColorRGB = ColorRGB::new(0x00, 0xFF, 0x00);
    pub const BLUE: ColorRGB = ColorRGB::new(0x00, 0x00, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorRGB { r, g, b }
    }

    /// Opaque packed pixel.
    pub fn pack(self) -> u32 {
        pack_rgba(self.r, self.g, self.b, 0xFF)
    }
}

pub const OPAQUE_BLACK: u32 = 0xFF00_0000;

#[inline(always)]
pub fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_le_bytes([r, g, b, a])
}

#[inline(always)]
pub fn unpack_rgba(color: u32) -> (u8, u8, u8, u8) {
    let [r, g, b, a] = color.to_le_bytes();
    (r, g, b, a)
}

/// Blends the three colors by barycentric weights and packs the result.
///
/// Channels are truncated after clamping to `0..=255`, since rounded weights
/// can overshoot the unit range by a hair.
pub fn interpolate(colors: &[ColorRGB; 3], alpha: f32, beta: f32, gamma: f32) -> u32 {
    let channel = |c0: u8, c1: u8, c2: u8| -> u8 {
        (alpha * c0 as f32 + beta * c1 as f32 + gamma * c2 as f32).clamp(0.0, 255.0) as u8
    };
    let [c0, c1, c2] = colors;
    pack_rgba(
        channel(c0.r, c1.r, c2.r),
        channel(c0.g, c1.g, c2.g),
        channel(c0.b, c1.b, c2.b),
        0xFF,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const RGB: [ColorRGB; 3] = [ColorRGB::RED, ColorRGB::GREEN, ColorRGB::BLUE];

    #[test]
    fn byte_order_is_rgba_from_low_to_high() {
        let packed = pack_rgba(0xAB, 0xCD, 0xEF, 0xFF);
        assert_eq!(packed, 0xFFEF_CDAB);
        assert_eq!(unpack_rgba(packed), (0xAB, 0xCD, 0xEF, 0xFF));
    }

    #[test]
    fn pure_weights_pick_vertex_colors() {
        assert_eq!(interpolate(&RGB, 1.0, 0.0, 0.0), ColorRGB::RED.pack());
        assert_eq!(interpolate(&RGB, 0.0, 1.0, 0.0), ColorRGB::GREEN.pack());
        assert_eq!(interpolate(&RGB, 0.0, 0.0, 1.0), ColorRGB::BLUE.pack());
    }

    #[test]
    fn blend_is_opaque_and_clamped() {
        let (r, g, b, a) = unpack_rgba(interpolate(&RGB, 0.5, 0.25, 0.25));
        assert_eq!((r, g, b, a), (127, 63, 63, 0xFF));

        let (r, _, b, _) = unpack_rgba(interpolate(&RGB, 1.001, 0.0, -0.001));
        assert_eq!((r, b), (255, 0));
    }
}
