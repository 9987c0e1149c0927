use std::path::Path;

use anyhow::{Context, Result, anyhow};
use bytemuck::cast_slice;
use rayon::prelude::*;

/// Anything the rasterizer can write packed pixels into.
pub trait PixelTarget {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Writes a packed `0xAABBGGRR` pixel. Callers stay within bounds.
    fn set_pixel(&mut self, x: u32, y: u32, color: u32);
}

/// CPU framebuffer of packed pixels, row-major, stored little-endian so the
/// raw bytes read R, G, B, A.
pub struct ScreenSpace {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u32>,
}

impl ScreenSpace {
    pub fn new(width: u32, height: u32) -> Self {
        let size_calc = (width * height) as usize;
        Self {
            width,
            height,
            pixels: vec![0; size_calc],
        }
    }
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height { return None }
        let i = (y * self.width + x) as usize;
        Some(u32::from_le(self.pixels[i]))
    }
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color.to_le());
    }
    /// Mutable scanlines for parallel writers. Words in the rows are stored
    /// little-endian, so writers must store `color.to_le()`.
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = &mut [u32]> + '_ {
        let width = self.width.max(1) as usize;
        self.pixels.par_chunks_exact_mut(width)
    }
    pub fn as_bytes(&self) -> &[u8] {
        cast_slice(&self.pixels)
    }
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let img = image::RgbaImage::from_raw(self.width, self.height, self.as_bytes().to_vec())
            .ok_or_else(|| anyhow!("framebuffer size does not match {}x{}", self.width, self.height))?;
        img.save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
    /// Number of pixels that differ from `background`.
    pub fn count_not(&self, background: u32) -> usize {
        self.pixels.iter().filter(|&&p| u32::from_le(p) != background).count()
    }
}

impl PixelTarget for ScreenSpace {
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
    fn set_pixel(&mut self, x: u32, y: u32, color: u32) {
        if x >= self.width || y >= self.height { return; }
        let i = (y * self.width + x) as usize;
        self.pixels[i] = color.to_le();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{OPAQUE_BLACK, pack_rgba, unpack_rgba};
    use rayon::prelude::*;

    #[test]
    fn set_and_get() {
        let mut screen = ScreenSpace::new(4, 3);
        screen.clear(OPAQUE_BLACK);
        screen.set_pixel(3, 2, pack_rgba(1, 2, 3, 4));
        assert_eq!(screen.get_pixel(3, 2).map(unpack_rgba), Some((1, 2, 3, 4)));
        assert_eq!(screen.get_pixel(0, 0), Some(OPAQUE_BLACK));
        assert_eq!(screen.get_pixel(4, 0), None);
        assert_eq!(screen.count_not(OPAQUE_BLACK), 1);
    }

    #[test]
    fn out_of_bounds_write_is_ignored() {
        let mut screen = ScreenSpace::new(2, 2);
        screen.set_pixel(2, 0, 0xFFFF_FFFF);
        screen.set_pixel(0, 9, 0xFFFF_FFFF);
        assert_eq!(screen.count_not(0), 0);
    }

    #[test]
    fn bytes_are_rgba() {
        let mut screen = ScreenSpace::new(1, 1);
        screen.set_pixel(0, 0, pack_rgba(0xAB, 0xCD, 0xEF, 0xFF));
        assert_eq!(screen.as_bytes(), &[0xAB, 0xCD, 0xEF, 0xFF]);
    }

    #[test]
    fn rows_split_by_width() {
        let mut screen = ScreenSpace::new(5, 3);
        let rows: Vec<usize> = screen.par_rows_mut().map(|r| r.len()).collect();
        assert_eq!(rows, vec![5, 5, 5]);
    }
}
