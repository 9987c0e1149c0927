/// Inclusive integer pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

// helper methods
impl Rect {
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }
    pub fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }
    /// Clamps to the pixels of a `width` x `height` target. The result may be empty.
    pub fn clamp_to(&self, width: u32, height: u32) -> Rect {
        let right = width.min(i32::MAX as u32) as i32 - 1;
        let bottom = height.min(i32::MAX as u32) as i32 - 1;
        Rect {
            min_x: self.min_x.max(0),
            min_y: self.min_y.max(0),
            max_x: self.max_x.min(right),
            max_y: self.max_y.min(bottom),
        }
    }
}
