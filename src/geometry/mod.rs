use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

pub mod hit_testing;

pub use hit_testing::{BoundingBox, Bounded};

/// Integer point in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by the given deltas, clamping at the `i32` range
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Round an egui position into scene coordinates
    pub fn from_pos2(pos: egui::Pos2) -> Self {
        Self::new(pos.x.round() as i32, pos.y.round() as i32)
    }

    pub fn to_pos2(self) -> egui::Pos2 {
        egui::pos2(self.x as f32, self.y as f32)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.offset(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_clamps_at_range() {
        let near_max = Point::new(i32::MAX - 5, 0);
        assert_eq!(near_max.offset(10, 0), Point::new(i32::MAX, 0));
        assert_eq!(Point::new(i32::MIN + 1, 3).offset(-2, 4), Point::new(i32::MIN, 7));
        assert_eq!(Point::new(0, 0) - Point::new(i32::MIN, 0), Point::new(i32::MAX, 0));
    }
}
