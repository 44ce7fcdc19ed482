use super::Point;

/// Axis-aligned box with inclusive edges.
///
/// Always normalized: `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
}

impl BoundingBox {
    /// Build a box from its edges, swapping them if given in reverse
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left: left.min(right),
            right: left.max(right),
            top: top.min(bottom),
            bottom: top.max(bottom),
        }
    }

    /// Box spanned by two opposite corners, in any order
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, b.x, a.y, b.y)
    }

    /// Box from its top-left corner; edges past the `i32` range are clamped
    pub fn from_min_size(min: Point, width: i32, height: i32) -> Self {
        let max = min.offset(width, height);
        Self::new(min.x, max.x, min.y, max.y)
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn min(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.left..=self.right).contains(&point.x) && (self.top..=self.bottom).contains(&point.y)
    }

    /// Overlap test; boxes sharing only an edge overlap
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }

    pub fn to_rect(&self) -> egui::Rect {
        egui::Rect::from_min_max(
            egui::pos2(self.left as f32, self.top as f32),
            egui::pos2(self.right as f32, self.bottom as f32),
        )
    }
}

/// Anything that occupies a bounding box in the scene
pub trait Bounded {
    fn bounding_box(&self) -> BoundingBox;

    /// Approximate intersection: compares bounding boxes only
    fn intersects(&self, other: &dyn Bounded) -> bool {
        self.bounding_box().overlaps(&other.bounding_box())
    }
}

impl Bounded for BoundingBox {
    fn bounding_box(&self) -> BoundingBox {
        *self
    }
}
