use crate::geometry::{BoundingBox, Bounded, Point};
use crate::renderer::{self, Canvas};

/// Transient region drawn while drag-selecting.
///
/// Rebuilt on every drag update and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRectangle {
    bounds: BoundingBox,
}

impl SelectionRectangle {
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            bounds: BoundingBox::new(left, right, top, bottom),
        }
    }

    /// Normalized rectangle between the drag start and the current pointer,
    /// whichever direction the drag goes
    pub fn from_corners(start: Point, current: Point) -> Self {
        Self {
            bounds: BoundingBox::from_corners(start, current),
        }
    }

    pub fn left(&self) -> i32 {
        self.bounds.left()
    }

    pub fn right(&self) -> i32 {
        self.bounds.right()
    }

    pub fn top(&self) -> i32 {
        self.bounds.top()
    }

    pub fn bottom(&self) -> i32 {
        self.bounds.bottom()
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.stroke_rect(
            self.bounds,
            renderer::SELECTION_OUTLINE_WIDTH,
            renderer::SELECTION_OUTLINE_COLOR,
        );
    }
}

impl Bounded for SelectionRectangle {
    fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }
}
