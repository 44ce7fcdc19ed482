use super::Shape;
use super::common::{self, ShapeCore};
use crate::color::ShapeColor;
use crate::error::ShapeResult;
use crate::geometry::{BoundingBox, Bounded, Point};
use crate::id_generator::ShapeId;
use crate::renderer::Canvas;

/// Square anchored at its top-left corner; width and height are one `size`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    core: ShapeCore,
    anchor: Point,
    size: i32,
    bounding_box: BoundingBox,
}

impl Square {
    pub fn new(color: ShapeColor, anchor: Point, size: i32) -> ShapeResult<Self> {
        common::validate_size("size", size)?;
        Ok(Self {
            core: ShapeCore::new(color),
            anchor,
            size,
            bounding_box: BoundingBox::from_min_size(anchor, size, size),
        })
    }

    /// Create a square centered on a clicked point
    pub fn centered_at(color: ShapeColor, center: Point, size: i32) -> ShapeResult<Self> {
        Self::new(color, center.offset(-size / 2, -size / 2), size)
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    fn update_bounding_box(&mut self) {
        self.bounding_box = BoundingBox::from_min_size(self.anchor, self.size, self.size);
    }
}

impl Bounded for Square {
    fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }
}

impl Shape for Square {
    fn id(&self) -> ShapeId {
        self.core.id
    }

    fn keyword(&self) -> &'static str {
        "SQUARE"
    }

    fn anchor(&self) -> Point {
        self.anchor
    }

    fn color(&self) -> ShapeColor {
        self.core.color
    }

    fn contains(&self, point: Point) -> bool {
        self.bounding_box.contains(point)
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
        self.update_bounding_box();
    }

    fn scale_up(&mut self) {
        self.size = common::scaled(self.size, common::SCALE_UP_FACTOR);
        self.update_bounding_box();
    }

    fn scale_down(&mut self) -> bool {
        if !common::can_scale_down(self.size) {
            return false;
        }
        self.size = common::scaled(self.size, common::SCALE_DOWN_FACTOR);
        self.update_bounding_box();
        true
    }

    fn is_selected(&self) -> bool {
        self.core.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.core.selected = selected;
    }

    fn to_record(&self) -> String {
        format!(
            "SQUARE {} {} {} {} {}",
            self.anchor.x,
            self.anchor.y,
            self.size,
            self.core.color.token(),
            common::selected_token(self.core.selected)
        )
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounding_box, self.core.paint_color());
    }
}
