use super::Shape;
use super::common::{self, ShapeCore};
use crate::color::ShapeColor;
use crate::error::ShapeResult;
use crate::geometry::{BoundingBox, Bounded, Point};
use crate::id_generator::ShapeId;
use crate::renderer::Canvas;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    core: ShapeCore,
    anchor: Point,
    width: i32,
    height: i32,
    bounding_box: BoundingBox,
}

impl Rectangle {
    /// Create a rectangle whose top-left corner is `anchor`
    pub fn new(color: ShapeColor, anchor: Point, width: i32, height: i32) -> ShapeResult<Self> {
        common::validate_size("width", width)?;
        common::validate_size("height", height)?;
        Ok(Self {
            core: ShapeCore::new(color),
            anchor,
            width,
            height,
            bounding_box: BoundingBox::from_min_size(anchor, width, height),
        })
    }

    /// Create a rectangle centered on a clicked point
    pub fn centered_at(
        color: ShapeColor,
        center: Point,
        width: i32,
        height: i32,
    ) -> ShapeResult<Self> {
        Self::new(color, center.offset(-width / 2, -height / 2), width, height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn update_bounding_box(&mut self) {
        self.bounding_box = BoundingBox::from_min_size(self.anchor, self.width, self.height);
    }
}

impl Bounded for Rectangle {
    fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }
}

impl Shape for Rectangle {
    fn id(&self) -> ShapeId {
        self.core.id
    }

    fn keyword(&self) -> &'static str {
        "RECTANGLE"
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
        self.width = common::scaled(self.width, common::SCALE_UP_FACTOR);
        self.height = common::scaled(self.height, common::SCALE_UP_FACTOR);
        self.update_bounding_box();
    }

    fn scale_down(&mut self) -> bool {
        if !(common::can_scale_down(self.width) && common::can_scale_down(self.height)) {
            return false;
        }
        self.width = common::scaled(self.width, common::SCALE_DOWN_FACTOR);
        self.height = common::scaled(self.height, common::SCALE_DOWN_FACTOR);
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
            "RECTANGLE {} {} {} {} {} {}",
            self.anchor.x,
            self.anchor.y,
            self.width,
            self.height,
            self.core.color.token(),
            common::selected_token(self.core.selected)
        )
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounding_box, self.core.paint_color());
    }
}
