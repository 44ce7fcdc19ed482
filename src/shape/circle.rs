use super::Shape;
use super::common::{self, ShapeCore};
use crate::color::ShapeColor;
use crate::error::ShapeResult;
use crate::geometry::{BoundingBox, Bounded, Point};
use crate::id_generator::ShapeId;
use crate::renderer::Canvas;

/// Circle anchored at its center
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    core: ShapeCore,
    center: Point,
    diameter: i32,
    bounding_box: BoundingBox,
}

fn circle_bounds(center: Point, diameter: i32) -> BoundingBox {
    let radius = diameter / 2;
    BoundingBox::from_corners(center.offset(-radius, -radius), center.offset(radius, radius))
}

impl Circle {
    pub fn new(color: ShapeColor, center: Point, diameter: i32) -> ShapeResult<Self> {
        common::validate_size("diameter", diameter)?;
        Ok(Self {
            core: ShapeCore::new(color),
            center,
            diameter,
            bounding_box: circle_bounds(center, diameter),
        })
    }

    pub fn diameter(&self) -> i32 {
        self.diameter
    }

    pub fn center(&self) -> Point {
        self.center
    }

    fn update_bounding_box(&mut self) {
        self.bounding_box = circle_bounds(self.center, self.diameter);
    }
}

impl Bounded for Circle {
    fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }
}

impl Shape for Circle {
    fn id(&self) -> ShapeId {
        self.core.id
    }

    fn keyword(&self) -> &'static str {
        "CIRCLE"
    }

    fn anchor(&self) -> Point {
        self.center
    }

    fn color(&self) -> ShapeColor {
        self.core.color
    }

    fn contains(&self, point: Point) -> bool {
        // distance <= diameter / 2, squared on both sides to stay in integers
        let dx = i128::from(point.x) - i128::from(self.center.x);
        let dy = i128::from(point.y) - i128::from(self.center.y);
        let diameter = i128::from(self.diameter);
        4 * (dx * dx + dy * dy) <= diameter * diameter
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.center = anchor;
        self.update_bounding_box();
    }

    fn scale_up(&mut self) {
        self.diameter = common::scaled(self.diameter, common::SCALE_UP_FACTOR);
        self.update_bounding_box();
    }

    fn scale_down(&mut self) -> bool {
        if !common::can_scale_down(self.diameter) {
            return false;
        }
        self.diameter = common::scaled(self.diameter, common::SCALE_DOWN_FACTOR);
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
            "CIRCLE {} {} {} {} {}",
            self.center.x,
            self.center.y,
            self.diameter,
            self.core.color.token(),
            common::selected_token(self.core.selected)
        )
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_circle(self.center, self.diameter, self.core.paint_color());
    }
}
