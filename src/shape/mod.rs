use serde::{Deserialize, Serialize};

mod common;
pub(crate) mod circle;
pub(crate) mod rectangle;
pub(crate) mod square;

pub use circle::Circle;
pub use common::{MIN_SCALE_SIZE, SCALE_DOWN_FACTOR, SCALE_UP_FACTOR};
pub use rectangle::Rectangle;
pub use square::Square;

use crate::color::ShapeColor;
use crate::error::{ShapeError, ShapeResult};
use crate::geometry::{BoundingBox, Bounded, Point};
use crate::id_generator::ShapeId;
use crate::renderer::Canvas;

/// Common trait that all scene shapes implement.
///
/// Intersection comes from [`Bounded`] and compares bounding boxes only.
pub trait Shape: Bounded {
    /// Get the unique identifier for this shape
    fn id(&self) -> ShapeId;

    /// Keyword that starts this shape's record line
    fn keyword(&self) -> &'static str;

    /// Center for circles, top-left corner for squares and rectangles
    fn anchor(&self) -> Point;

    fn color(&self) -> ShapeColor;

    /// Exact hit test against the visual footprint
    fn contains(&self, point: Point) -> bool;

    /// Relocate the shape, recomputing its bounding box
    fn set_anchor(&mut self, anchor: Point);

    /// Translate the shape by the given delta
    fn translate(&mut self, dx: i32, dy: i32) {
        let anchor = self.anchor().offset(dx, dy);
        self.set_anchor(anchor);
    }

    /// Grow by [`SCALE_UP_FACTOR`]
    fn scale_up(&mut self);

    /// Shrink by [`SCALE_DOWN_FACTOR`] unless that would cross the
    /// [`MIN_SCALE_SIZE`] floor. Returns whether the shape changed.
    fn scale_down(&mut self) -> bool;

    fn is_selected(&self) -> bool;

    fn set_selected(&mut self, selected: bool);

    /// Render to one line of the scene file format
    fn to_record(&self) -> String;

    /// Paint filled geometry, darker when selected
    fn draw(&self, canvas: &mut dyn Canvas);
}

/// Enumeration of all shape types in a scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeType {
    Square(Square),
    Circle(Circle),
    Rectangle(Rectangle),
}

impl ShapeType {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeType::Square(_) => ShapeKind::Square,
            ShapeType::Circle(_) => ShapeKind::Circle,
            ShapeType::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    fn as_shape(&self) -> &dyn Shape {
        match self {
            ShapeType::Square(s) => s,
            ShapeType::Circle(c) => c,
            ShapeType::Rectangle(r) => r,
        }
    }

    fn as_shape_mut(&mut self) -> &mut dyn Shape {
        match self {
            ShapeType::Square(s) => s,
            ShapeType::Circle(c) => c,
            ShapeType::Rectangle(r) => r,
        }
    }
}

impl Bounded for ShapeType {
    fn bounding_box(&self) -> BoundingBox {
        self.as_shape().bounding_box()
    }
}

impl Shape for ShapeType {
    fn id(&self) -> ShapeId {
        self.as_shape().id()
    }

    fn keyword(&self) -> &'static str {
        self.as_shape().keyword()
    }

    fn anchor(&self) -> Point {
        self.as_shape().anchor()
    }

    fn color(&self) -> ShapeColor {
        self.as_shape().color()
    }

    fn contains(&self, point: Point) -> bool {
        self.as_shape().contains(point)
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.as_shape_mut().set_anchor(anchor);
    }

    fn scale_up(&mut self) {
        self.as_shape_mut().scale_up();
    }

    fn scale_down(&mut self) -> bool {
        self.as_shape_mut().scale_down()
    }

    fn is_selected(&self) -> bool {
        self.as_shape().is_selected()
    }

    fn set_selected(&mut self, selected: bool) {
        self.as_shape_mut().set_selected(selected);
    }

    fn to_record(&self) -> String {
        self.as_shape().to_record()
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.as_shape().draw(canvas);
    }
}

impl From<Square> for ShapeType {
    fn from(square: Square) -> Self {
        ShapeType::Square(square)
    }
}

impl From<Circle> for ShapeType {
    fn from(circle: Circle) -> Self {
        ShapeType::Circle(circle)
    }
}

impl From<Rectangle> for ShapeType {
    fn from(rectangle: Rectangle) -> Self {
        ShapeType::Rectangle(rectangle)
    }
}

/// The kind of shape to create, without geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Square,
    Circle,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Square, ShapeKind::Circle, ShapeKind::Rectangle];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Square => "Square",
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
        }
    }
}

/// Collects the fields needed for a shape created from a click.
///
/// The color and the point are both required; `build` reports the missing
/// one as [`ShapeError::InvalidArgument`].
#[derive(Debug, Clone)]
pub struct ShapeBuilder {
    kind: ShapeKind,
    color: Option<ShapeColor>,
    center: Option<Point>,
    width: i32,
    height: i32,
}

impl ShapeBuilder {
    /// Starts with the default sizes used for click-created shapes
    pub fn new(kind: ShapeKind) -> Self {
        let (width, height) = match kind {
            ShapeKind::Square | ShapeKind::Circle => (100, 100),
            ShapeKind::Rectangle => (100, 200),
        };
        Self {
            kind,
            color: None,
            center: None,
            width,
            height,
        }
    }

    pub fn color(mut self, color: ShapeColor) -> Self {
        self.color = Some(color);
        self
    }

    /// The clicked point; the shape is centered on it
    pub fn center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    /// Square size or circle diameter
    pub fn size(mut self, size: i32) -> Self {
        self.width = size;
        self.height = size;
        self
    }

    pub fn dimensions(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn build(self) -> ShapeResult<ShapeType> {
        let color = self
            .color
            .ok_or_else(|| ShapeError::InvalidArgument("shape color is required".to_owned()))?;
        let center = self
            .center
            .ok_or_else(|| ShapeError::InvalidArgument("shape point is required".to_owned()))?;

        let shape = match self.kind {
            ShapeKind::Square => Square::centered_at(color, center, self.width)?.into(),
            ShapeKind::Circle => Circle::new(color, center, self.width)?.into(),
            ShapeKind::Rectangle => {
                Rectangle::centered_at(color, center, self.width, self.height)?.into()
            }
        };
        Ok(shape)
    }
}

/// Factory functions for creating shapes from their stored anchor
pub mod factory {
    use super::*;

    pub fn create_square(color: ShapeColor, anchor: Point, size: i32) -> ShapeResult<ShapeType> {
        Ok(Square::new(color, anchor, size)?.into())
    }

    pub fn create_circle(
        color: ShapeColor,
        center: Point,
        diameter: i32,
    ) -> ShapeResult<ShapeType> {
        Ok(Circle::new(color, center, diameter)?.into())
    }

    pub fn create_rectangle(
        color: ShapeColor,
        anchor: Point,
        width: i32,
        height: i32,
    ) -> ShapeResult<ShapeType> {
        Ok(Rectangle::new(color, anchor, width, height)?.into())
    }
}
