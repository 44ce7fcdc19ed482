// src/renderer.rs
use egui::{Color32, Painter, Pos2, Stroke};

use crate::geometry::{BoundingBox, Point};

/// Outline color of the drag-selection rectangle
pub const SELECTION_OUTLINE_COLOR: Color32 = Color32::BLACK;
pub const SELECTION_OUTLINE_WIDTH: f32 = 1.0;

/// Paint target handed to `Scene::draw`.
///
/// All coordinates are scene coordinates; the implementor decides how they
/// map onto pixels.
pub trait Canvas {
    fn fill_rect(&mut self, rect: BoundingBox, color: Color32);

    fn fill_circle(&mut self, center: Point, diameter: i32, color: Color32);

    fn stroke_rect(&mut self, rect: BoundingBox, width: f32, color: Color32);
}

/// A single recorded paint operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect {
        rect: BoundingBox,
        color: Color32,
    },
    FillCircle {
        center: Point,
        diameter: i32,
        color: Color32,
    },
    StrokeRect {
        rect: BoundingBox,
        width: f32,
        color: Color32,
    },
}

/// Canvas that records the draw-call sequence instead of painting
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, rect: BoundingBox, color: Color32) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn fill_circle(&mut self, center: Point, diameter: i32, color: Color32) {
        self.calls.push(DrawCall::FillCircle {
            center,
            diameter,
            color,
        });
    }

    fn stroke_rect(&mut self, rect: BoundingBox, width: f32, color: Color32) {
        self.calls.push(DrawCall::StrokeRect { rect, width, color });
    }
}

/// Canvas backed by an egui painter.
///
/// Scene coordinates are relative to `origin`, normally the top-left corner
/// of the canvas widget.
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, rect: BoundingBox) -> egui::Rect {
        rect.to_rect().translate(self.origin.to_vec2())
    }
}

impl Canvas for PainterCanvas<'_> {
    fn fill_rect(&mut self, rect: BoundingBox, color: Color32) {
        self.painter.rect_filled(self.to_screen(rect), 0.0, color);
    }

    fn fill_circle(&mut self, center: Point, diameter: i32, color: Color32) {
        let center = center.to_pos2() + self.origin.to_vec2();
        self.painter
            .circle_filled(center, diameter as f32 / 2.0, color);
    }

    fn stroke_rect(&mut self, rect: BoundingBox, width: f32, color: Color32) {
        self.painter
            .rect_stroke(self.to_screen(rect), 0.0, Stroke::new(width, color));
    }
}
