#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod history;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod persistence;
pub mod renderer;
pub mod scene;
pub mod selection;
pub mod shape;

pub use app::DrawShapesApp;
pub use color::ShapeColor;
pub use config::{ConfigError, EditorConfig};
pub use editor::{Editor, EditorSettings, OperationMode};
pub use error::{ShapeError, ShapeResult};
pub use geometry::{BoundingBox, Bounded, Point};
pub use input::{InputEvent, InputHandler};
pub use renderer::{Canvas, DrawCall, DrawList, PainterCanvas};
pub use scene::Scene;
pub use selection::SelectionRectangle;
pub use shape::{Circle, Rectangle, Shape, ShapeBuilder, ShapeKind, ShapeType, Square};
