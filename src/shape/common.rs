use crate::color::ShapeColor;
use crate::error::{ShapeError, ShapeResult};
use crate::id_generator::{self, ShapeId};

/// Scaling down never produces a size below this
pub const MIN_SCALE_SIZE: i32 = 20;
pub const SCALE_UP_FACTOR: f64 = 1.2;
pub const SCALE_DOWN_FACTOR: f64 = 0.8;

/// State shared by every variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShapeCore {
    pub(crate) id: ShapeId,
    pub(crate) color: ShapeColor,
    pub(crate) selected: bool,
}

impl ShapeCore {
    pub(crate) fn new(color: ShapeColor) -> Self {
        Self {
            id: id_generator::generate_id(),
            color,
            selected: false,
        }
    }

    /// Paint color for the current selection state
    pub(crate) fn paint_color(&self) -> egui::Color32 {
        if self.selected {
            self.color.darker()
        } else {
            self.color.to_color32()
        }
    }
}

/// Truncating scale, matching integer pixel sizes
pub(crate) fn scaled(size: i32, factor: f64) -> i32 {
    (f64::from(size) * factor) as i32
}

/// Whether shrinking `size` keeps it at or above [`MIN_SCALE_SIZE`]
pub(crate) fn can_scale_down(size: i32) -> bool {
    scaled(size, SCALE_DOWN_FACTOR) >= MIN_SCALE_SIZE
}

pub(crate) fn validate_size(name: &str, value: i32) -> ShapeResult<()> {
    if value <= 0 {
        Err(ShapeError::InvalidArgument(format!(
            "{} must be positive, got {}",
            name, value
        )))
    } else {
        Ok(())
    }
}

pub(crate) fn selected_token(selected: bool) -> &'static str {
    if selected { "true" } else { "false" }
}
