use std::path::Path;

use egui::{Key, Modifiers, PointerButton};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::color::ShapeColor;
use crate::config::EditorConfig;
use crate::error::ShapeResult;
use crate::geometry::Point;
use crate::input::InputEvent;
use crate::scene::Scene;
use crate::shape::{ShapeBuilder, ShapeKind};

/// What a primary click and the arrow keys do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OperationMode {
    #[default]
    Draw,
    Move,
    Resize,
}

impl OperationMode {
    pub const ALL: [OperationMode; 3] =
        [OperationMode::Draw, OperationMode::Move, OperationMode::Resize];

    pub fn label(self) -> &'static str {
        match self {
            OperationMode::Draw => "Draw",
            OperationMode::Move => "Move",
            OperationMode::Resize => "Resize",
        }
    }
}

/// User choices that persist between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub color: ShapeColor,
    pub shape_kind: ShapeKind,
    pub mode: OperationMode,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            color: ShapeColor::Red,
            shape_kind: ShapeKind::Square,
            mode: OperationMode::Draw,
        }
    }
}

/// Maps user input onto scene operations
#[derive(Debug)]
pub struct Editor {
    scene: Scene,
    config: EditorConfig,
    pub settings: EditorSettings,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            scene: Scene::with_undo_limit(config.undo_limit),
            config,
            settings: EditorSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: EditorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Apply one input event. Returns true when a repaint is needed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { position } => {
                self.scene.start_drag(position);
                true
            }
            InputEvent::PointerDrag { position } => {
                self.scene.update_select_rect(position);
                true
            }
            InputEvent::PointerUp => {
                self.scene.stop_drag();
                true
            }
            InputEvent::Click { position, button } => self.on_click(position, button),
            InputEvent::Scroll { delta } => {
                if delta > 0.0 {
                    self.scene.scale_up_selected_shapes()
                } else {
                    self.scene.scale_down_selected_shapes()
                }
            }
            InputEvent::KeyDown { key, modifiers } => self.on_key(key, modifiers),
        }
    }

    fn on_click(&mut self, position: Point, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary if self.settings.mode == OperationMode::Draw => {
                match self.add_shape_at(position) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("Could not create shape at {:?}: {}", position, e);
                        false
                    }
                }
            }
            PointerButton::Secondary => {
                let hits = self.scene.set_selected_at(position);
                debug!("Selected {} shapes at {:?}", hits, position);
                true
            }
            _ => false,
        }
    }

    fn on_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        if (modifiers.ctrl || modifiers.command) && key == Key::Z {
            return self.undo();
        }

        let step = self.config.move_step;
        match (self.settings.mode, key) {
            (OperationMode::Move, Key::ArrowUp) => self.scene.move_selected_shapes(0, -step),
            (OperationMode::Move, Key::ArrowDown) => self.scene.move_selected_shapes(0, step),
            (OperationMode::Move, Key::ArrowLeft) => self.scene.move_selected_shapes(-step, 0),
            (OperationMode::Move, Key::ArrowRight) => self.scene.move_selected_shapes(step, 0),
            (OperationMode::Resize, Key::ArrowUp) => self.scene.scale_up_selected_shapes(),
            (OperationMode::Resize, Key::ArrowDown) => self.scene.scale_down_selected_shapes(),
            (_, Key::Delete | Key::Backspace) => self.remove_selected(),
            _ => false,
        }
    }

    /// Add a shape of the current kind and color centered on `position`
    pub fn add_shape_at(&mut self, position: Point) -> ShapeResult<()> {
        let builder = ShapeBuilder::new(self.settings.shape_kind)
            .color(self.settings.color)
            .center(position);
        let builder = match self.settings.shape_kind {
            ShapeKind::Square => builder.size(self.config.square_size),
            ShapeKind::Circle => builder.size(self.config.circle_diameter),
            ShapeKind::Rectangle => {
                builder.dimensions(self.config.rectangle_width, self.config.rectangle_height)
            }
        };
        self.scene.add_shape(builder.build()?);
        Ok(())
    }

    pub fn remove_selected(&mut self) -> bool {
        let ids = self.scene.selected_ids();
        if ids.is_empty() {
            return false;
        }
        self.scene.remove_shapes(&ids);
        true
    }

    pub fn bring_to_front(&mut self) {
        self.scene.bring_to_front();
    }

    pub fn send_to_back(&mut self) {
        self.scene.send_to_back();
    }

    pub fn undo(&mut self) -> bool {
        self.scene.undo()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ShapeResult<()> {
        self.scene.save_to_file(path.as_ref())
    }

    pub fn load(&mut self, path: impl AsRef<Path>) -> ShapeResult<()> {
        let path = path.as_ref();
        info!("Loading scene from {}", path.display());
        self.scene.load_from_file(path)
    }
}
