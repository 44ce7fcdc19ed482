use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::{ShapeError, ShapeResult};
use crate::geometry::{Bounded, Point};
use crate::history::UndoHistory;
use crate::id_generator::ShapeId;
use crate::persistence;
use crate::renderer::Canvas;
use crate::selection::SelectionRectangle;
use crate::shape::{Shape, ShapeType};

/// Drag-selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging {
        start: Point,
        rect: Option<SelectionRectangle>,
    },
}

/// An ordered collection of shapes.
///
/// Order is paint order: later shapes are painted on top. Every mutation of
/// the sequence saves the previous state first, so [`Scene::undo`] can put
/// it back.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<ShapeType>,
    drag: DragState,
    history: UndoHistory,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene whose history keeps at most `max_depth` snapshots
    pub fn with_undo_limit(max_depth: Option<usize>) -> Self {
        Self {
            shapes: Vec::new(),
            drag: DragState::Idle,
            history: UndoHistory::with_max_depth(max_depth),
        }
    }

    pub fn shapes(&self) -> &[ShapeType] {
        &self.shapes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShapeType> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeType> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Number of states `undo` can restore
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    fn save_state_for_undo(&mut self) {
        self.history.push(self.shapes.clone());
    }

    /// Add a shape on top of the others
    pub fn add_shape(&mut self, shape: impl Into<ShapeType>) {
        let shape = shape.into();
        self.save_state_for_undo();
        debug!("Adding {} {}", shape.keyword(), shape.id());
        self.shapes.push(shape);
    }

    /// Remove every shape whose id is listed
    pub fn remove_shapes(&mut self, ids: &[ShapeId]) {
        self.save_state_for_undo();
        let before = self.shapes.len();
        self.shapes.retain(|s| !ids.contains(&s.id()));
        debug!("Removed {} shapes", before - self.shapes.len());
    }

    /// Shapes containing `point`, in collection order
    pub fn select_at(&self, point: Point) -> Vec<&ShapeType> {
        self.shapes.iter().filter(|s| s.contains(point)).collect()
    }

    /// Shapes whose bounding box overlaps `other`'s, in collection order
    pub fn select_intersecting(&self, other: &dyn Bounded) -> Vec<&ShapeType> {
        self.shapes.iter().filter(|s| s.intersects(other)).collect()
    }

    pub fn selected_ids(&self) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .filter(|s| s.is_selected())
            .map(|s| s.id())
            .collect()
    }

    pub fn has_selection(&self) -> bool {
        self.shapes.iter().any(|s| s.is_selected())
    }

    /// Mark every shape containing `point` as selected.
    ///
    /// Returns the number of hits; with no hits the whole selection is
    /// cleared instead.
    pub fn set_selected_at(&mut self, point: Point) -> usize {
        let mut hits = 0;
        for shape in self.shapes.iter_mut().filter(|s| s.contains(point)) {
            shape.set_selected(true);
            hits += 1;
        }
        if hits == 0 {
            self.clear_selection();
        }
        hits
    }

    pub fn set_selected(&mut self, id: ShapeId, selected: bool) -> bool {
        match self.shapes.iter_mut().find(|s| s.id() == id) {
            Some(shape) => {
                shape.set_selected(selected);
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        for shape in &mut self.shapes {
            shape.set_selected(false);
        }
    }

    /// Begin a drag-selection at `point`, clearing the current selection
    pub fn start_drag(&mut self, point: Point) {
        self.clear_selection();
        self.drag = DragState::Dragging {
            start: point,
            rect: None,
        };
    }

    /// Stretch the selection rectangle to `point` and reselect what it covers
    pub fn update_select_rect(&mut self, point: Point) {
        let DragState::Dragging { start, .. } = self.drag else {
            warn!("Ignoring selection update at {:?} with no drag in progress", point);
            return;
        };

        let rect = SelectionRectangle::from_corners(start, point);
        self.drag = DragState::Dragging {
            start,
            rect: Some(rect),
        };

        for shape in &mut self.shapes {
            let hit = shape.intersects(&rect);
            shape.set_selected(hit);
        }
    }

    /// Finish the drag; the selection made so far stays
    pub fn stop_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// The rectangle of the drag in progress, once the pointer has moved
    pub fn selection_rect(&self) -> Option<SelectionRectangle> {
        match self.drag {
            DragState::Dragging { rect, .. } => rect,
            DragState::Idle => None,
        }
    }

    /// Apply `op` to every selected shape. The state is saved once, and only
    /// when there is at least one selected shape.
    fn apply_to_selected(&mut self, mut op: impl FnMut(&mut ShapeType)) -> bool {
        if !self.has_selection() {
            return false;
        }
        self.save_state_for_undo();
        for shape in self.shapes.iter_mut().filter(|s| s.is_selected()) {
            op(shape);
        }
        true
    }

    pub fn move_selected_shapes(&mut self, dx: i32, dy: i32) -> bool {
        let moved = self.apply_to_selected(|s| s.translate(dx, dy));
        if moved {
            debug!("Moved selection by ({}, {})", dx, dy);
        }
        moved
    }

    pub fn scale_up_selected_shapes(&mut self) -> bool {
        self.apply_to_selected(|s| s.scale_up())
    }

    pub fn scale_down_selected_shapes(&mut self) -> bool {
        self.apply_to_selected(|s| {
            s.scale_down();
        })
    }

    /// Move selected shapes above the rest, keeping relative order
    pub fn bring_to_front(&mut self) {
        self.save_state_for_undo();
        let (selected, unselected): (Vec<_>, Vec<_>) =
            self.shapes.drain(..).partition(|s| s.is_selected());
        self.shapes.extend(unselected);
        self.shapes.extend(selected);
    }

    /// Move selected shapes below the rest, keeping relative order
    pub fn send_to_back(&mut self) {
        self.save_state_for_undo();
        let (selected, unselected): (Vec<_>, Vec<_>) =
            self.shapes.drain(..).partition(|s| s.is_selected());
        self.shapes.extend(selected);
        self.shapes.extend(unselected);
    }

    /// Restore the state saved before the last mutation.
    ///
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.shapes = previous;
                info!(
                    "Undo: {} shapes restored, {} states left",
                    self.shapes.len(),
                    self.history.len()
                );
                true
            }
            None => {
                debug!("Nothing to undo");
                false
            }
        }
    }

    /// Paint every shape in order, then the selection rectangle while dragging
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for shape in &self.shapes {
            shape.draw(canvas);
        }
        if let Some(rect) = self.selection_rect() {
            rect.draw(canvas);
        }
    }

    /// Write the scene in the text format
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        persistence::write_shapes(writer, &self.shapes)
    }

    /// The file content `save_to_file` would produce
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // writing into memory cannot fail
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Save to `path`, replacing any existing file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> ShapeResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ShapeError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| ShapeError::io(path, e))?;
        info!("Saved {} shapes to {}", self.shapes.len(), path.display());
        Ok(())
    }

    fn clear_for_load(&mut self) {
        self.save_state_for_undo();
        self.shapes.clear();
    }

    /// Replace the scene with the records read from `reader`.
    ///
    /// The current state is saved for undo first. On failure the scene is
    /// left empty; `undo` brings back what was there before.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> ShapeResult<()> {
        self.clear_for_load();
        self.shapes = persistence::read_shapes(reader)?;
        Ok(())
    }

    /// Replace the scene with the shapes read from `path`, see [`Scene::read_from`]
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> ShapeResult<()> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                self.clear_for_load();
                return Err(ShapeError::io(path, e));
            }
        };
        self.read_from(BufReader::new(file)).inspect_err(|e| {
            warn!("Failed to load {}: {}", path.display(), e);
        })?;

        info!("Loaded {} shapes from {}", self.shapes.len(), path.display());
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a ShapeType;
    type IntoIter = std::slice::Iter<'a, ShapeType>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
