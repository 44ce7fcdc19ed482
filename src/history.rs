use crate::shape::ShapeType;

/// A full copy of a scene's shape sequence
pub type Snapshot = Vec<ShapeType>;

/// LIFO of scene snapshots used for single-step undo.
///
/// Snapshots are deep copies, so geometry changed in place after a snapshot
/// was taken does not leak into it.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    /// Stack of states that can be restored
    undo_stack: Vec<Snapshot>,
    /// Oldest snapshots are dropped beyond this depth
    max_depth: Option<usize>,
}

impl UndoHistory {
    /// Creates an unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self {
            undo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Save a state before it is mutated
    pub fn push(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);

        if let Some(max) = self.max_depth {
            if self.undo_stack.len() > max {
                let excess = self.undo_stack.len() - max;
                self.undo_stack.drain(..excess);
            }
        }
    }

    /// Take the most recent state, if any
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.undo_stack.pop()
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}
