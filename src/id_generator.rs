use std::sync::atomic::{AtomicUsize, Ordering};

/// Process-unique identity of a shape; survives cloning into undo snapshots
pub type ShapeId = usize;

// Single static counter for all shapes
static NEXT_SHAPE_ID: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id() -> ShapeId {
    NEXT_SHAPE_ID.fetch_add(1, Ordering::SeqCst)
}
