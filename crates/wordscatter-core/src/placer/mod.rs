use crate::model::{LayoutItem, PlacedItem};

pub mod random;

/// A placer proposes a center for an item on the current canvas.
///
/// Implementations must never return a position whose footprint leaves the canvas
/// bounds or overlaps an item in `placed` (grown by the configured gap).
/// `try_place` returns `None` when a single attempt fails; the layout decides
/// whether to retry.
pub trait Placer<K> {
    fn can_place(&self, item: &LayoutItem<K>) -> bool;
    fn try_place(&mut self, item: &LayoutItem<K>, placed: &[PlacedItem<K>]) -> Option<(u32, u32)>;
}
