use super::Placer;
use crate::collision::{in_bounds_with_margins, overlaps};
use crate::config::LayoutConfig;
use crate::geometry::item_polygon;
use crate::model::{LayoutItem, PlacedItem};
use rand::Rng;
use tracing::trace;

/// Inclusive range of valid center coordinates for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeasibleRange {
    pub x: (i64, i64),
    pub y: (i64, i64),
    /// The boundary margin was dropped on this axis because the item is too large for it.
    pub relaxed_x: bool,
    pub relaxed_y: bool,
}

/// Center range for a `width` x `height` item, or `None` if it cannot fit the canvas
/// even with the boundary margin dropped.
pub fn feasible_range(cfg: &LayoutConfig, width: u32, height: u32) -> Option<FeasibleRange> {
    let (x, relaxed_x) = axis_range(width, cfg.width, cfg.margin)?;
    let (y, relaxed_y) = axis_range(height, cfg.height, cfg.margin)?;
    Some(FeasibleRange {
        x,
        y,
        relaxed_x,
        relaxed_y,
    })
}

fn axis_range(extent: u32, canvas: u32, margin: u32) -> Option<((i64, i64), bool)> {
    let half = i64::from(extent / 2);
    let canvas = i64::from(canvas);
    let margin = i64::from(margin);
    let (lo, hi) = (half + margin, canvas - half - margin);
    if lo < hi {
        return Some(((lo, hi), false));
    }
    let (lo, hi) = (half, canvas - half);
    if lo <= hi { Some(((lo, hi), true)) } else { None }
}

/// Uniform random sampler over the feasible center range.
///
/// Holds the run's random source; two placers seeded alike propose the same
/// sequence of centers.
pub struct RandomPlacer<'a, R: Rng + ?Sized> {
    config: &'a LayoutConfig,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RandomPlacer<'a, R> {
    pub fn new(config: &'a LayoutConfig, rng: &'a mut R) -> Self {
        Self { config, rng }
    }
}

impl<K, R: Rng + ?Sized> Placer<K> for RandomPlacer<'_, R> {
    fn can_place(&self, item: &LayoutItem<K>) -> bool {
        feasible_range(self.config, item.width, item.height).is_some()
    }

    fn try_place(&mut self, item: &LayoutItem<K>, placed: &[PlacedItem<K>]) -> Option<(u32, u32)> {
        let range = feasible_range(self.config, item.width, item.height)?;
        let x = self.rng.gen_range(range.x.0..=range.x.1);
        let y = self.rng.gen_range(range.y.0..=range.y.1);

        let candidate = item_polygon(x as f64, y as f64, item.width, item.height, item.rotation);

        let margin = f64::from(self.config.margin);
        let margin_x = if range.relaxed_x { 0.0 } else { margin };
        let margin_y = if range.relaxed_y { 0.0 } else { margin };
        if !in_bounds_with_margins(
            &candidate,
            self.config.width,
            self.config.height,
            margin_x,
            margin_y,
        ) {
            trace!(x, y, "candidate out of bounds");
            return None;
        }

        let gap = f64::from(self.config.item_margin);
        if placed.iter().any(|p| overlaps(&candidate, &p.polygon(), gap)) {
            trace!(x, y, "candidate collides");
            return None;
        }

        Some((u32::try_from(x).ok()?, u32::try_from(y).ok()?))
    }
}
