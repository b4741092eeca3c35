use crate::config::{LayoutConfig, Rotation};
use serde::{Deserialize, Serialize};

/// A point on the canvas (pixels, y grows downwards).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Convex quadrilateral, corners in consistent winding.
pub type Polygon = [Point; 4];

/// An element waiting to be placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutItem<K = String> {
    /// User-specified key (e.g., word text plus its index).
    pub key: K,
    /// Axis-aligned extent after rotation.
    pub width: u32,
    pub height: u32,
    pub rotation: Rotation,
}

impl<K> LayoutItem<K> {
    pub fn new(key: K, width: u32, height: u32, rotation: Rotation) -> Self {
        Self {
            key,
            width,
            height,
            rotation,
        }
    }
}

/// A successfully placed item. Never mutated after the layout appends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacedItem<K = String> {
    pub key: K,
    /// Center on the canvas.
    pub x: u32,
    pub y: u32,
    /// Axis-aligned extent after rotation.
    pub width: u32,
    pub height: u32,
    pub rotation: Rotation,
}

impl<K> PlacedItem<K> {
    /// Collision footprint on the canvas.
    pub fn polygon(&self) -> Polygon {
        crate::geometry::item_polygon(
            f64::from(self.x),
            f64::from(self.y),
            self.width,
            self.height,
            self.rotation,
        )
    }

    pub fn area(&self) -> u64 {
        (self.width as u64) * (self.height as u64)
    }
}

/// Why an item did not make it onto the canvas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Extents exceed the canvas even without the boundary margin.
    OversizedItem,
    /// No valid position was found within the attempt bound.
    PlacementExhausted,
    /// The text renderer produced no visible pixels.
    DegenerateGlyph,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkippedItem<K = String> {
    pub key: K,
    pub reason: SkipReason,
}

/// Result of one layout run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout<K = String> {
    pub width: u32,
    pub height: u32,
    /// Placed items in placement order.
    pub placed: Vec<PlacedItem<K>>,
    /// Skipped items in processing order.
    pub skipped: Vec<SkippedItem<K>>,
}

impl<K> Layout<K> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            placed: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }

    /// Computes placement statistics for this layout.
    pub fn stats(&self) -> LayoutStats {
        let mut num_oversized = 0;
        let mut num_exhausted = 0;
        let mut num_degenerate = 0;
        for s in &self.skipped {
            match s.reason {
                SkipReason::OversizedItem => num_oversized += 1,
                SkipReason::PlacementExhausted => num_exhausted += 1,
                SkipReason::DegenerateGlyph => num_degenerate += 1,
            }
        }

        let canvas_area = (self.width as u64) * (self.height as u64);
        let placed_area: u64 = self.placed.iter().map(|p| p.area()).sum();
        let occupancy = if canvas_area > 0 {
            placed_area as f64 / canvas_area as f64
        } else {
            0.0
        };
        let num_rotated = self
            .placed
            .iter()
            .filter(|p| p.rotation != Rotation::Deg0)
            .count();

        LayoutStats {
            num_requested: self.placed.len() + self.skipped.len(),
            num_placed: self.placed.len(),
            num_skipped: self.skipped.len(),
            num_oversized,
            num_exhausted,
            num_degenerate,
            canvas_area,
            placed_area,
            occupancy,
            num_rotated,
        }
    }
}

/// Statistics about a layout run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LayoutStats {
    /// Items handed to the run (placed + skipped).
    pub num_requested: usize,
    pub num_placed: usize,
    pub num_skipped: usize,
    pub num_oversized: usize,
    pub num_exhausted: usize,
    pub num_degenerate: usize,
    pub canvas_area: u64,
    /// Sum of placed item extents (width * height after rotation).
    pub placed_area: u64,
    /// placed_area / canvas_area (0.0 to 1.0 unless extents overhang).
    pub occupancy: f64,
    /// Placed items drawn at a non-zero rotation.
    pub num_rotated: usize,
}

impl LayoutStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Placed: {}/{}, Skipped: {} (oversized {}, exhausted {}, empty glyph {}), Occupancy: {:.2}%, Rotated: {}",
            self.num_placed,
            self.num_requested,
            self.num_skipped,
            self.num_oversized,
            self.num_exhausted,
            self.num_degenerate,
            self.occupancy * 100.0,
            self.num_rotated,
        )
    }

    /// Canvas pixels not covered by any placed extent.
    pub fn free_area(&self) -> u64 {
        self.canvas_area.saturating_sub(self.placed_area)
    }
}

/// Layout-level metadata attached to exported records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Schema version of the JSON records; current: "1".
    pub schema_version: String,
    pub app: String,
    pub version: String,
    pub canvas: (u32, u32),
    pub margin: u32,
    pub item_margin: u32,
    pub max_attempts: u32,
    pub rotations: Vec<Rotation>,
}

impl Meta {
    pub fn from_config(cfg: &LayoutConfig) -> Self {
        Self {
            schema_version: "1".into(),
            app: "wordscatter".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            canvas: (cfg.width, cfg.height),
            margin: cfg.margin,
            item_margin: cfg.item_margin,
            max_attempts: cfg.max_attempts,
            rotations: cfg.rotations.clone(),
        }
    }
}
