//! Core library for scattering rotated items on a canvas without overlap.
//!
//! - Geometry: oriented rectangle corners, SAT projection axes
//! - Placement: random rejection sampling behind the `Placer` trait, best-effort with skip reasons
//! - Puzzle: "count the correctly spelled word" generator on top of the layout engine
//! - Data model is serde-serializable; JSON exporters live in `export`.
//!
//! Quick example:
//! ```ignore
//! use rand::{SeedableRng, rngs::StdRng};
//! use wordscatter_core::{LayoutConfig, LayoutItem, Rotation, layout_items};
//! # fn main() -> anyhow::Result<()> {
//! let cfg = LayoutConfig::builder().with_canvas(800, 600).build();
//! let items = vec![
//!   LayoutItem::new("a".to_string(), 120, 40, Rotation::Deg0),
//!   LayoutItem::new("b".to_string(), 40, 120, Rotation::Deg90),
//! ];
//! let mut rng = StdRng::seed_from_u64(7);
//! let out = layout_items(items, &cfg, &mut rng)?;
//! println!("placed: {}", out.placed.len());
//! # Ok(()) }
//! ```

pub mod collision;
pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod placer;
pub mod puzzle;
pub mod text;
pub mod words;

pub use config::*;
pub use error::*;
pub use export::*;
pub use layout::*;
pub use model::*;
pub use placer::Placer;
pub use placer::random::RandomPlacer;
pub use puzzle::*;
pub use text::{BitmapFont, RenderedText, TextRenderer};

/// Convenience prelude for common types and functions.
/// Importing `wordscatter_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{
        Difficulty, ItemOrder, LayoutConfig, LayoutConfigBuilder, PuzzleConfig,
        PuzzleConfigBuilder, Rotation,
    };
    pub use crate::model::{
        Layout, LayoutItem, LayoutStats, Meta, PlacedItem, Point, Polygon, SkipReason, SkippedItem,
    };
    pub use crate::placer::{Placer, random::RandomPlacer};
    pub use crate::text::{BitmapFont, TextRenderer};
    pub use crate::{
        PuzzleOutput, PuzzleWord, generate_batch, generate_batch_with, generate_word_puzzle,
        layout_items, layout_with,
    };
}
