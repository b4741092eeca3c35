use crate::compositing::{draw_polygon_outline, paste_centered};
use crate::config::{ItemOrder, PuzzleConfig, Rotation};
use crate::error::{Result, WordScatterError};
use crate::layout::layout_items;
use crate::model::{Layout, LayoutItem, LayoutStats, SkipReason, SkippedItem};
use crate::text::TextRenderer;
use crate::words::{random_word, scramble_word};
use image::{ImageFormat, Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One requested word of a puzzle; used as the layout key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PuzzleWord {
    /// Position in the order handed to the layout.
    pub index: usize,
    pub text: String,
    /// True for the correctly spelled word, false for a scrambled distractor.
    pub is_target: bool,
    pub font_size: u32,
}

/// A generated puzzle: composed canvas, layout and the answer.
pub struct PuzzleOutput {
    pub word: String,
    /// Words requested before placement.
    pub requested_total: u32,
    pub requested_correct: u32,
    /// Correctly spelled words actually visible on the canvas (the answer).
    pub visible_correct: usize,
    pub visible_total: usize,
    pub layout: Layout<PuzzleWord>,
    pub image: RgbaImage,
}

impl PuzzleOutput {
    /// File name stem `<word>_<visible_correct>`.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.word, self.visible_correct)
    }

    pub fn stats(&self) -> LayoutStats {
        self.layout.stats()
    }

    /// Writes the composed canvas as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

/// Seed of the `index`-th puzzle of a batch started from `base_seed`.
pub fn seed_for(base_seed: u64, index: usize) -> u64 {
    base_seed.wrapping_add(index as u64)
}

#[instrument(skip_all)]
/// Generates one count-the-correct-word puzzle.
///
/// Notes:
/// - All randomness comes from `rng`; the same seed reproduces the same puzzle.
/// - Words that cannot be placed are dropped; `visible_correct` is counted from the
///   placed set, so it may be lower than `requested_correct`.
pub fn generate_word_puzzle<T, R>(cfg: &PuzzleConfig, renderer: &T, rng: &mut R) -> Result<PuzzleOutput>
where
    T: TextRenderer + ?Sized,
    R: Rng + ?Sized,
{
    cfg.validate()?;
    let preset = cfg.preset();

    let total = rng.gen_range(preset.total_words.0..=preset.total_words.1);
    let ratio = match cfg.correct_ratio {
        Some(r) => r,
        None => rng.gen_range(0.2..0.6),
    };
    let correct = ((f64::from(total) * ratio) as u32).clamp(1, total);

    let word = match &cfg.word {
        Some(w) => {
            let w = w.trim().to_lowercase();
            if w.is_empty() || !w.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(WordScatterError::InvalidInput(format!(
                    "word must be non-empty ASCII letters, got {w:?}"
                )));
            }
            w
        }
        None => random_word(preset.word_length, rng)
            .ok_or_else(|| {
                WordScatterError::InvalidConfig(format!(
                    "no built-in words of length {}",
                    preset.word_length
                ))
            })?
            .to_string(),
    };

    let mut targets: Vec<bool> = (0..total).map(|i| i < correct).collect();
    match cfg.order {
        ItemOrder::TargetsFirst => {}
        ItemOrder::DistractorsFirst => targets.reverse(),
        ItemOrder::Shuffled => targets.shuffle(rng),
    }

    let mut items: Vec<LayoutItem<PuzzleWord>> = Vec::with_capacity(targets.len());
    let mut glyphs: Vec<Option<RgbaImage>> = Vec::with_capacity(targets.len());
    let mut empty_glyphs: Vec<SkippedItem<PuzzleWord>> = Vec::new();

    for (index, is_target) in targets.into_iter().enumerate() {
        let text = if is_target {
            word.clone()
        } else {
            scramble_word(&word, rng).ok_or_else(|| {
                WordScatterError::InvalidInput(format!(
                    "word {word:?} has no distinct reordering to use as a distractor"
                ))
            })?
        };
        let font_size = rng.gen_range(preset.font_size.0..=preset.font_size.1);
        let rotation = cfg
            .layout
            .rotations
            .choose(rng)
            .copied()
            .unwrap_or(Rotation::Deg0);
        let key = PuzzleWord {
            index,
            text,
            is_target,
            font_size,
        };

        match renderer.render(&key.text, font_size, rotation) {
            Some(rendered) => {
                items.push(LayoutItem::new(key, rendered.width, rendered.height, rotation));
                glyphs.push(Some(rendered.image));
            }
            None => {
                debug!(index, text = %key.text, "no visible glyphs, skipped");
                empty_glyphs.push(SkippedItem {
                    key,
                    reason: SkipReason::DegenerateGlyph,
                });
                glyphs.push(None);
            }
        }
    }

    let mut layout = layout_items(items, &cfg.layout, rng)?;
    if !empty_glyphs.is_empty() {
        empty_glyphs.append(&mut layout.skipped);
        layout.skipped = empty_glyphs;
    }

    let mut image = RgbaImage::from_pixel(cfg.layout.width, cfg.layout.height, Rgba(cfg.background));
    for p in &layout.placed {
        if let Some(Some(glyph)) = glyphs.get(p.key.index) {
            paste_centered(glyph, &mut image, p.x, p.y);
        }
        if cfg.outlines {
            draw_polygon_outline(&mut image, &p.polygon(), Rgba([255, 0, 0, 255]));
        }
    }

    let visible_correct = layout.placed.iter().filter(|p| p.key.is_target).count();
    let visible_total = layout.placed.len();
    info!(
        word = %word,
        requested = total,
        visible_correct,
        visible_total,
        skipped = layout.skip_count(),
        "puzzle generated"
    );

    Ok(PuzzleOutput {
        word,
        requested_total: total,
        requested_correct: correct,
        visible_correct,
        visible_total,
        layout,
        image,
    })
}

#[instrument(skip_all, fields(count = count))]
/// Generates `count` puzzles, the `i`-th seeded with [`seed_for`]`(base_seed, i)`.
///
/// With feature "parallel" and `cfg.parallel`, puzzles are generated on the rayon pool;
/// the output is identical to the sequential path. Every image is kept; use
/// [`generate_batch_with`] to hand each puzzle off as soon as it is ready.
pub fn generate_batch<T>(
    cfg: &PuzzleConfig,
    renderer: &T,
    base_seed: u64,
    count: usize,
) -> Result<Vec<PuzzleOutput>>
where
    T: TextRenderer + Sync + ?Sized,
{
    generate_batch_with(cfg, renderer, base_seed, count, |_, out| Ok(out))
}

/// Like [`generate_batch`], but passes each puzzle to `sink` right after it is
/// generated and keeps only what `sink` returns, in index order.
///
/// The first error, from generation or from `sink`, stops the batch.
pub fn generate_batch_with<T, F, S, E>(
    cfg: &PuzzleConfig,
    renderer: &T,
    base_seed: u64,
    count: usize,
    sink: F,
) -> std::result::Result<Vec<S>, E>
where
    T: TextRenderer + Sync + ?Sized,
    F: Fn(usize, PuzzleOutput) -> std::result::Result<S, E> + Sync + Send,
    S: Send,
    E: From<WordScatterError> + Send,
{
    cfg.validate()?;
    let run = |i: usize| -> std::result::Result<S, E> {
        let mut rng = StdRng::seed_from_u64(seed_for(base_seed, i));
        let out = generate_word_puzzle(cfg, renderer, &mut rng)?;
        sink(i, out)
    };

    #[cfg(feature = "parallel")]
    {
        if cfg.parallel {
            return (0..count).into_par_iter().map(run).collect();
        }
    }

    (0..count).map(run).collect()
}
