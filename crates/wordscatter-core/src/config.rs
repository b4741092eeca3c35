use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Quarter-turn rotations a word label may take on the canvas, counter-clockwise
/// as seen on screen. Serialized as plain degrees (`0`, `90`, `180`, `270`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Angle in degrees, counter-clockwise positive.
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// True for 90° and 270°, where width and height trade places.
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;
    fn try_from(v: u16) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(format!("unsupported rotation: {other} (expected 0, 90, 180 or 270)")),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> Self {
        r.degrees()
    }
}

impl FromStr for Rotation {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches("deg").trim_end_matches('°');
        s.parse::<u16>()
            .ok()
            .and_then(|v| Rotation::try_from(v).ok())
            .ok_or(())
    }
}

/// Difficulty levels of the count-the-correct-word puzzle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(()),
        }
    }
}

/// Resolved puzzle parameters for one difficulty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preset {
    /// Length of the target word drawn from the built-in lists.
    pub word_length: usize,
    /// Inclusive range for the number of words requested per puzzle.
    pub total_words: (u32, u32),
    /// Inclusive range of font sizes (pixel height of a glyph cell).
    pub font_size: (u32, u32),
}

impl Difficulty {
    pub fn preset(self) -> Preset {
        match self {
            Difficulty::Easy => Preset {
                word_length: 3,
                total_words: (5, 6),
                font_size: (80, 100),
            },
            Difficulty::Medium => Preset {
                word_length: 4,
                total_words: (7, 8),
                font_size: (60, 80),
            },
            Difficulty::Hard => Preset {
                word_length: 5,
                total_words: (9, 10),
                font_size: (60, 80),
            },
        }
    }
}

/// Order in which targets and distractors are handed to the layout.
/// Earlier items are tried while more free space remains.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemOrder {
    #[default]
    TargetsFirst,
    DistractorsFirst,
    Shuffled,
}

impl FromStr for ItemOrder {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "targets_first" | "targets" => Ok(Self::TargetsFirst),
            "distractors_first" | "distractors" => Ok(Self::DistractorsFirst),
            "shuffled" | "shuffle" => Ok(Self::Shuffled),
            _ => Err(()),
        }
    }
}

/// Canvas and placement parameters for one layout run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Empty border kept between any item and the canvas edge.
    #[serde(default = "default_margin")]
    pub margin: u32,
    /// Gap kept between the collision polygons of two items.
    #[serde(default = "default_item_margin")]
    pub item_margin: u32,
    /// Random placement tries per item before it is skipped.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Rotations a label may be drawn with.
    #[serde(default = "default_rotations")]
    pub rotations: Vec<Rotation>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margin: default_margin(),
            item_margin: default_item_margin(),
            max_attempts: default_max_attempts(),
            rotations: default_rotations(),
        }
    }
}

impl LayoutConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if:
    /// - A canvas side is zero
    /// - The boundary margin leaves no usable area
    /// - `max_attempts` is zero or the rotation set is empty
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::WordScatterError;

        if self.width == 0 || self.height == 0 {
            return Err(WordScatterError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let total_margin = self.margin.saturating_mul(2);
        if total_margin >= self.width || total_margin >= self.height {
            return Err(WordScatterError::InvalidConfig(format!(
                "margin ({}) * 2 leaves no usable area on a {}x{} canvas",
                self.margin, self.width, self.height
            )));
        }

        if self.max_attempts == 0 {
            return Err(WordScatterError::InvalidConfig(
                "max_attempts must be at least 1".into(),
            ));
        }

        if self.rotations.is_empty() {
            return Err(WordScatterError::InvalidConfig(
                "rotation set is empty".into(),
            ));
        }

        Ok(())
    }

    /// Create a fluent builder for `LayoutConfig`.
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::new()
    }
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_margin() -> u32 {
    20
}
fn default_item_margin() -> u32 {
    20
}
fn default_max_attempts() -> u32 {
    100
}
fn default_rotations() -> Vec<Rotation> {
    Rotation::ALL.to_vec()
}
fn default_difficulty() -> Difficulty {
    Difficulty::Easy
}
fn default_order() -> ItemOrder {
    ItemOrder::TargetsFirst
}
fn default_background() -> [u8; 4] {
    [255, 255, 255, 255]
}
fn default_text_color() -> [u8; 4] {
    [0, 0, 0, 255]
}

/// Builder for `LayoutConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct LayoutConfigBuilder {
    cfg: LayoutConfig,
}

impl LayoutConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: LayoutConfig::default(),
        }
    }
    pub fn with_canvas(mut self, w: u32, h: u32) -> Self {
        self.cfg.width = w;
        self.cfg.height = h;
        self
    }
    pub fn margin(mut self, v: u32) -> Self {
        self.cfg.margin = v;
        self
    }
    pub fn item_margin(mut self, v: u32) -> Self {
        self.cfg.item_margin = v;
        self
    }
    pub fn max_attempts(mut self, v: u32) -> Self {
        self.cfg.max_attempts = v;
        self
    }
    pub fn rotations(mut self, v: Vec<Rotation>) -> Self {
        self.cfg.rotations = v;
        self
    }
    pub fn build(self) -> LayoutConfig {
        self.cfg
    }
}

/// Full configuration of the count-the-correct-word puzzle generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PuzzleConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
    /// Share of requested words that are spelled correctly. None draws it from [0.2, 0.6).
    #[serde(default)]
    pub correct_ratio: Option<f64>,
    /// Target word to use instead of a random pick from the word lists.
    #[serde(default)]
    pub word: Option<String>,

    // preset overrides
    #[serde(default)]
    pub word_length: Option<usize>,
    #[serde(default)]
    pub total_words: Option<(u32, u32)>,
    #[serde(default)]
    pub font_size: Option<(u32, u32)>,

    #[serde(default = "default_order")]
    pub order: ItemOrder,
    #[serde(default = "default_background")]
    pub background: [u8; 4],
    #[serde(default = "default_text_color")]
    pub text_color: [u8; 4],
    /// Draw red collision outlines around placed words (debug).
    #[serde(default)]
    pub outlines: bool,
    /// Generate batches on the rayon pool when feature "parallel" is on.
    #[serde(default)]
    pub parallel: bool,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            difficulty: default_difficulty(),
            correct_ratio: None,
            word: None,
            word_length: None,
            total_words: None,
            font_size: None,
            order: default_order(),
            background: default_background(),
            text_color: default_text_color(),
            outlines: false,
            parallel: false,
        }
    }
}

impl PuzzleConfig {
    /// Difficulty preset with the per-field overrides applied.
    pub fn preset(&self) -> Preset {
        let mut p = self.difficulty.preset();
        if let Some(v) = self.word_length {
            p.word_length = v;
        }
        if let Some(v) = self.total_words {
            p.total_words = v;
        }
        if let Some(v) = self.font_size {
            p.font_size = v;
        }
        p
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::WordScatterError;

        self.layout.validate()?;

        if let Some(r) = self.correct_ratio {
            if !(0.0..=1.0).contains(&r) {
                return Err(WordScatterError::InvalidConfig(format!(
                    "correct_ratio must be within 0.0..=1.0, got {r}"
                )));
            }
        }

        let p = self.preset();
        let (lo, hi) = p.total_words;
        if lo == 0 || lo > hi {
            return Err(WordScatterError::InvalidConfig(format!(
                "total_words range {lo}..={hi} is empty or starts at zero"
            )));
        }
        let (lo, hi) = p.font_size;
        if lo == 0 || lo > hi {
            return Err(WordScatterError::InvalidConfig(format!(
                "font_size range {lo}..={hi} is empty or starts at zero"
            )));
        }
        let max_font = self.layout.width.min(self.layout.height);
        if hi > max_font {
            return Err(WordScatterError::InvalidConfig(format!(
                "font_size {hi} exceeds the shorter canvas side ({max_font})"
            )));
        }
        if self.word.is_none() && crate::words::words_of_length(p.word_length).is_empty() {
            return Err(WordScatterError::InvalidConfig(format!(
                "no built-in words of length {}",
                p.word_length
            )));
        }
        Ok(())
    }

    /// Create a fluent builder for `PuzzleConfig`.
    pub fn builder() -> PuzzleConfigBuilder {
        PuzzleConfigBuilder::new()
    }
}

/// Builder for `PuzzleConfig`.
#[derive(Debug, Default, Clone)]
pub struct PuzzleConfigBuilder {
    cfg: PuzzleConfig,
}

impl PuzzleConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PuzzleConfig::default(),
        }
    }
    pub fn layout(mut self, v: LayoutConfig) -> Self {
        self.cfg.layout = v;
        self
    }
    pub fn difficulty(mut self, v: Difficulty) -> Self {
        self.cfg.difficulty = v;
        self
    }
    pub fn correct_ratio(mut self, v: Option<f64>) -> Self {
        self.cfg.correct_ratio = v;
        self
    }
    pub fn word(mut self, v: Option<String>) -> Self {
        self.cfg.word = v;
        self
    }
    pub fn total_words(mut self, lo: u32, hi: u32) -> Self {
        self.cfg.total_words = Some((lo, hi));
        self
    }
    pub fn font_size(mut self, lo: u32, hi: u32) -> Self {
        self.cfg.font_size = Some((lo, hi));
        self
    }
    pub fn order(mut self, v: ItemOrder) -> Self {
        self.cfg.order = v;
        self
    }
    pub fn outlines(mut self, v: bool) -> Self {
        self.cfg.outlines = v;
        self
    }
    pub fn parallel(mut self, v: bool) -> Self {
        self.cfg.parallel = v;
        self
    }
    pub fn build(self) -> PuzzleConfig {
        self.cfg
    }
}
