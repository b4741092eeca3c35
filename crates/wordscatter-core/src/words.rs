//! Built-in target words and distractor generation.

use rand::Rng;
use rand::seq::SliceRandom;

const WORDS_3: &[&str] = &[
    "act", "add", "air", "and", "ant", "arm", "art", "ask", "bad", "bag", "bat", "bed", "bee",
    "big", "box", "boy", "bug", "bus", "but", "buy", "can", "cap", "car", "cat", "cow", "cry",
    "cup", "cut", "dad", "day", "dog", "dry", "ear", "eat", "egg", "end", "eye", "fan", "far",
    "fat", "fit", "fix", "fly", "for", "fun", "gas", "get", "god", "hat", "hit", "hot",
];

const WORDS_4: &[&str] = &[
    "able", "acid", "aged", "also", "area", "army", "away", "baby", "back", "ball", "band",
    "bank", "base", "bath", "bear", "beat", "been", "beer", "bell", "belt", "best", "bird",
    "blow", "blue", "boat", "body", "bomb", "bond", "bone", "book", "boom", "born", "boss",
    "both", "bowl", "bulk", "burn", "bush", "busy", "call", "calm", "came", "camp", "card",
    "care", "case", "cash", "cast", "cell", "chat",
];

const WORDS_5: &[&str] = &[
    "about", "above", "abuse", "actor", "adapt", "after", "again", "agree", "ahead", "alarm",
    "album", "alert", "alike", "alive", "allow", "alone", "along", "alter", "among", "anger",
    "angle", "angry", "ankle", "apart", "apple", "apply", "arena", "argue", "arise", "armor",
    "array", "arrow", "asset", "avoid", "award", "aware", "awful", "bacon", "badge", "badly",
    "basic", "basis", "beach", "beard", "beast", "begin", "being", "below", "bench", "berry",
];

/// Built-in words of exactly `len` letters (empty for unsupported lengths).
pub fn words_of_length(len: usize) -> &'static [&'static str] {
    match len {
        3 => WORDS_3,
        4 => WORDS_4,
        5 => WORDS_5,
        _ => &[],
    }
}

/// Uniform pick from the built-in words of length `len`.
pub fn random_word<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<&'static str> {
    words_of_length(len).choose(rng).copied()
}

/// A random reordering of `word`'s characters that differs from `word`.
///
/// Returns `None` when no such reordering exists (fewer than two distinct characters).
pub fn scramble_word<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Option<String> {
    let mut chars: Vec<char> = word.chars().collect();
    let first = *chars.first()?;
    if chars.iter().all(|&c| c == first) {
        return None;
    }
    loop {
        chars.shuffle(rng);
        let scrambled: String = chars.iter().collect();
        if scrambled != word {
            return Some(scrambled);
        }
    }
}
