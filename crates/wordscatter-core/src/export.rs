use crate::config::PuzzleConfig;
use crate::model::{Layout, Meta};
use crate::puzzle::PuzzleOutput;
use serde::Serialize;
use serde_json::{Value, json};

/// Serialize a layout as `{ canvas, items, skipped, meta }`.
/// Each item carries its center, extents, rotation and collision corners.
pub fn to_json_layout<K: Serialize>(layout: &Layout<K>, meta: &Meta) -> Value {
    let items: Vec<Value> = layout
        .placed
        .iter()
        .map(|p| {
            let corners: Vec<Value> = p
                .polygon()
                .iter()
                .map(|c| json!([c.x, c.y]))
                .collect();
            json!({
                "key": &p.key,
                "center": {"x": p.x, "y": p.y},
                "size": {"w": p.width, "h": p.height},
                "rotation": p.rotation,
                "corners": corners,
            })
        })
        .collect();
    let skipped: Vec<Value> = layout
        .skipped
        .iter()
        .map(|s| json!({"key": &s.key, "reason": s.reason}))
        .collect();
    json!({
        "canvas": {"w": layout.width, "h": layout.height},
        "items": items,
        "skipped": skipped,
        "meta": meta,
    })
}

/// Answer record of a puzzle: the word, the visible counts and the full layout.
/// `seed` is recorded when known so the puzzle can be regenerated.
pub fn to_json_puzzle(out: &PuzzleOutput, cfg: &PuzzleConfig, seed: Option<u64>) -> Value {
    let meta = Meta::from_config(&cfg.layout);
    json!({
        "word": out.word,
        "answer": out.visible_correct,
        "visible_total": out.visible_total,
        "requested_correct": out.requested_correct,
        "requested_total": out.requested_total,
        "difficulty": cfg.difficulty,
        "order": cfg.order,
        "seed": seed,
        "stats": out.stats(),
        "layout": to_json_layout(&out.layout, &meta),
    })
}
