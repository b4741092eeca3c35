use crate::config::LayoutConfig;
use crate::error::Result;
use crate::model::{Layout, LayoutItem, PlacedItem, SkipReason, SkippedItem};
use crate::placer::{Placer, random::RandomPlacer};
use rand::Rng;
use tracing::{debug, info, instrument};

#[instrument(skip_all, fields(items = items.len()))]
/// Scatters `items` over the canvas described by `cfg`, in the given order.
///
/// Notes:
/// - Best effort: an item that cannot be placed within `max_attempts` random tries is
///   skipped, never retried, and the run continues.
/// - Items are never moved once placed, so earlier items have more free space.
/// - Only an invalid `cfg` is an error; per-item failures end up in `Layout::skipped`.
pub fn layout_items<K, R>(
    items: Vec<LayoutItem<K>>,
    cfg: &LayoutConfig,
    rng: &mut R,
) -> Result<Layout<K>>
where
    R: Rng + ?Sized,
{
    cfg.validate()?;
    let mut placer = RandomPlacer::new(cfg, rng);
    Ok(layout_with(items, cfg, &mut placer))
}

/// Runs the bounded-retry loop with any [`Placer`]. `cfg` is assumed valid.
pub fn layout_with<K, P>(items: Vec<LayoutItem<K>>, cfg: &LayoutConfig, placer: &mut P) -> Layout<K>
where
    P: Placer<K>,
{
    let mut layout = Layout::new(cfg.width, cfg.height);

    for (idx, item) in items.into_iter().enumerate() {
        if !placer.can_place(&item) {
            debug!(idx, w = item.width, h = item.height, "item larger than canvas, skipped");
            layout.skipped.push(SkippedItem {
                key: item.key,
                reason: SkipReason::OversizedItem,
            });
            continue;
        }

        let mut found = None;
        for attempt in 0..cfg.max_attempts {
            if let Some(center) = placer.try_place(&item, &layout.placed) {
                found = Some((attempt, center));
                break;
            }
        }

        match found {
            Some((attempt, (x, y))) => {
                debug!(idx, x, y, attempts = attempt + 1, "item placed");
                layout.placed.push(PlacedItem {
                    key: item.key,
                    x,
                    y,
                    width: item.width,
                    height: item.height,
                    rotation: item.rotation,
                });
            }
            None => {
                debug!(idx, attempts = cfg.max_attempts, "no free position, skipped");
                layout.skipped.push(SkippedItem {
                    key: item.key,
                    reason: SkipReason::PlacementExhausted,
                });
            }
        }
    }

    info!(
        placed = layout.placed.len(),
        skipped = layout.skip_count(),
        "layout finished"
    );
    layout
}
