use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordscatter_core::prelude::*;

fn random_items(seed: u64, n: usize) -> Vec<LayoutItem<String>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let w = rng.gen_range(30..=180);
            let h = rng.gen_range(20..=90);
            let rot = Rotation::ALL[rng.gen_range(0..4)];
            LayoutItem::new(format!("i{}", i), w, h, rot)
        })
        .collect()
}

#[test]
fn same_seed_same_layout() {
    let cfg = LayoutConfig::default();
    let list = random_items(99, 20);

    let mut r1 = StdRng::seed_from_u64(42);
    let a = layout_items(list.clone(), &cfg, &mut r1).expect("layout");
    let mut r2 = StdRng::seed_from_u64(42);
    let b = layout_items(list, &cfg, &mut r2).expect("layout");

    assert_eq!(a.placed, b.placed);
    assert_eq!(a.skipped, b.skipped);
}

#[test]
fn different_seeds_differ() {
    let cfg = LayoutConfig::default();
    let list = random_items(7, 8);
    let mut r1 = StdRng::seed_from_u64(1);
    let a = layout_items(list.clone(), &cfg, &mut r1).expect("layout");
    let mut r2 = StdRng::seed_from_u64(2);
    let b = layout_items(list, &cfg, &mut r2).expect("layout");
    assert_ne!(a.placed, b.placed);
}

#[test]
fn more_items_never_reduce_skips() {
    // a longer run replays the shorter one as its prefix
    let cfg = LayoutConfig::builder().with_canvas(500, 400).build();
    let list = random_items(3, 30);
    let mut total_short = 0;
    let mut total_long = 0;
    for seed in 0..20 {
        let mut r = StdRng::seed_from_u64(seed);
        let short = layout_items(list[..10].to_vec(), &cfg, &mut r).expect("layout");
        let mut r = StdRng::seed_from_u64(seed);
        let long = layout_items(list.clone(), &cfg, &mut r).expect("layout");
        assert!(long.skip_count() >= short.skip_count(), "seed {seed}");
        total_short += short.skip_count();
        total_long += long.skip_count();
    }
    assert!(total_long > total_short);
}

#[test]
fn smaller_canvas_never_reduces_total_skips() {
    let list = random_items(17, 14);
    let canvases = [(800, 600), (600, 450), (400, 300), (300, 225)];
    let mut totals = Vec::new();
    for (w, h) in canvases {
        let cfg = LayoutConfig::builder().with_canvas(w, h).build();
        let mut total = 0;
        for seed in 0..20 {
            let mut r = StdRng::seed_from_u64(seed);
            total += layout_items(list.clone(), &cfg, &mut r)
                .expect("layout")
                .skip_count();
        }
        totals.push(total);
    }
    for pair in totals.windows(2) {
        assert!(pair[1] >= pair[0], "totals {totals:?}");
    }
    assert!(totals[totals.len() - 1] > totals[0], "totals {totals:?}");
}
