use rand::SeedableRng;
use rand::rngs::StdRng;
use wordscatter_core::config::{LayoutConfig, PuzzleConfig};
use wordscatter_core::error::WordScatterError;
use wordscatter_core::{LayoutItem, Rotation, layout_items};

/// Test zero-sized canvas dimensions
#[test]
fn test_zero_width() {
    let cfg = LayoutConfig {
        width: 0,
        ..Default::default()
    };

    match cfg.validate() {
        Err(WordScatterError::InvalidDimensions { width, height }) => {
            assert_eq!(width, 0);
            assert_eq!(height, 600);
        }
        other => panic!("Expected InvalidDimensions error, got {other:?}"),
    }
}

#[test]
fn test_zero_height() {
    let cfg = LayoutConfig::builder().with_canvas(800, 0).build();
    assert!(matches!(
        cfg.validate(),
        Err(WordScatterError::InvalidDimensions { width: 800, height: 0 })
    ));
}

/// Margin that leaves no usable area
#[test]
fn test_margin_exceeds_canvas() {
    let cfg = LayoutConfig::builder().with_canvas(800, 600).margin(300).build();
    assert!(matches!(cfg.validate(), Err(WordScatterError::InvalidConfig(_))));

    let cfg = LayoutConfig::builder().with_canvas(800, 600).margin(299).build();
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_zero_attempts() {
    let cfg = LayoutConfig::builder().max_attempts(0).build();
    assert!(matches!(cfg.validate(), Err(WordScatterError::InvalidConfig(_))));
}

#[test]
fn test_empty_rotation_set() {
    let cfg = LayoutConfig::builder().rotations(Vec::new()).build();
    assert!(matches!(cfg.validate(), Err(WordScatterError::InvalidConfig(_))));
}

#[test]
fn test_layout_rejects_invalid_config() {
    let cfg = LayoutConfig::builder().with_canvas(0, 0).build();
    let mut rng = StdRng::seed_from_u64(0);
    let items = vec![LayoutItem::new("a".to_string(), 10, 10, Rotation::Deg0)];
    assert!(layout_items(items, &cfg, &mut rng).is_err());
}

#[test]
fn test_default_config_is_valid() {
    assert!(LayoutConfig::default().validate().is_ok());
    assert!(PuzzleConfig::default().validate().is_ok());
}

#[test]
fn test_ratio_out_of_range() {
    let cfg = PuzzleConfig::builder().correct_ratio(Some(1.5)).build();
    assert!(matches!(cfg.validate(), Err(WordScatterError::InvalidConfig(_))));
    let cfg = PuzzleConfig::builder().correct_ratio(Some(-0.1)).build();
    assert!(cfg.validate().is_err());
    let cfg = PuzzleConfig::builder().correct_ratio(Some(1.0)).build();
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_bad_ranges() {
    let cfg = PuzzleConfig::builder().total_words(0, 4).build();
    assert!(cfg.validate().is_err());
    let cfg = PuzzleConfig::builder().total_words(6, 5).build();
    assert!(cfg.validate().is_err());
    let cfg = PuzzleConfig::builder().font_size(40, 20).build();
    assert!(cfg.validate().is_err());
}

#[test]
fn test_unsupported_word_length_needs_custom_word() {
    let mut cfg = PuzzleConfig {
        word_length: Some(7),
        ..Default::default()
    };
    assert!(matches!(cfg.validate(), Err(WordScatterError::InvalidConfig(_))));
    cfg.word = Some("example".into());
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_font_size_larger_than_canvas() {
    let cfg = PuzzleConfig::builder().font_size(100_000, 100_000).build();
    assert!(matches!(cfg.validate(), Err(WordScatterError::InvalidConfig(_))));

    let layout = LayoutConfig::builder().with_canvas(200, 120).build();
    let cfg = PuzzleConfig::builder().layout(layout.clone()).font_size(60, 121).build();
    assert!(cfg.validate().is_err());
    let cfg = PuzzleConfig::builder().layout(layout).font_size(60, 120).build();
    assert!(cfg.validate().is_ok());
}
