use wordscatter_core::config::{Difficulty, ItemOrder, LayoutConfig, PuzzleConfig, Rotation};

#[test]
fn rotation_from_str_variants() {
    assert_eq!("90".parse::<Rotation>(), Ok(Rotation::Deg90));
    assert_eq!("180deg".parse::<Rotation>(), Ok(Rotation::Deg180));
    assert_eq!("270°".parse::<Rotation>(), Ok(Rotation::Deg270));
    assert_eq!(" 0 ".parse::<Rotation>(), Ok(Rotation::Deg0));
    assert!("45".parse::<Rotation>().is_err());
    assert!(Rotation::try_from(360).is_err());
}

#[test]
fn rotation_serializes_as_degrees() {
    let json = serde_json::to_string(&vec![Rotation::Deg0, Rotation::Deg270]).expect("json");
    assert_eq!(json, "[0,270]");
    let back: Vec<Rotation> = serde_json::from_str("[90,180]").expect("parse");
    assert_eq!(back, vec![Rotation::Deg90, Rotation::Deg180]);
    assert!(serde_json::from_str::<Rotation>("45").is_err());
}

#[test]
fn difficulty_presets() {
    let e = Difficulty::Easy.preset();
    assert_eq!((e.word_length, e.total_words, e.font_size), (3, (5, 6), (80, 100)));
    let m = Difficulty::Medium.preset();
    assert_eq!((m.word_length, m.total_words, m.font_size), (4, (7, 8), (60, 80)));
    let h = Difficulty::Hard.preset();
    assert_eq!((h.word_length, h.total_words, h.font_size), (5, (9, 10), (60, 80)));
    assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
    assert!("extreme".parse::<Difficulty>().is_err());
}

#[test]
fn preset_overrides_apply() {
    let cfg = PuzzleConfig::builder()
        .difficulty(Difficulty::Medium)
        .total_words(3, 3)
        .font_size(20, 30)
        .build();
    let p = cfg.preset();
    assert_eq!(p.word_length, 4);
    assert_eq!(p.total_words, (3, 3));
    assert_eq!(p.font_size, (20, 30));
}

#[test]
fn order_from_str() {
    assert_eq!("targets_first".parse::<ItemOrder>(), Ok(ItemOrder::TargetsFirst));
    assert_eq!("distractors".parse::<ItemOrder>(), Ok(ItemOrder::DistractorsFirst));
    assert_eq!("Shuffled".parse::<ItemOrder>(), Ok(ItemOrder::Shuffled));
    assert_eq!(ItemOrder::default(), ItemOrder::TargetsFirst);
}

#[test]
fn layout_config_serde_defaults() {
    let cfg: LayoutConfig = serde_json::from_str("{}").expect("parse");
    assert_eq!(cfg, LayoutConfig::default());
    assert_eq!((cfg.width, cfg.height), (800, 600));
    assert_eq!((cfg.margin, cfg.item_margin, cfg.max_attempts), (20, 20, 100));
    assert_eq!(cfg.rotations, Rotation::ALL.to_vec());

    let cfg: PuzzleConfig =
        serde_json::from_str(r#"{"difficulty":"hard","layout":{"width":1024}}"#).expect("parse");
    assert_eq!(cfg.difficulty, Difficulty::Hard);
    assert_eq!(cfg.layout.width, 1024);
    assert_eq!(cfg.layout.height, 600);
}
