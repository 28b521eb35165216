use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = EngineConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, EngineConfig::default());
    assert_eq!(cfg.canvas, Canvas { width: 800, height: 600 });
    assert_eq!(cfg.max_instances, 1000);
    assert_eq!(cfg.fps, Fps { num: 60, den: 1 });
    cfg.validate().unwrap();
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let cfg = EngineConfig::from_json_str(
        r#"{ "canvas": { "width": 320, "height": 240 }, "interpolate": { "max_segment_length": 2.5 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.canvas.width, 320);
    assert_eq!(cfg.interpolate.max_segment_length, 2.5);
    assert_eq!(cfg.interpolate.max_points, 2048);
    assert_eq!(cfg.frame, ViewBox::default());
}

#[test]
fn malformed_json_is_a_validation_error() {
    let err = EngineConfig::from_json_str("{ canvas: 1 }").unwrap_err();
    assert!(matches!(err, SlidemorphError::Validation(_)));
}

#[test]
fn validate_rejects_degenerate_values() {
    let mut cfg = EngineConfig::default();
    cfg.canvas.width = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = EngineConfig::default();
    cfg.frame.padding = 50.0;
    assert!(cfg.validate().is_err());

    let mut cfg = EngineConfig::default();
    cfg.fps = Fps { num: 30, den: 0 };
    assert!(cfg.validate().is_err());

    let mut cfg = EngineConfig::default();
    cfg.interpolate.max_segment_length = 0.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn from_path_reports_missing_file() {
    let path = std::env::temp_dir().join(format!(
        "slidemorph_missing_config_{}.json",
        std::process::id()
    ));
    let err = EngineConfig::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("open config JSON"));
}
