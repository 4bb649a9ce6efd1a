use super::*;

#[test]
fn defaults_cap_logo_and_user_image() {
    let cfg = ParseConfig::default();
    assert_eq!(cfg.max_dimension_for("logo"), Some(80.0));
    assert_eq!(cfg.max_dimension_for("userImage"), Some(80.0));
    assert_eq!(cfg.max_dimension_for("background"), None);
    assert_eq!(cfg.max_dimension_for(""), None);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg: ParseConfig =
        serde_json::from_str(r#"{"labelMaxDimension": {"badge": 40}, "defaultFontSize": 14}"#)
            .unwrap();
    assert_eq!(cfg.max_dimension_for("badge"), Some(40.0));
    assert_eq!(cfg.max_dimension_for("logo"), None);
    assert_eq!(cfg.default_font_size, 14.0);
    assert_eq!(cfg.default_fill, "#000000");
    assert_eq!(cfg.default_image_width, 50.0);
}

#[test]
fn validate_rejects_bad_numbers() {
    let mut cfg = ParseConfig::default();
    cfg.default_font_size = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = ParseConfig::default();
    cfg.label_max_dimension.insert("logo".to_string(), -1.0);
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("labelMaxDimension[logo]"));

    let mut cfg = ParseConfig::default();
    cfg.default_fill = "  ".to_string();
    assert!(cfg.validate().is_err());
}

#[test]
fn from_path_reports_missing_and_invalid_files() {
    let dir = std::env::temp_dir().join(format!("poster_scene_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let missing = ParseConfig::from_path(dir.join("nope.json")).unwrap_err();
    assert!(matches!(missing, SceneError::Other(_)));

    let bad = dir.join("bad.json");
    std::fs::write(&bad, "{not json").unwrap();
    assert!(matches!(
        ParseConfig::from_path(&bad).unwrap_err(),
        SceneError::Serde(_)
    ));

    let good = dir.join("good.json");
    std::fs::write(&good, r##"{"defaultFill": "#ffffff"}"##).unwrap();
    assert_eq!(ParseConfig::from_path(&good).unwrap().default_fill, "#ffffff");

    let _ = std::fs::remove_dir_all(&dir);
}
