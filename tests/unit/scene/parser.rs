use super::*;
use crate::scene::model::{FontStyle, FontWeight, TextElement};
use serde_json::json;

fn object_source(v: Value) -> SceneSource {
    SceneSource::try_from(v).unwrap()
}

#[test]
fn text_object_matches_documented_output() {
    let out = parse_scene(object_source(json!({
        "objects": [{"type": "IText", "id": "t1", "left": 10, "top": 20, "fontSize": 16, "text": "Hi"}]
    })));
    assert_eq!(
        out,
        vec![RenderableElement::Text(TextElement {
            id: "t1".to_string(),
            x: 10.0,
            y: 36.0,
            text: "Hi".to_string(),
            font_size: 16.0,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            fill: "#000000".to_string(),
            label: String::new(),
        })]
    );
}

#[test]
fn logo_is_clamped_and_others_are_not() {
    let out = parse_scene(object_source(json!({
        "objects": [
            {"type": "Image", "id": "i1", "left": 0, "top": 0, "width": 100, "height": 50,
             "scaleX": 2, "scaleY": 2, "label": "logo"},
            {"type": "Image", "id": "i2", "left": 0, "top": 0, "width": 100, "scaleX": 2},
        ]
    })));
    let [RenderableElement::Image(logo), RenderableElement::Image(plain)] = out.as_slice() else {
        panic!("expected two images, got {out:?}");
    };
    assert_eq!((logo.width, logo.height), (80.0, 80.0));
    assert_eq!(plain.width, 200.0);
    assert_eq!(plain.height, 50.0);
}

#[test]
fn invalid_string_yields_empty_scene() {
    assert!(parse_scene("{\"objects\": [").is_empty());
    assert!(parse_scene("").is_empty());
    assert!(parse_scene("not json at all").is_empty());
}

#[test]
fn missing_or_mistyped_objects_list_is_empty() {
    assert!(parse_scene("{}").is_empty());
    assert!(parse_scene(r#"{"objects": null}"#).is_empty());
    assert!(parse_scene(r#"{"objects": {"type": "IText"}}"#).is_empty());
    assert!(parse_scene("[1, 2, 3]").is_empty());
    assert!(parse_scene("\"just a string\"").is_empty());
}

#[test]
fn unknown_and_malformed_objects_are_dropped_in_place() {
    let scene = json!({
        "version": "5.3.0",
        "background": "#fff",
        "objects": [
            {"type": "Rect", "id": "r", "left": 0, "top": 0},
            {"type": "IText", "id": "a", "left": 1, "top": 1, "text": "first"},
            42,
            {"type": "IText", "id": "bad", "left": "oops", "top": 1},
            {"id": "no-type", "left": 0, "top": 0},
            {"type": "Image", "id": "b", "left": 2, "top": 2, "src": "x.png", "extra": {"nested": true}},
            {"type": "IText", "id": "c", "left": 3, "top": 3, "text": "last"},
        ]
    });
    let out = parse_scene(scene.to_string());
    let ids: Vec<&str> = out.iter().map(RenderableElement::id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn string_and_object_sources_agree_and_repeat() {
    let scene = json!({
        "objects": [
            {"type": "IText", "id": "t", "left": 5, "top": 5, "text": "नमस्ते", "fontWeight": "bold"},
            {"type": "Image", "id": "u", "left": 9, "top": 9, "width": 300, "label": "userImage"},
        ]
    });
    let parser = SceneParser::default();
    let from_text = parser.parse(&SceneSource::from(scene.to_string()));
    let from_object = parser.parse(&object_source(scene.clone()));
    assert_eq!(from_text, from_object);
    assert_eq!(from_text, parser.parse(&SceneSource::from(scene.to_string())));
    assert_eq!(from_text.len(), 2);
}

#[test]
fn embedded_json_string_value_is_decoded() {
    let encoded = json!({"objects": [{"type": "Image", "id": "i", "left": 0, "top": 0}]}).to_string();
    let out = parse_scene(object_source(Value::String(encoded)));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id(), "i");
}

#[test]
fn non_scene_values_fail_fast() {
    for v in [json!(null), json!(3), json!(true), json!([{"objects": []}])] {
        let err = SceneSource::try_from(v).unwrap_err();
        assert!(matches!(err, SceneError::Validation(_)), "{err}");
    }
}

#[test]
fn custom_config_changes_defaults() {
    let mut cfg = ParseConfig::default();
    cfg.default_font_size = 20.0;
    cfg.default_fill = "#ffffff".to_string();
    let parser = SceneParser::new(cfg);

    let out = parser.parse(&SceneSource::from(
        r#"{"objects": [{"type": "IText", "id": "t", "left": 0, "top": 10}]}"#,
    ));
    let [RenderableElement::Text(t)] = out.as_slice() else {
        panic!("expected one text element");
    };
    assert_eq!(t.y, 30.0);
    assert_eq!(t.fill, "#ffffff");
    assert_eq!(parser.config().default_font_size, 20.0);
}
