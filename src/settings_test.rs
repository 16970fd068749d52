#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_builtin_constants() {
    let s = Settings::default();
    assert_eq!(s.background.to_hex(), "#e2e8f0");
    assert_eq!(s.palette.len(), 12);
    assert_eq!(s.palette[0], Color::BLACK);
    assert_eq!(s.palette[7].to_hex(), "#ffa500");
    assert_eq!(s.default_color, Color::BLACK);
    assert_eq!(s.default_width, 3.0);
}

#[test]
fn empty_object_yields_defaults() {
    let s = Settings::from_json("{}").unwrap();
    assert_eq!(s, Settings::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let s = Settings::from_json(r##"{ "background": "#FFF", "default_width": 8 }"##).unwrap();
    assert_eq!(s.background, Color::WHITE);
    assert_eq!(s.default_width, 8.0);
    assert_eq!(s.palette, Settings::default().palette);
}

#[test]
fn custom_palette_is_kept_in_order() {
    let s = Settings::from_json(r##"{ "palette": ["#00f", "#F00"] }"##).unwrap();
    assert_eq!(s.palette, vec![Color::rgb(0, 0, 255), Color::rgb(255, 0, 0)]);
}

#[test]
fn empty_palette_is_rejected() {
    let err = Settings::from_json(r#"{ "palette": [] }"#).unwrap_err();
    assert!(matches!(err, SettingsError::EmptyPalette));
}

#[test]
fn width_out_of_range_is_rejected() {
    let err = Settings::from_json(r#"{ "default_width": 0.5 }"#).unwrap_err();
    assert!(matches!(err, SettingsError::WidthOutOfRange(w) if w == 0.5));
    let err = Settings::from_json(r#"{ "default_width": 21 }"#).unwrap_err();
    assert!(matches!(err, SettingsError::WidthOutOfRange(_)));
}

#[test]
fn bad_color_is_a_json_error() {
    let err = Settings::from_json(r#"{ "default_color": "red" }"#).unwrap_err();
    assert!(matches!(err, SettingsError::Json(_)));
    assert!(err.to_string().contains("invalid settings json"));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(Settings::from_json("{"), Err(SettingsError::Json(_))));
}

#[test]
fn initial_config_uses_defaults_with_eraser_off() {
    let s = Settings::from_json(r##"{ "default_color": "#123456", "default_width": 5 }"##).unwrap();
    let cfg = s.initial_config();
    assert_eq!(cfg.color().to_hex(), "#123456");
    assert_eq!(cfg.width(), 5.0);
    assert!(!cfg.is_eraser());
}

#[test]
fn settings_serialize_colors_as_hex() {
    let json = serde_json::to_value(Settings::default()).unwrap();
    assert_eq!(json["background"], "#e2e8f0");
    assert_eq!(json["default_color"], "#000000");
}
