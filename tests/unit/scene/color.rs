use super::*;

#[test]
fn hex_parse_variants() {
    let c = Color::from_hex("#667eea").unwrap();
    assert_eq!(c, Color::from_rgb8(0x66, 0x7e, 0xea));

    let translucent = Color::from_hex("ff6b6b80").unwrap();
    assert!((translucent.a - 128.0 / 255.0).abs() < 1e-12);

    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#zzzzzz").is_err());
}

#[test]
fn hex_roundtrip() {
    for hex in ["#1a1a1a", "#ff6b6b", "#4ecdc4"] {
        assert_eq!(Color::from_hex(hex).unwrap().to_hex(), hex);
    }
}

#[test]
fn with_alpha_multiplies_and_clamps() {
    let c = Color::rgb(1.0, 1.0, 1.0).with_alpha(0.2);
    assert_eq!(c.a, 0.2);
    let c = c.with_alpha(10.0);
    assert_eq!(c.a, 1.0);
}

#[test]
fn deserializes_from_hex_string_and_object() {
    let from_hex: Color = serde_json::from_value(serde_json::json!("#1a1a1a")).unwrap();
    assert_eq!(from_hex, Color::from_rgb8(0x1a, 0x1a, 0x1a));

    let from_obj: Color =
        serde_json::from_value(serde_json::json!({"r": 1.0, "g": 0.5, "b": 0.0})).unwrap();
    assert_eq!(from_obj, Color::rgba(1.0, 0.5, 0.0, 1.0));
}

#[test]
fn serializes_as_hex() {
    let v = serde_json::to_value(Color::from_rgb8(0xff, 0x6b, 0x6b)).unwrap();
    assert_eq!(v, serde_json::json!("#ff6b6b"));
}
