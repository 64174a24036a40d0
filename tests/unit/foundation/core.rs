use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c = Rgba8::from_hex("#DD8448").unwrap();
    assert_eq!(c, Rgba8::new(0xdd, 0x84, 0x48, 255));

    let c: Rgba8 = serde_json::from_value(json!("00ff8880")).unwrap();
    assert_eq!(c, Rgba8::new(0, 255, 0x88, 0x80));
}

#[test]
fn rejects_malformed_hex() {
    assert!(Rgba8::from_hex("#abc").is_err());
    assert!(Rgba8::from_hex("#gg0000").is_err());
    assert!(serde_json::from_value::<Rgba8>(json!("#12345")).is_err());
}

#[test]
fn display_round_trips_through_serde() {
    let c = Rgba8::new(0xdd, 0x84, 0x48, 255);
    assert_eq!(c.to_string(), "#dd8448");
    let v = serde_json::to_value(c).unwrap();
    assert_eq!(v, json!("#dd8448"));
}

#[test]
fn canvas_rect_covers_surface() {
    let r = Canvas::new(354, 504).rect();
    assert_eq!(r, Rect::new(0.0, 0.0, 354.0, 504.0));
}
