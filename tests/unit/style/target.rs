use super::*;
use crate::style::value::Length;

#[test]
fn memory_target_stores_css_text() {
    let mut t = MemoryTarget::new("card").with_style(StyleChannel::Width, "40%");
    assert_eq!(t.style(StyleChannel::Width).as_deref(), Some("40%"));
    assert_eq!(t.style(StyleChannel::Opacity), None);

    t.set_style(StyleChannel::Opacity, StyleValue::Unitless(0.5));
    t.set_style(
        StyleChannel::Width,
        StyleValue::Length(Length::new(20.0, "%")),
    );
    assert_eq!(t.styles[&StyleChannel::Opacity], "0.5");
    assert_eq!(t.styles[&StyleChannel::Width], "20%");
}

#[test]
fn memory_target_deserializes_without_styles() {
    let t: MemoryTarget = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
    assert_eq!(t, MemoryTarget::new("x"));

    let t: MemoryTarget =
        serde_json::from_str(r#"{"id":"y","styles":{"font_size":"18px"}}"#).unwrap();
    assert_eq!(t.style(StyleChannel::FontSize).as_deref(), Some("18px"));
}
