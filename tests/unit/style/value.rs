use super::*;

#[test]
fn numeric_prefix_splits_unit() {
    assert_eq!(parse_numeric_prefix("120px"), Some((120.0, "px")));
    assert_eq!(parse_numeric_prefix("  -4.5em"), Some((-4.5, "em")));
    assert_eq!(parse_numeric_prefix("+3"), Some((3.0, "")));
    assert_eq!(parse_numeric_prefix(".5rem"), Some((0.5, "rem")));
    assert_eq!(parse_numeric_prefix("12.px"), Some((12.0, "px")));
}

#[test]
fn numeric_prefix_allows_one_decimal_point() {
    assert_eq!(parse_numeric_prefix("1.2.3"), Some((1.2, ".3")));
}

#[test]
fn numeric_prefix_requires_a_digit() {
    assert_eq!(parse_numeric_prefix(""), None);
    assert_eq!(parse_numeric_prefix("auto"), None);
    assert_eq!(parse_numeric_prefix("-."), None);
    assert_eq!(parse_numeric_prefix("px12"), None);
}

#[test]
fn length_parse_and_scale_keep_unit() {
    let l = Length::parse("200px").unwrap();
    assert_eq!(l, Length::new(200.0, "px"));
    assert_eq!(l.scaled(0.5), Length::new(100.0, "px"));

    let l = Length::parse("2 rem").unwrap();
    assert_eq!(l.scaled(0.25).to_string(), "0.5rem");

    let bare = Length::parse("80").unwrap();
    assert_eq!(bare.unit, "");
    assert_eq!(bare.scaled(1.0).to_string(), "80px");
    assert!(Length::parse("none").is_none());
}

#[test]
fn style_value_renders_as_css_text() {
    assert_eq!(StyleValue::Unitless(0.5).to_string(), "0.5");
    assert_eq!(StyleValue::Unitless(0.0).to_string(), "0");
    assert_eq!(
        StyleValue::Length(Length::new(64.0, "px")).to_string(),
        "64px"
    );
    assert_eq!(StyleValue::Length(Length::new(1.5, "em")).number(), 1.5);
}
