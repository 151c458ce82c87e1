use std::fmt;

/// Split a leading signed decimal off `s`.
///
/// Leading whitespace is skipped, then an optional `+`/`-`, then digits with at most one `.`.
/// Returns the number and the untouched remainder, or `None` when no digit was found.
pub fn parse_numeric_prefix(s: &str) -> Option<(f64, &str)> {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut digits = 0;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return None;
    }

    // "12." is not accepted by f64::from_str
    let literal = s[..end].strip_suffix('.').unwrap_or(&s[..end]);
    let value = literal.parse::<f64>().ok()?;
    Some((value, &s[end..]))
}

/// A length value with its unit suffix, e.g. `120px` or `1.5rem`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Length {
    /// Numeric part.
    pub value: f64,
    /// Unit suffix, possibly empty.
    pub unit: String,
}

impl Length {
    /// Unit used when a baseline carries none.
    pub const DEFAULT_UNIT: &'static str = "px";

    /// Build a length.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Parse a CSS-ish length such as `"120px"`, `" -4.5 em"` or `"80"`.
    pub fn parse(s: &str) -> Option<Self> {
        let (value, rest) = parse_numeric_prefix(s)?;
        Some(Self::new(value, rest.trim()))
    }

    /// Scale the numeric part, keeping the unit (`px` when there was none).
    pub fn scaled(&self, factor: f64) -> Self {
        let unit = if self.unit.is_empty() {
            Self::DEFAULT_UNIT.to_string()
        } else {
            self.unit.clone()
        };
        Self::new(self.value * factor, unit)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// A value written to a style channel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleValue {
    /// Unitless fraction (opacity, scale).
    Unitless(f64),
    /// Length with unit (width, height, font size).
    Length(Length),
}

impl StyleValue {
    /// Numeric part of the value.
    pub fn number(&self) -> f64 {
        match self {
            Self::Unitless(v) => *v,
            Self::Length(l) => l.value,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unitless(v) => write!(f, "{v}"),
            Self::Length(l) => l.fmt(f),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/value.rs"]
mod tests;
