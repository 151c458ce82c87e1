//! Fragment math shared by the division model and the evaluators.

/// Smallest fraction handed out by [`clamp_unit`] when zero is not allowed.
pub const MIN_FRACTION: f64 = 0.0001;

/// Keep `value` inside the unit interval.
///
/// Values `<= 0` (and NaN) become [`MIN_FRACTION`] when `prevent_zero` is set, `0` otherwise.
/// Values above `1` become `1`.
pub fn clamp_unit(value: f64, prevent_zero: bool) -> f64 {
    if value.is_nan() || value <= 0.0 {
        if prevent_zero { MIN_FRACTION } else { 0.0 }
    } else if value > 1.0 {
        1.0
    } else {
        value
    }
}

/// Force `seq` to exactly `count` members: truncate when longer, pad with `fill` when shorter.
pub fn coerce_fixed_length<T: Clone>(mut seq: Vec<T>, count: usize, fill: T) -> Vec<T> {
    if count == 0 {
        return Vec::new();
    }
    seq.truncate(count);
    seq.resize(count, fill);
    seq
}

/// Map `value` onto `[0, 1]` across the segment `[lo, hi)`.
///
/// Below `lo` the result is `0`, at or above `hi` it is `1`. A degenerate segment (`hi <= lo`)
/// is a step at `lo`.
pub fn remap_segment(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() || value < lo {
        return 0.0;
    }
    if value >= hi {
        return 1.0;
    }
    (value - lo) / (hi - lo)
}

/// Normalized scroll progress for a document.
///
/// `scroll_height - viewport_height` is the scrollable extent; when it is not positive the page
/// cannot scroll and progress is `0`.
pub fn scroll_fraction(scroll_offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let extent = scroll_height - viewport_height;
    if extent.is_nan() || extent <= 0.0 || !scroll_offset.is_finite() {
        return 0.0;
    }
    (scroll_offset / extent).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
