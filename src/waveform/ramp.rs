//! Linear fragment ramp.
//!
//! A simpler companion to the peak/valley evaluator: progress through a fragment grows linearly
//! at half speed, and in landscape every other index is mirrored against `max_value` so
//! neighbouring items alternate between fading in and fading out.

use crate::foundation::core::Orientation;

/// Inputs of [`fragment_interval`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RampParams {
    /// Driving position, `[0, 1]`.
    pub scroll: f64,
    /// Width of the fragment.
    pub fragment: f64,
    /// Where the fragment starts.
    pub fragment_prev: f64,
    /// Mirror value for alternating indices.
    pub max_value: f64,
    /// Item index, decides parity.
    pub index: usize,
    /// Mirror even indices when set, odd ones otherwise.
    pub decrease_even: bool,
}

/// Linear progress through a fragment; never negative.
pub fn fragment_interval(params: RampParams, orientation: Orientation) -> f64 {
    if params.fragment.is_nan() || params.fragment <= 0.0 {
        return 0.0;
    }
    let mut v = (params.scroll - params.fragment_prev) / (params.fragment * 2.0);
    if v.is_nan() || v < 0.0 {
        return 0.0;
    }

    let is_even = params.index % 2 == 0;
    if orientation.is_landscape() && params.decrease_even == is_even {
        v = (params.max_value - v).max(0.0);
    }
    v
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/ramp.rs"]
mod tests;
