//! Peak/valley evaluation of one sub-window of a [`Division`].
//!
//! The driving fraction `[0, 1]` is mapped onto `[0, π]`. Each sub-window `i` spans
//! `local_fragments[i] * global_fragment * π` radians, laid end to end from
//! `start_fragment * π`. Inside its span a sub-window plays one of three shapes:
//!
//! - [`WindowShape::Hump`]: `|sin(phase / w)|`, a full hump from zero back to zero;
//! - [`WindowShape::Decay`]: `|cos(phase / 2w)|`, a quarter period from peak down to zero;
//! - [`WindowShape::Rise`]: `|sin(phase / 2w)|`, a quarter period from zero up to peak.
//!
//! All shapes are scaled by the division's `max_value`.

use std::f64::consts::PI;

use crate::division::model::Division;

/// Waveform played by one sub-window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowShape {
    /// Rises from zero to peak and returns to zero.
    Hump,
    /// Starts at peak and decays to zero.
    Decay,
    /// Starts at zero and rises to peak.
    Rise,
}

impl WindowShape {
    /// Shape played by sub-window `local_index` of `division`.
    pub fn for_index(division: &Division, local_index: usize) -> Self {
        let count = division.sub_window_count();
        let policy = division.edge_policy();
        if local_index == 0 {
            if policy.front_from_peak {
                Self::Decay
            } else {
                Self::Hump
            }
        } else if local_index + 1 == count {
            if policy.back_to_peak {
                Self::Rise
            } else {
                Self::Hump
            }
        } else {
            Self::Hump
        }
    }

    fn period_multiplier(self) -> f64 {
        match self {
            Self::Hump => 1.0,
            Self::Decay | Self::Rise => 2.0,
        }
    }

    fn eval(self, phase: f64, width: f64, max_value: f64) -> f64 {
        let input = phase / (width * self.period_multiplier());
        let v = match self {
            Self::Hump | Self::Rise => input.sin(),
            Self::Decay => input.cos(),
        };
        (v * max_value).abs()
    }
}

/// Driving-range span of one sub-window, in fraction units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SubWindowBounds {
    /// Where the sub-window opens.
    pub start: f64,
    /// Where its regular span ends. The last sub-window stays open past this point.
    pub end: f64,
}

/// Span of sub-window `local_index`, or `None` when the index is not addressable.
pub fn sub_window_bounds(division: &Division, local_index: usize) -> Option<SubWindowBounds> {
    let width = division.scroll_fragment(local_index)?;
    let start = division.start_fragment() + preceding_width(division, local_index);
    Some(SubWindowBounds {
        start,
        end: start + width,
    })
}

fn preceding_width(division: &Division, local_index: usize) -> f64 {
    (0..local_index)
        .filter_map(|i| division.scroll_fragment(i))
        .sum()
}

/// Radian where sub-window `local_index` opens.
///
/// Accumulated one `width * π` term at a time so that sub-window `k`'s opening is bit-identical
/// to sub-window `k - 1`'s `opening + width * π`.
fn opening_radian(division: &Division, local_index: usize) -> f64 {
    (0..local_index)
        .filter_map(|i| division.scroll_fragment(i))
        .fold(division.start_fragment() * PI, |acc, w| acc + w * PI)
}

/// Intensity of sub-window `local_index` at `scroll_fraction`.
///
/// Never fails: an out-of-domain fraction, an unaddressable index, a degenerate sub-window or a
/// position outside the sub-window all yield `0`. The result lies in `[0, max_value]`.
pub fn compute_intensity(scroll_fraction: f64, division: &Division, local_index: usize) -> f64 {
    if !(0.0..=1.0).contains(&scroll_fraction) {
        return 0.0;
    }
    let count = division.sub_window_count();
    let Some(width) = division.scroll_fragment(local_index) else {
        return 0.0;
    };
    if !width.is_finite() || width <= 0.0 {
        return 0.0;
    }

    let scroll_radian = PI * scroll_fraction;
    let start_radian = division.start_fragment() * PI;
    let prev = opening_radian(division, local_index);
    let next = prev + width * PI;

    let is_first = local_index == 0;
    let is_last = local_index + 1 == count;

    if is_first && scroll_radian < start_radian {
        return 0.0;
    }
    if !is_first && scroll_radian <= prev {
        return 0.0;
    }
    if !is_last && scroll_radian > next {
        return 0.0;
    }

    let phase = scroll_radian - prev;
    let max_value = division.max_value();
    let v = WindowShape::for_index(division, local_index).eval(phase, width, max_value);
    if v.is_finite() { v.min(max_value) } else { 0.0 }
}

/// Intensities of every sub-window of a division at one driving position.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WaveformSample {
    /// Driving position the sample was taken at.
    pub scroll_fraction: f64,
    /// One value per local index.
    pub values: Vec<f64>,
}

impl WaveformSample {
    /// First local index with a non-zero value.
    pub fn active_index(&self) -> Option<usize> {
        self.values.iter().position(|&v| v > 0.0)
    }
}

/// Evaluate every sub-window of `division` at `scroll_fraction`.
pub fn sample_division(scroll_fraction: f64, division: &Division) -> WaveformSample {
    WaveformSample {
        scroll_fraction,
        values: (0..division.sub_window_count())
            .map(|i| compute_intensity(scroll_fraction, division, i))
            .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/peak_valley.rs"]
mod tests;
