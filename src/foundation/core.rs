use std::ops::Range;

use crate::foundation::error::{ScrollError, ScrollResult};
use crate::foundation::math::coerce_fixed_length;

pub use kurbo::Size;

/// Half-open span `[start, end)` into a registry's flat target list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TargetRange {
    /// First owned target index.
    pub start: usize,
    /// One past the last owned target index.
    pub end: usize, // exclusive
}

impl TargetRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: usize, end: usize) -> ScrollResult<Self> {
        if start > end {
            return Err(ScrollError::validation("TargetRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of owned targets.
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the range owns no target.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Whether `index` falls inside the range.
    pub fn contains(self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Owned global indices in ascending order.
    pub fn indices(self) -> Range<usize> {
        self.start..self.end
    }

    /// Zero-based position of `global` inside the range.
    pub fn local_index(self, global: usize) -> Option<usize> {
        self.contains(global).then(|| global - self.start)
    }

    pub(crate) fn shift_down(self, by: usize) -> Self {
        Self {
            start: self.start.saturating_sub(by),
            end: self.end.saturating_sub(by),
        }
    }
}

/// A style channel a division can drive.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StyleChannel {
    /// Unitless opacity.
    Opacity,
    /// Length, scaled from the target's baseline.
    Width,
    /// Length, scaled from the target's baseline.
    Height,
    /// Unitless scale factor.
    Scale,
    /// Length, scaled from the target's baseline.
    FontSize,
}

impl StyleChannel {
    /// Every channel, in declaration order.
    pub const ALL: [StyleChannel; 5] = [
        Self::Opacity,
        Self::Width,
        Self::Height,
        Self::Scale,
        Self::FontSize,
    ];

    /// CSS property name for this channel.
    pub fn css_property(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::Width => "width",
            Self::Height => "height",
            Self::Scale => "scale",
            Self::FontSize => "font-size",
        }
    }

    /// Length channels multiply the intensity by a baseline and keep its unit.
    pub fn is_length(self) -> bool {
        matches!(self, Self::Width | Self::Height | Self::FontSize)
    }
}

/// Boundary behaviour of a division's first and last sub-window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EdgePolicy {
    /// First sub-window starts at peak and decays to zero.
    pub front_from_peak: bool,
    /// Last sub-window rises from zero and ends at peak.
    pub back_to_peak: bool,
}

impl EdgePolicy {
    /// Same behaviour on both edges.
    pub fn both(from_peak: bool) -> Self {
        Self {
            front_from_peak: from_peak,
            back_to_peak: from_peak,
        }
    }

    /// Build from a `[front, back]` flag list, padding missing flags with `false`.
    pub fn from_flags(flags: Vec<bool>) -> Self {
        let flags = coerce_fixed_length(flags, 2, false);
        Self {
            front_from_peak: flags[0],
            back_to_peak: flags[1],
        }
    }
}

/// Viewport orientation derived from its aspect ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// `width / height >= 1`.
    #[default]
    Landscape,
    /// `width / height < 1`.
    Portrait,
}

impl Orientation {
    /// Orientation of a viewport. A zero-height viewport counts as landscape.
    pub fn of(viewport: Size) -> Self {
        if viewport.height <= 0.0 || viewport.width / viewport.height >= 1.0 {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Whether this is [`Orientation::Landscape`].
    pub fn is_landscape(self) -> bool {
        self == Self::Landscape
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
