use std::fmt;

use crate::foundation::core::{EdgePolicy, StyleChannel, TargetRange};
use crate::foundation::math::clamp_unit;

/// Registry-assigned identity of a [`Division`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct DivisionId(pub u64);

/// User-facing division parameters. Every field has a declared default.
///
/// Values are not validated here; [`Division::new`] normalizes them once.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DivisionConfig {
    /// Fraction of the whole driving range occupied by the group window, `(0, 1]`.
    pub global_fragment: f64,
    /// Fractions of `global_fragment` per sub-window, one per addressable local index.
    pub local_fragments: Vec<f64>,
    /// Offset into the driving range where the group window begins, `[0, 1]`.
    pub start_fragment: f64,
    /// Amplitude ceiling, `(0, 1]`.
    pub max_value: f64,
    /// Channels this group drives.
    pub styles: Vec<StyleChannel>,
    /// `[front, back]` peak flags, see [`EdgePolicy`].
    pub peak_edges: Vec<bool>,
}

impl Default for DivisionConfig {
    fn default() -> Self {
        Self {
            global_fragment: 1.0,
            local_fragments: vec![1.0],
            start_fragment: 0.0,
            max_value: 1.0,
            styles: Vec::new(),
            peak_edges: vec![false, false],
        }
    }
}

impl DivisionConfig {
    /// Set the global window fraction.
    pub fn global_fragment(mut self, v: f64) -> Self {
        self.global_fragment = v;
        self
    }

    /// Set the per-sub-window fractions.
    pub fn local_fragments(mut self, v: impl Into<Vec<f64>>) -> Self {
        self.local_fragments = v.into();
        self
    }

    /// Split the window evenly into `count` sub-windows.
    pub fn even_split(mut self, count: usize) -> Self {
        self.local_fragments = vec![1.0 / count.max(1) as f64; count];
        self
    }

    /// Set the start offset.
    pub fn start_fragment(mut self, v: f64) -> Self {
        self.start_fragment = v;
        self
    }

    /// Set the amplitude ceiling.
    pub fn max_value(mut self, v: f64) -> Self {
        self.max_value = v;
        self
    }

    /// Set the driven channels.
    pub fn styles(mut self, v: impl Into<Vec<StyleChannel>>) -> Self {
        self.styles = v.into();
        self
    }

    /// Set the edge policy.
    pub fn edges(mut self, policy: EdgePolicy) -> Self {
        self.peak_edges = vec![policy.front_from_peak, policy.back_to_peak];
        self
    }
}

/// One configured transition group.
///
/// Immutable after construction: the registry hands out copies and matches them back by
/// [`DivisionId`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Division {
    id: DivisionId,
    global_fragment: f64,
    local_fragments: Vec<f64>,
    start_fragment: f64,
    max_value: f64,
    styles: Vec<StyleChannel>,
    target_range: TargetRange,
    edge_policy: EdgePolicy,
}

impl Division {
    /// Normalize `config` into a division owning `target_range`.
    pub fn new(config: &DivisionConfig, target_range: TargetRange) -> Self {
        let mut styles: Vec<StyleChannel> = Vec::with_capacity(config.styles.len());
        for &s in &config.styles {
            if !styles.contains(&s) {
                styles.push(s);
            }
        }

        Self {
            id: DivisionId::default(),
            global_fragment: clamp_unit(config.global_fragment, true),
            local_fragments: config.local_fragments.clone(),
            start_fragment: clamp_unit(config.start_fragment, false),
            max_value: clamp_unit(config.max_value, true),
            styles,
            target_range,
            edge_policy: EdgePolicy::from_flags(config.peak_edges.clone()),
        }
    }

    pub(crate) fn with_id(mut self, id: DivisionId) -> Self {
        self.id = id;
        self
    }

    pub(crate) fn shift_targets_down(&mut self, by: usize) {
        self.target_range = self.target_range.shift_down(by);
    }

    /// Registry identity.
    pub fn id(&self) -> DivisionId {
        self.id
    }

    /// Normalized global window fraction.
    pub fn global_fragment(&self) -> f64 {
        self.global_fragment
    }

    /// Per-sub-window fractions, as configured.
    pub fn local_fragments(&self) -> &[f64] {
        &self.local_fragments
    }

    /// Normalized start offset.
    pub fn start_fragment(&self) -> f64 {
        self.start_fragment
    }

    /// Normalized amplitude ceiling.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Driven channels, duplicates removed.
    pub fn styles(&self) -> &[StyleChannel] {
        &self.styles
    }

    /// Owned span of the registry target list.
    pub fn target_range(&self) -> TargetRange {
        self.target_range
    }

    /// Boundary behaviour.
    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Number of addressable local indices.
    pub fn sub_window_count(&self) -> usize {
        self.local_fragments.len()
    }

    /// Width of sub-window `i` as a fraction of the whole driving range.
    pub fn scroll_fragment(&self, i: usize) -> Option<f64> {
        self.local_fragments
            .get(i)
            .map(|local| local * self.global_fragment)
    }

    /// Configuration problems an embedder may want to surface.
    pub fn diagnostics(&self) -> Vec<DivisionWarning> {
        let mut out = Vec::new();
        if self.local_fragments.is_empty() {
            out.push(DivisionWarning::NoSubWindows);
        }
        for (index, &value) in self.local_fragments.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                out.push(DivisionWarning::DegenerateFragment { index, value });
            }
        }
        let sum: f64 = self
            .local_fragments
            .iter()
            .filter(|v| v.is_finite())
            .sum();
        if sum > 1.0 + 1e-9 {
            out.push(DivisionWarning::FragmentsExceedWindow { sum });
        }
        if self.start_fragment + self.global_fragment > 1.0 + 1e-9 {
            out.push(DivisionWarning::WindowPastEnd {
                end: self.start_fragment + self.global_fragment,
            });
        }
        if self.styles.is_empty() {
            out.push(DivisionWarning::NoStyles);
        }
        if self.target_range.is_empty() {
            out.push(DivisionWarning::NoTargets);
        }
        if self.target_range.len() > self.local_fragments.len() {
            out.push(DivisionWarning::TargetsWithoutSubWindow {
                targets: self.target_range.len(),
                sub_windows: self.local_fragments.len(),
            });
        }
        out
    }
}

/// A configuration problem found by [`Division::diagnostics`].
#[derive(Clone, Debug, PartialEq)]
pub enum DivisionWarning {
    /// `local_fragments` is empty; every evaluation yields zero.
    NoSubWindows,
    /// A local fragment is zero, negative or not finite; its sub-window always yields zero.
    DegenerateFragment {
        /// Local index of the fragment.
        index: usize,
        /// Configured value.
        value: f64,
    },
    /// Local fragments add up to more than the group window.
    FragmentsExceedWindow {
        /// Sum of the local fragments.
        sum: f64,
    },
    /// `start_fragment + global_fragment` reaches past the end of the driving range.
    WindowPastEnd {
        /// Where the window would end.
        end: f64,
    },
    /// No style channel is driven.
    NoStyles,
    /// The division owns no target.
    NoTargets,
    /// More targets than sub-windows; the extra targets always yield zero.
    TargetsWithoutSubWindow {
        /// Owned target count.
        targets: usize,
        /// Sub-window count.
        sub_windows: usize,
    },
}

impl fmt::Display for DivisionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSubWindows => write!(f, "division has no sub-windows"),
            Self::DegenerateFragment { index, value } => {
                write!(f, "local fragment {index} is degenerate ({value})")
            }
            Self::FragmentsExceedWindow { sum } => {
                write!(f, "local fragments sum to {sum:.4}, past the group window")
            }
            Self::WindowPastEnd { end } => {
                write!(f, "group window ends at {end:.4}, past the driving range")
            }
            Self::NoStyles => write!(f, "division drives no style channel"),
            Self::NoTargets => write!(f, "division owns no target"),
            Self::TargetsWithoutSubWindow {
                targets,
                sub_windows,
            } => write!(
                f,
                "{targets} targets but only {sub_windows} sub-windows; extra targets stay at zero"
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/division/model.rs"]
mod tests;
