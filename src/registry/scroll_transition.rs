use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::division::model::{Division, DivisionConfig, DivisionId};
use crate::foundation::core::{Orientation, StyleChannel, TargetRange};
use crate::foundation::error::{ScrollError, ScrollResult};
use crate::registry::environment::Environment;
use crate::style::target::StyleTarget;
use crate::style::value::{Length, StyleValue};
use crate::waveform::peak_valley::compute_intensity;

/// Registry-wide switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegistryOptions {
    /// Leave every target untouched while the viewport is in portrait.
    #[serde(default)]
    pub skip_in_portrait: bool,
}

/// What one dispatch did.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct DispatchReport {
    /// Driving position dispatched.
    pub scroll_fraction: f64,
    /// Divisions visited.
    pub divisions: usize,
    /// Targets visited.
    pub targets: usize,
    /// Channel values written.
    pub writes: usize,
    /// Length channels skipped because the target had no parseable baseline.
    pub unparsed: usize,
    /// The whole dispatch was skipped for portrait orientation.
    pub skipped_portrait: bool,
}

struct Slot<T> {
    target: T,
    baselines: BTreeMap<StyleChannel, Length>,
}

impl<T: StyleTarget> Slot<T> {
    fn new(target: T) -> Self {
        Self {
            target,
            baselines: BTreeMap::new(),
        }
    }

    /// Write `intensity` to `channel`; `false` when a length channel has no usable baseline.
    fn apply(&mut self, channel: StyleChannel, intensity: f64) -> bool {
        let value = if channel.is_length() {
            let baseline = match self.baselines.entry(channel) {
                Entry::Occupied(e) => e.into_mut(),
                Entry::Vacant(e) => {
                    let current = self.target.style(channel);
                    let Some(parsed) = current.as_deref().and_then(Length::parse) else {
                        tracing::trace!(
                            channel = channel.css_property(),
                            ?current,
                            "no numeric baseline, channel skipped"
                        );
                        return false;
                    };
                    e.insert(parsed)
                }
            };
            StyleValue::Length(baseline.scaled(intensity))
        } else {
            StyleValue::Unitless(intensity)
        };
        self.target.set_style(channel, value);
        true
    }
}

/// Owns a flat list of targets partitioned into [`Division`]s and drives their styles from a
/// scroll position.
///
/// Targets and divisions are only ever added together ([`register`](Self::register)) and removed
/// together ([`unregister`](Self::unregister)), so every division's range always points at its
/// own targets and ranges never overlap.
pub struct ScrollTransition<T, E> {
    environment: E,
    options: RegistryOptions,
    slots: Vec<Slot<T>>,
    divisions: Vec<Division>,
    orientation: Orientation,
    next_id: u64,
}

impl<T, E> ScrollTransition<T, E>
where
    T: StyleTarget,
    E: Environment,
{
    /// Empty registry reading window state from `environment`.
    pub fn new(environment: E) -> Self {
        Self::with_options(environment, RegistryOptions::default())
    }

    /// Empty registry with explicit options.
    pub fn with_options(environment: E, options: RegistryOptions) -> Self {
        let orientation = Orientation::of(environment.viewport());
        Self {
            environment,
            options,
            slots: Vec::new(),
            divisions: Vec::new(),
            orientation,
            next_id: 0,
        }
    }

    /// Append `targets` as one new division configured by `config`.
    ///
    /// The returned copy identifies the division for [`unregister`](Self::unregister). An empty
    /// target list is rejected without touching the registry.
    #[tracing::instrument(skip(self, targets, config))]
    pub fn register<I>(&mut self, targets: I, config: &DivisionConfig) -> ScrollResult<Division>
    where
        I: IntoIterator<Item = T>,
    {
        let targets: Vec<T> = targets.into_iter().collect();
        if targets.is_empty() {
            return Err(ScrollError::validation(
                "cannot register a division without targets",
            ));
        }

        let start = self.slots.len();
        let range = TargetRange::new(start, start + targets.len())?;
        self.next_id += 1;
        let division = Division::new(config, range).with_id(DivisionId(self.next_id));

        self.slots.extend(targets.into_iter().map(Slot::new));
        self.divisions.push(division.clone());

        tracing::debug!(
            id = division.id().0,
            start = range.start,
            end = range.end,
            sub_windows = division.sub_window_count(),
            "division registered"
        );
        Ok(division)
    }

    /// Remove `division` and its targets, returning the targets in order.
    ///
    /// Matching is by [`DivisionId`]; the registry's own record decides which targets go, so a
    /// stale copy whose range predates earlier removals still removes the right slice. Later
    /// divisions move down to stay contiguous.
    #[tracing::instrument(skip(self, division), fields(id = division.id().0))]
    pub fn unregister(&mut self, division: &Division) -> ScrollResult<Vec<T>> {
        let pos = self
            .divisions
            .iter()
            .position(|d| d.id() == division.id())
            .ok_or_else(|| {
                ScrollError::validation(format!(
                    "division {} is not registered here",
                    division.id().0
                ))
            })?;

        let removed = self.divisions.remove(pos);
        let range = removed.target_range();
        let targets: Vec<T> = self
            .slots
            .drain(range.indices())
            .map(|slot| slot.target)
            .collect();

        for d in &mut self.divisions {
            if d.target_range().start >= range.end {
                d.shift_targets_down(range.len());
            }
        }

        tracing::debug!(
            start = range.start,
            end = range.end,
            remaining = self.divisions.len(),
            "division unregistered"
        );
        Ok(targets)
    }

    /// Evaluate every division at `scroll_fraction` and write the results to its targets.
    ///
    /// Divisions run in registration order, targets in ascending index order. Local indices are
    /// zero-based from each division's range start.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_driving_signal(&mut self, scroll_fraction: f64) -> DispatchReport {
        let mut report = DispatchReport {
            scroll_fraction,
            ..DispatchReport::default()
        };
        if self.options.skip_in_portrait && !self.orientation.is_landscape() {
            report.skipped_portrait = true;
            return report;
        }

        for division in &self.divisions {
            report.divisions += 1;
            let range = division.target_range();
            for global in range.indices() {
                let (Some(slot), Some(local)) =
                    (self.slots.get_mut(global), range.local_index(global))
                else {
                    continue;
                };
                let intensity = compute_intensity(scroll_fraction, division, local);
                report.targets += 1;
                for &channel in division.styles() {
                    if slot.apply(channel, intensity) {
                        report.writes += 1;
                    } else {
                        report.unparsed += 1;
                    }
                }
            }
        }
        report
    }

    /// Read the scroll position from the environment and dispatch it.
    pub fn on_scroll(&mut self) -> DispatchReport {
        let viewport = self.environment.viewport();
        let fraction = self.environment.scroll_metrics().fraction(viewport.height);
        self.on_driving_signal(fraction)
    }

    /// Recompute the orientation from the environment viewport.
    pub fn on_orientation_change(&mut self) -> Orientation {
        let orientation = Orientation::of(self.environment.viewport());
        if orientation != self.orientation {
            tracing::debug!(?orientation, "orientation changed");
        }
        self.orientation = orientation;
        orientation
    }

    /// Drop cached length baselines so the next dispatch re-reads them from the targets.
    ///
    /// The targets are read as they are at that point, which after any dispatch is the last
    /// scaled value the registry wrote. Hosts restore the base values on their targets before
    /// calling this, or hand them over with [`set_baseline`](Self::set_baseline) instead.
    pub fn forget_baselines(&mut self) {
        for slot in &mut self.slots {
            slot.baselines.clear();
        }
    }

    /// Replace the baseline that length `channel` of target `index` is scaled from.
    ///
    /// Takes effect on the next dispatch. Unitless channels have no baseline and are rejected.
    pub fn set_baseline(
        &mut self,
        index: usize,
        channel: StyleChannel,
        baseline: Length,
    ) -> ScrollResult<()> {
        if !channel.is_length() {
            return Err(ScrollError::validation(format!(
                "{} takes no baseline",
                channel.css_property()
            )));
        }
        let slot = self.slots.get_mut(index).ok_or_else(|| {
            ScrollError::validation(format!("no target at index {index}"))
        })?;
        tracing::debug!(index, channel = channel.css_property(), %baseline, "baseline set");
        slot.baselines.insert(channel, baseline);
        Ok(())
    }

    /// Registered divisions in registration order.
    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    /// The registry's current record of division `id`.
    pub fn division(&self, id: DivisionId) -> Option<&Division> {
        self.divisions.iter().find(|d| d.id() == id)
    }

    /// Targets in registry order.
    pub fn targets(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.slots.iter().map(|slot| &slot.target)
    }

    /// Target at global `index`.
    pub fn target(&self, index: usize) -> Option<&T> {
        self.slots.get(index).map(|slot| &slot.target)
    }

    /// Target at global `index`, for hosts that restore base values before
    /// [`forget_baselines`](Self::forget_baselines).
    pub fn target_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).map(|slot| &mut slot.target)
    }

    /// Number of targets.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no target is registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Last computed orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the last computed orientation is landscape.
    pub fn is_landscape(&self) -> bool {
        self.orientation.is_landscape()
    }

    /// Registry options.
    pub fn options(&self) -> RegistryOptions {
        self.options
    }

    /// Injected environment.
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Injected environment, for hosts that push new window state.
    pub fn environment_mut(&mut self) -> &mut E {
        &mut self.environment
    }
}

impl<T, E> std::fmt::Debug for ScrollTransition<T, E>
where
    E: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollTransition")
            .field("environment", &self.environment)
            .field("options", &self.options)
            .field("targets", &self.slots.len())
            .field("divisions", &self.divisions)
            .field("orientation", &self.orientation)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/scroll_transition.rs"]
mod tests;
