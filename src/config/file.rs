use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use crate::division::model::{Division, DivisionConfig};
use crate::foundation::core::Size;
use crate::foundation::error::{ScrollError, ScrollResult};
use crate::registry::environment::StaticEnvironment;
use crate::registry::scroll_transition::{RegistryOptions, ScrollTransition};
use crate::style::target::MemoryTarget;

/// Registry built from a [`TransitionPlan`].
pub type PlanRegistry = ScrollTransition<MemoryTarget, StaticEnvironment>;

/// A JSON description of a whole page: viewport, options and target groups.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionPlan {
    /// Viewport used for orientation.
    #[serde(default = "default_viewport")]
    pub viewport: Size,
    /// See [`RegistryOptions::skip_in_portrait`].
    #[serde(default)]
    pub skip_in_portrait: bool,
    /// Groups, registered in order.
    pub groups: Vec<PlanGroup>,
}

/// One group of a [`TransitionPlan`]: its targets and their division.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanGroup {
    /// Label for reporting.
    #[serde(default)]
    pub name: String,
    /// Targets with their initial styles.
    pub targets: Vec<MemoryTarget>,
    /// Division parameters.
    #[serde(default)]
    pub division: DivisionConfig,
}

fn default_viewport() -> Size {
    Size::new(1280.0, 720.0)
}

impl TransitionPlan {
    /// Read a plan from a JSON file.
    pub fn from_path(path: &Path) -> ScrollResult<Self> {
        let f = File::open(path).map_err(|e| {
            ScrollError::config(format!("open plan '{}': {e}", path.display()))
        })?;
        let plan: Self = serde_json::from_reader(BufReader::new(f))?;
        Ok(plan)
    }

    /// Parse a plan from JSON text.
    pub fn from_json_str(s: &str) -> ScrollResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Check structural rules serde cannot express.
    pub fn validate(&self) -> ScrollResult<()> {
        if self.groups.is_empty() {
            return Err(ScrollError::validation("plan must contain at least one group"));
        }
        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            return Err(ScrollError::validation(
                "plan viewport width and height must be > 0",
            ));
        }

        let mut seen = BTreeSet::new();
        for (i, group) in self.groups.iter().enumerate() {
            if group.targets.is_empty() {
                return Err(ScrollError::validation(format!(
                    "group {} ('{}') has no targets",
                    i, group.name
                )));
            }
            for t in &group.targets {
                if t.id.is_empty() {
                    return Err(ScrollError::validation(format!(
                        "group {} ('{}') has a target without id",
                        i, group.name
                    )));
                }
                if !seen.insert(t.id.as_str()) {
                    return Err(ScrollError::validation(format!(
                        "duplicate target id '{}'",
                        t.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validate the plan and register every group, returning the registry and the divisions in
    /// group order.
    pub fn build_registry(&self) -> ScrollResult<(PlanRegistry, Vec<Division>)> {
        self.validate()?;
        let env = StaticEnvironment {
            viewport: self.viewport,
            ..StaticEnvironment::default()
        };
        let mut registry = ScrollTransition::with_options(
            env,
            RegistryOptions {
                skip_in_portrait: self.skip_in_portrait,
            },
        );
        let divisions = self
            .groups
            .iter()
            .map(|g| registry.register(g.targets.iter().cloned(), &g.division))
            .collect::<ScrollResult<Vec<_>>>()?;
        Ok((registry, divisions))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/file.rs"]
mod tests;
