use std::collections::BTreeMap;

use crate::foundation::core::StyleChannel;
use crate::style::value::StyleValue;

/// A visual element the registry can style.
///
/// Implemented by the embedding application; the registry only reads a channel's current text
/// and writes new values.
pub trait StyleTarget {
    /// Current CSS text of `channel`, if any.
    fn style(&self, channel: StyleChannel) -> Option<String>;

    /// Write `value` to `channel`.
    fn set_style(&mut self, channel: StyleChannel, value: StyleValue);
}

/// In-memory target keeping channel values as CSS text.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MemoryTarget {
    /// Identifier for reporting.
    pub id: String,
    /// Current channel values.
    #[serde(default)]
    pub styles: BTreeMap<StyleChannel, String>,
}

impl MemoryTarget {
    /// A target with no style set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            styles: BTreeMap::new(),
        }
    }

    /// Set an initial channel value.
    pub fn with_style(mut self, channel: StyleChannel, css: impl Into<String>) -> Self {
        self.styles.insert(channel, css.into());
        self
    }
}

impl StyleTarget for MemoryTarget {
    fn style(&self, channel: StyleChannel) -> Option<String> {
        self.styles.get(&channel).cloned()
    }

    fn set_style(&mut self, channel: StyleChannel, value: StyleValue) {
        self.styles.insert(channel, value.to_string());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/target.rs"]
mod tests;
