//! scroll-transition maps a normalized scroll position to "peak/valley" intensities that drive
//! staged style transitions (opacity, scale, width, height, font size) of page elements.
//!
//! # Model
//!
//! - A [`ScrollTransition`] registry owns a flat list of targets, partitioned into
//!   [`Division`]s. Each division owns a contiguous slice of targets and describes one window of
//!   the scroll range, split into sub-windows (one per target).
//! - [`compute_intensity`] evaluates one sub-window at a scroll fraction in `[0, 1]`: zero outside
//!   the sub-window, a sine hump inside it, or a quarter-period rise/decay on a peak edge.
//! - On every scroll update the registry evaluates each division's targets and writes the value
//!   to the division's style channels through the [`StyleTarget`] trait.
//!
//! Window state (viewport size, scroll position) is injected through [`Environment`], so the
//! whole engine runs without a live page.
//!
//! # Example
//!
//! ```
//! use scroll_transition::{
//!     DivisionConfig, MemoryTarget, ScrollTransition, StaticEnvironment, StyleChannel,
//! };
//!
//! let mut registry = ScrollTransition::new(StaticEnvironment::default());
//! let division = registry
//!     .register(
//!         vec![MemoryTarget::new("a"), MemoryTarget::new("b")],
//!         &DivisionConfig::default()
//!             .even_split(2)
//!             .styles(vec![StyleChannel::Opacity]),
//!     )
//!     .unwrap();
//!
//! registry.on_driving_signal(0.25);
//! assert_eq!(registry.target(0).unwrap().styles[&StyleChannel::Opacity], "1");
//!
//! registry.unregister(&division).unwrap();
//! assert!(registry.is_empty());
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod division;
mod foundation;
mod registry;
mod style;

/// Scroll-to-intensity evaluators.
pub mod waveform;

pub use config::file::{PlanGroup, PlanRegistry, TransitionPlan};
pub use division::model::{Division, DivisionConfig, DivisionId, DivisionWarning};
pub use foundation::core::{EdgePolicy, Orientation, Size, StyleChannel, TargetRange};
pub use foundation::error::{ScrollError, ScrollResult};
pub use foundation::math::{
    MIN_FRACTION, clamp_unit, coerce_fixed_length, remap_segment, scroll_fraction,
};
pub use registry::environment::{Environment, ScrollMetrics, StaticEnvironment};
pub use registry::scroll_transition::{DispatchReport, RegistryOptions, ScrollTransition};
pub use style::target::{MemoryTarget, StyleTarget};
pub use style::value::{Length, StyleValue, parse_numeric_prefix};
pub use waveform::peak_valley::{
    SubWindowBounds, WaveformSample, WindowShape, compute_intensity, sample_division,
    sub_window_bounds,
};
pub use waveform::ramp::{RampParams, fragment_interval};
