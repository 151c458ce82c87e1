pub(crate) mod environment;
pub(crate) mod scroll_transition;
