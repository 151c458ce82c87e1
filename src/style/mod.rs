pub(crate) mod target;
pub(crate) mod value;
