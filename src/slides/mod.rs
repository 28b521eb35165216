pub(crate) mod content;
pub(crate) mod store;
