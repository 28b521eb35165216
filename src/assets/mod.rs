pub(crate) mod loader;
pub(crate) mod normalize;
pub(crate) mod queue;
