pub(crate) mod clock;
pub(crate) mod driver;
pub(crate) mod interp;
