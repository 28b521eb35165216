pub(crate) mod instances;
pub(crate) mod presenter;
pub(crate) mod raster;
pub(crate) mod svg;
