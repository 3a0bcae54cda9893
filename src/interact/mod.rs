pub(crate) mod haptics;
pub(crate) mod input;
pub(crate) mod magnetic;
pub(crate) mod pan_zoom;
pub(crate) mod spring;
