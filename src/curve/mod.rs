pub(crate) mod catmull_rom;
pub(crate) mod ease;
pub(crate) mod keyframes;
pub(crate) mod timeline;
