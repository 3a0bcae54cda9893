pub(crate) mod animation;
pub(crate) mod particle;
pub(crate) mod ring;
pub(crate) mod state;
pub(crate) mod ticker;
