pub(crate) mod backend;
pub(crate) mod composite;
pub(crate) mod cpu;
pub(crate) mod ops;
pub mod primitives;
pub(crate) mod surface;
pub(crate) mod text;
