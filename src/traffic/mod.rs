//! Traffic level selection and the mock monitor readout it drives.

pub mod display;
pub mod level;
pub mod pool;
pub mod sync;
