//! Domain models
//!
//! Player records, the fixed position and skill enumerations, and the
//! crate's error type. Models are plain data with minimal logic.

pub mod constants;
pub mod errors;
pub mod player;
