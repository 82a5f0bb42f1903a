//! Roster services
//!
//! Pure selection and allocation logic used by the engine, plus the
//! collaborators around it: age computation, the console session and the
//! demonstration roster.

pub mod age;
pub mod console;
pub mod jersey;
pub mod sample;
pub mod selection;
