//! User interface and presentation
//!
//! Presenters format roster information for the console, keeping text layout
//! out of the engine.

pub mod presenters;
