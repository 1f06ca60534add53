//! Video game sales analysis.
//!
//! - [`logic`]: loading, cleaning, aggregation and the text report
//! - [`gui`]: the four-panel chart window

pub mod gui;
pub mod logic;
