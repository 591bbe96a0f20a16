//! Job Chronicle - a terminal job board
//!
//! This library provides the listing model, the filter/sort/paginate pipeline,
//! listing sources and the ratatui front end used by the `chronicle` binary.

pub mod listing;
pub mod logging;
pub mod ui;
