//! # UI Module
//!
//! Terminal front end for the job board.
//!
//! ## Components
//!
//! - [`App`] - board state: data, query, favorites, overlay, dark mode
//! - [`select`] - searchable single/multi dropdown
//! - [`pointer`] - outside-click dismissal for dropdowns
//! - [`mod@render`] - draws a frame and reports clickable regions
//! - [`input`] - key and mouse dispatch
//!
//! ## Layout
//!
//! ```text
//! ┌──────────┬──────────────────────────────┬──────────┐
//! │ Dark mode│        JOB CHRONICLE         │   Date   │
//! ├──────────┴──────────────────────┬───────┴──────────┤
//! │ Search                          │ Sort             │
//! ├────────────┬────────────┬───────┴────┬─────────────┤
//! │ Scale      │ Country    │ Industry   │ Age         │
//! ├────────────┴──────┬─────┴────────────┴─────────────┤
//! │ Card              │ Card              │ Card        │
//! │ Card              │ Card              │ Card        │
//! ├───────────────────┴───────────────────┴─────────────┤
//! │ 1-6 of 14           [1] 2 3                          │
//! │ Footer                                               │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod clipboard;
pub mod config;
pub mod filters;
pub mod hit;
pub mod input;
pub mod pointer;
pub mod render;
pub mod select;
pub mod theme;

pub use app::App;
pub use render::render;
