//! # Listing Module
//!
//! Data model and the pure list transformations behind the browser.
//!
//! ## Overview
//!
//! - [`model`] - [`Listing`] and [`CompanyScale`]
//! - [`age`] - posting-age buckets derived from the current time
//! - [`clock`] - injectable "now"
//! - [`pipeline`] - filter, sort and paginate
//! - [`source`] - where listings come from (mock data or a JSON file)

pub mod age;
pub mod clock;
pub mod mock;
pub mod model;
pub mod pipeline;
pub mod source;

pub use age::AgeBucket;
pub use clock::{Clock, FixedClock, SystemClock, DAY_MS};
pub use model::{CompanyScale, Listing};
pub use pipeline::{derive, Derived, FilterCriteria, Query, SortKey, PAGE_SIZE};
pub use source::{JsonFileSource, ListingSource, MockSource, SourceError};
