//! # Listing Sources
//!
//! The browser treats its data as a black box that hands over an ordered list
//! of [`Listing`]s once at startup. Two sources ship with the crate:
//!
//! - [`MockSource`] - the built-in demo dataset, dated relative to a clock
//! - [`JsonFileSource`] - a JSON array of listings on disk
//!
//! Either can be swapped for a network fetch without touching the UI.

use super::clock::Clock;
use super::mock;
use super::model::Listing;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Why a source could not produce listings.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("listings unavailable from {source_name}: {reason}")]
    DataUnavailable { source_name: String, reason: String },

    #[error("duplicate listing id '{0}'")]
    DuplicateId(String),
}

pub trait ListingSource {
    /// Short human-readable name, used in logs and error messages.
    fn name(&self) -> String;

    /// Produce the full, ordered dataset.
    fn load(&self) -> Result<Vec<Listing>, SourceError>;
}

/// Built-in demo listings, posted at fixed offsets before the clock's "now".
pub struct MockSource<C: Clock> {
    clock: C,
}

impl<C: Clock> MockSource<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> ListingSource for MockSource<C> {
    fn name(&self) -> String {
        "built-in mock listings".to_string()
    }

    fn load(&self) -> Result<Vec<Listing>, SourceError> {
        let listings = mock::listings(self.clock.now_millis());
        ensure_unique_ids(&listings)?;
        Ok(listings)
    }
}

/// Listings read from a JSON file containing an array of listing objects.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ListingSource for JsonFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Listing>, SourceError> {
        let contents = fs::read_to_string(&self.path).map_err(|e| SourceError::DataUnavailable {
            source_name: self.name(),
            reason: e.to_string(),
        })?;

        let listings: Vec<Listing> =
            serde_json::from_str(&contents).map_err(|e| SourceError::DataUnavailable {
                source_name: self.name(),
                reason: format!("invalid listing data: {e}"),
            })?;

        ensure_unique_ids(&listings)?;
        Ok(listings)
    }
}

fn ensure_unique_ids(listings: &[Listing]) -> Result<(), SourceError> {
    let mut seen = HashSet::with_capacity(listings.len());
    for listing in listings {
        if !seen.insert(listing.id.as_str()) {
            return Err(SourceError::DuplicateId(listing.id.clone()));
        }
    }
    Ok(())
}
