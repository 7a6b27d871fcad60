//! Place name to coordinate resolution.
//!
//! Geocoding never fails a chart: [`LocationResolver`] collapses every
//! provider miss or error to a fixed fallback coordinate. This hides typos in
//! the place name from the caller, who only sees the fallback latitude and
//! longitude in the chart metadata.

pub mod nominatim;
pub mod resolver;

use crate::ephemeris::GeoLocation;
use thiserror::Error;

pub use nominatim::{NominatimGeocoder, NominatimSettings};
pub use resolver::{LocationResolver, FALLBACK_LOCATION};

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed {field} in geocoding response: {value:?}")]
    Malformed { field: &'static str, value: String },
    #[error("geocoding provider unavailable: {0}")]
    Unavailable(String),
}

/// A geocoding provider.
pub trait Geocoder {
    /// Look up a place. `Ok(None)` means the provider found nothing.
    fn geocode(&self, place: &str) -> Result<Option<GeoLocation>, GeocodeError>;
}
