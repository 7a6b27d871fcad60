//! Natal chart summaries: planet signs and whole-sign houses, house cusps,
//! and major aspects for a birth date, time and place.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod geocoding;
pub mod western;

pub use chart::{ChartOutcome, ChartReport, ChartRequest, NatalChartService};
pub use ephemeris::{GeoLocation, Planet, SwissEphemerisAdapter};
pub use geocoding::{LocationResolver, NominatimGeocoder};
