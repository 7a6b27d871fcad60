pub mod normalizer;
pub mod report;
pub mod request;
pub mod service;
pub mod types;

pub use normalizer::{normalize, NormalizedChart};
pub use report::{ChartData, ChartFailure, ChartOutcome, ChartReport};
pub use request::{ChartRequest, UNKNOWN_BIRTH_TIME};
pub use service::NatalChartService;
pub use types::{HouseRecord, PlanetRecord};

use crate::ephemeris::{EphemerisError, Planet};
use thiserror::Error;

/// Errors raised while computing a chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid time {value:?}, expected HH:MM")]
    InvalidTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("ephemeris returned no position for {0}")]
    MissingPlanet(Planet),
    #[error("expected 12 houses, ephemeris returned {0}")]
    HouseCount(usize),
}
