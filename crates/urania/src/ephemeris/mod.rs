pub mod adapter;
pub mod types;

pub use adapter::{EphemerisError, EphemerisProvider, SwissEphemerisAdapter};
pub use types::{EphemerisSettings, GeoLocation, Planet, RawChart, RawHouse, RawPlanet};
