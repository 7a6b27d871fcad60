use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// The seven classical planets, in chart enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    /// Fixed enumeration order. Drives house tie-breaking and aspect pair order.
    pub const ALL: [Planet; 7] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
        }
    }

    /// Swiss Ephemeris body number
    pub fn swiss_code(&self) -> u32 {
        match self {
            Planet::Sun => 0,
            Planet::Moon => 1,
            Planet::Mercury => 2,
            Planet::Venus => 3,
            Planet::Mars => 4,
            Planet::Jupiter => 5,
            Planet::Saturn => 6,
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A planet as reported by the ephemeris provider
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlanet {
    pub id: Planet,
    /// Sign identifier, e.g. "aries"
    pub sign: String,
    /// Ecliptic longitude in degrees (0-360)
    pub lon: f64,
    /// Ecliptic latitude in degrees, when the provider reports one
    pub lat: Option<f64>,
}

/// A house as reported by the ephemeris provider
#[derive(Debug, Clone, PartialEq)]
pub struct RawHouse {
    /// House identifier, e.g. "house1"
    pub id: String,
    /// Sign on the cusp
    pub sign: String,
    /// Cusp longitude in degrees
    pub lon: f64,
    /// Arc covered by the house, in degrees
    pub size: f64,
}

impl RawHouse {
    /// Whether the planet's longitude falls inside this house.
    pub fn has_object(&self, planet: &RawPlanet) -> bool {
        let dist = (planet.lon - self.lon).rem_euclid(360.0);
        dist < self.size
    }
}

/// Raw ephemeris output for one chart
#[derive(Debug, Clone, Default)]
pub struct RawChart {
    /// Planets in provider order
    pub planets: Vec<RawPlanet>,
    /// Houses in house-system enumeration order
    pub houses: Vec<RawHouse>,
}

impl RawChart {
    pub fn planet(&self, id: Planet) -> Option<&RawPlanet> {
        self.planets.iter().find(|p| p.id == id)
    }
}

/// Settings for ephemeris calculations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EphemerisSettings {
    /// House system name
    pub house_system: String,
    /// Planets to include
    pub include_objects: Vec<Planet>,
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            house_system: "whole_sign".to_string(),
            include_objects: Planet::ALL.to_vec(),
        }
    }
}
