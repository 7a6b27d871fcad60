#![allow(dead_code)]

use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::rc::Rc;
use urania::chart::PlanetRecord;
use urania::ephemeris::adapter::houses_from_cusps;
use urania::ephemeris::{
    EphemerisError, EphemerisProvider, EphemerisSettings, GeoLocation, Planet, RawChart, RawPlanet,
};
use urania::geocoding::{GeocodeError, Geocoder};
use urania::western::{sign_id_from_longitude, sign_name};

pub const LONDON: GeoLocation = GeoLocation { lat: 51.5074, lon: -0.1278 };

/// Geocoder answering from a fixed table
pub struct TableGeocoder {
    pub places: Vec<(&'static str, GeoLocation)>,
}

impl Geocoder for TableGeocoder {
    fn geocode(&self, place: &str) -> Result<Option<GeoLocation>, GeocodeError> {
        Ok(self
            .places
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(place))
            .map(|(_, loc)| *loc))
    }
}

/// Geocoder that always errors
pub struct OfflineGeocoder;

impl Geocoder for OfflineGeocoder {
    fn geocode(&self, _place: &str) -> Result<Option<GeoLocation>, GeocodeError> {
        Err(GeocodeError::Unavailable("network unreachable".to_string()))
    }
}

/// Ephemeris with canned longitudes and whole-sign houses from an ascendant sign.
/// Records every call.
pub struct FixedEphemeris {
    pub longitudes: Vec<(Planet, f64)>,
    pub ascendant_sign: usize,
    pub calls: Rc<RefCell<Vec<(DateTime<Utc>, GeoLocation)>>>,
}

impl FixedEphemeris {
    pub fn new(longitudes: &[(Planet, f64)], ascendant_sign: usize) -> Self {
        Self {
            longitudes: longitudes.to_vec(),
            ascendant_sign,
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Seven planets spread so that only a few aspects form.
    pub fn sample() -> Self {
        Self::new(
            &[
                (Planet::Sun, 280.37),
                (Planet::Moon, 223.32),
                (Planet::Mercury, 271.89),
                (Planet::Venus, 241.57),
                (Planet::Mars, 327.96),
                (Planet::Jupiter, 25.25),
                (Planet::Saturn, 40.40),
            ],
            0,
        )
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn compute_chart(
        &mut self,
        dt_utc: DateTime<Utc>,
        location: &GeoLocation,
        settings: &EphemerisSettings,
    ) -> Result<RawChart, EphemerisError> {
        self.calls.borrow_mut().push((dt_utc, *location));
        let planets = self
            .longitudes
            .iter()
            .filter(|(id, _)| settings.include_objects.contains(id))
            .map(|(id, lon)| RawPlanet {
                id: *id,
                sign: sign_id_from_longitude(*lon).to_string(),
                lon: *lon,
                lat: None,
            })
            .collect();
        let cusps: [f64; 12] =
            std::array::from_fn(|i| (((self.ascendant_sign + i) % 12) as f64) * 30.0);
        Ok(RawChart {
            planets,
            houses: houses_from_cusps(&cusps),
        })
    }
}

/// Ephemeris whose calculation always fails
pub struct BrokenEphemeris;

impl EphemerisProvider for BrokenEphemeris {
    fn compute_chart(
        &mut self,
        dt_utc: DateTime<Utc>,
        _location: &GeoLocation,
        _settings: &EphemerisSettings,
    ) -> Result<RawChart, EphemerisError> {
        Err(EphemerisError::CalculationFailed {
            planet_id: "Moon".to_string(),
            datetime: dt_utc,
            message: "Swiss Ephemeris error: file not found".to_string(),
        })
    }
}

pub fn planet(id: Planet, longitude: f64) -> PlanetRecord {
    let sign = sign_id_from_longitude(longitude);
    PlanetRecord {
        id,
        sign: sign.to_string(),
        sign_name: sign_name(sign),
        house_number: 1,
        longitude,
        latitude: 0.0,
    }
}
