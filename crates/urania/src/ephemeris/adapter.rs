use crate::ephemeris::types::{
    EphemerisSettings, GeoLocation, Planet, RawChart, RawHouse, RawPlanet,
};
use crate::western::lookup::{sign_id_from_longitude, HOUSE_IDS};
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, houses_ex, julday};
use swisseph::Cusp;
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Failed to calculate position for {planet_id} at {datetime}: {message}")]
    CalculationFailed {
        planet_id: String,
        datetime: DateTime<Utc>,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Source of raw planet and house positions for a chart.
pub trait EphemerisProvider {
    fn compute_chart(
        &mut self,
        dt_utc: DateTime<Utc>,
        location: &GeoLocation,
        settings: &EphemerisSettings,
    ) -> Result<RawChart, EphemerisError>;
}

/// House system mapping
const HOUSE_SYSTEMS: &[(&str, u8)] = &[
    ("placidus", b'P'),
    ("whole_sign", b'W'),
    ("koch", b'K'),
    ("equal", b'E'),
    ("regiomontanus", b'R'),
    ("campanus", b'C'),
    ("alcabitius", b'A'),
    ("morinus", b'M'),
];

// FLG_SWIEPH
const SWISS_FLAGS: i32 = 2;

pub const EPHEMERIS_PATH_ENV: &str = "SWISS_EPHEMERIS_PATH";
/// Read by the Swiss Ephemeris C library on its first call when no path has
/// been set through the API.
pub const SWE_EPHE_PATH_ENV: &str = "SE_EPHE_PATH";
pub const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var(EPHEMERIS_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        // Must be in place before the first calc_ut/houses_ex call.
        env::set_var(SWE_EPHE_PATH_ENV, &path);
        log::debug!("Using Swiss Ephemeris data at {}", path.display());
        Ok(Self {
            ephemeris_path: path,
        })
    }

    /// Data directory handed to Swiss Ephemeris
    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    /// Calculate position for a single planet
    pub fn calc_planet_position(
        &self,
        planet: Planet,
        jd: f64,
        dt_utc: DateTime<Utc>,
    ) -> Result<RawPlanet, EphemerisError> {
        let result = calc_ut(jd, planet.swiss_code(), SWISS_FLAGS as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                planet_id: planet.to_string(),
                datetime: dt_utc,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let longitude = result.out[0].rem_euclid(360.0);
        let latitude = result.out[1];

        Ok(RawPlanet {
            id: planet,
            sign: sign_id_from_longitude(longitude).to_string(),
            lon: longitude,
            lat: Some(latitude),
        })
    }

    /// Calculate house cusps, in house order
    pub fn calc_houses(
        &self,
        jd: f64,
        location: &GeoLocation,
        house_system_byte: u8,
    ) -> Result<Vec<RawHouse>, EphemerisError> {
        let (c, _ascmc) = houses_ex(
            jd,
            SWISS_FLAGS,
            location.lat,
            location.lon,
            house_system_byte as i32,
        );
        let cusps = Cusp::from_array(c);
        let cusp_values = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];

        if let Some(bad) = cusp_values.iter().find(|c| !c.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("non-finite cusp longitude {}", bad),
            });
        }

        Ok(houses_from_cusps(&cusp_values))
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn compute_chart(
        &mut self,
        dt_utc: DateTime<Utc>,
        location: &GeoLocation,
        settings: &EphemerisSettings,
    ) -> Result<RawChart, EphemerisError> {
        let jd = datetime_to_julian_day(dt_utc);
        let house_system_byte = get_house_system_byte(&settings.house_system)?;

        let planets = settings
            .include_objects
            .iter()
            .map(|planet| self.calc_planet_position(*planet, jd, dt_utc))
            .collect::<Result<Vec<_>, _>>()?;
        let houses = self.calc_houses(jd, location, house_system_byte)?;

        Ok(RawChart { planets, houses })
    }
}

/// Build raw houses from twelve cusp longitudes. Each house spans the arc to
/// the next cusp.
pub fn houses_from_cusps(cusps: &[f64; 12]) -> Vec<RawHouse> {
    (0..12)
        .map(|i| {
            let lon = cusps[i].rem_euclid(360.0);
            let next = cusps[(i + 1) % 12].rem_euclid(360.0);
            let size = match (next - lon).rem_euclid(360.0) {
                s if s == 0.0 => 30.0,
                s => s,
            };
            RawHouse {
                id: HOUSE_IDS[i].to_string(),
                sign: sign_id_from_longitude(lon).to_string(),
                lon,
                size,
            }
        })
        .collect()
}

/// Convert UTC datetime to Julian Day
fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour = dt.hour() as f64;
    let minute = dt.minute() as f64;
    let second = dt.second() as f64;
    let hour_decimal = hour + minute / 60.0 + second / 3600.0;

    // GREG_CAL = 1
    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, 1)
}

/// Convert house system string to byte format
fn get_house_system_byte(house_system: &str) -> Result<u8, EphemerisError> {
    HOUSE_SYSTEMS
        .iter()
        .find(|(name, _)| *name == house_system.to_lowercase())
        .map(|(_, byte)| *byte)
        .ok_or_else(|| EphemerisError::InvalidHouseSystem {
            system: house_system.to_string(),
            valid: HOUSE_SYSTEMS.iter().map(|(name, _)| name.to_string()).collect(),
        })
}
