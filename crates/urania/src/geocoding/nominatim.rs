use crate::ephemeris::GeoLocation;
use crate::geocoding::{GeocodeError, Geocoder};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = "astrology_app";

#[derive(Debug, Clone)]
pub struct NominatimSettings {
    pub endpoint: String,
    pub user_agent: String,
    /// Request timeout; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,
}

impl Default for NominatimSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// Single search hit. Nominatim encodes coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// OpenStreetMap Nominatim search client
pub struct NominatimGeocoder {
    client: Client,
    endpoint: String,
}

impl NominatimGeocoder {
    pub fn new(settings: &NominatimSettings) -> Result<Self, GeocodeError> {
        let mut builder = Client::builder().user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GeocodeError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, place: &str) -> Result<Option<GeoLocation>, GeocodeError> {
        let hits: Vec<NominatimPlace> = self
            .client
            .get(&self.endpoint)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()?
            .error_for_status()?
            .json()?;

        let Some(hit) = hits.into_iter().next() else {
            return Ok(None);
        };
        log::debug!(
            "Nominatim resolved {:?} to {}",
            place,
            hit.display_name.as_deref().unwrap_or("<unnamed>")
        );
        parse_place(&hit).map(Some)
    }
}

fn parse_place(hit: &NominatimPlace) -> Result<GeoLocation, GeocodeError> {
    let lat = hit.lat.trim().parse::<f64>().map_err(|_| GeocodeError::Malformed {
        field: "lat",
        value: hit.lat.clone(),
    })?;
    let lon = hit.lon.trim().parse::<f64>().map_err(|_| GeocodeError::Malformed {
        field: "lon",
        value: hit.lon.clone(),
    })?;
    Ok(GeoLocation { lat, lon })
}
