use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use urania::chart::UNKNOWN_BIRTH_TIME;
use urania::geocoding::nominatim::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
use urania::geocoding::FALLBACK_LOCATION;

/// Resolved settings for one chart run
#[derive(Debug, Clone, PartialEq)]
pub struct UraniaSettings {
    pub geocoder_enabled: bool,
    pub geocoder_endpoint: String,
    pub user_agent: String,
    pub geocoder_timeout: Option<Duration>,
    pub fallback_lat: f64,
    pub fallback_lon: f64,
    pub ephemeris_path: Option<PathBuf>,
    pub unknown_time: String,
}

impl Default for UraniaSettings {
    fn default() -> Self {
        resolve(RootConfigToml::default())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    geocoder: GeocoderToml,
    #[serde(default)]
    location: LocationToml,
    #[serde(default)]
    ephemeris: EphemerisToml,
    #[serde(default)]
    chart: ChartToml,
}

#[derive(Debug, Clone, Deserialize)]
struct GeocoderToml {
    #[serde(default = "default_true")]
    enabled: bool,
    #[serde(default = "default_endpoint")]
    endpoint: String,
    #[serde(default = "default_user_agent")]
    user_agent: String,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl Default for GeocoderToml {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LocationToml {
    #[serde(default = "default_fallback_lat")]
    fallback_lat: f64,
    #[serde(default = "default_fallback_lon")]
    fallback_lon: f64,
}

impl Default for LocationToml {
    fn default() -> Self {
        Self {
            fallback_lat: FALLBACK_LOCATION.lat,
            fallback_lon: FALLBACK_LOCATION.lon,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChartToml {
    #[serde(default = "default_unknown_time")]
    unknown_time: String,
}

impl Default for ChartToml {
    fn default() -> Self {
        Self {
            unknown_time: default_unknown_time(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_fallback_lat() -> f64 {
    FALLBACK_LOCATION.lat
}

fn default_fallback_lon() -> f64 {
    FALLBACK_LOCATION.lon
}

fn default_unknown_time() -> String {
    UNKNOWN_BIRTH_TIME.to_string()
}

/// Try common relative paths for `configs/urania.toml`. `None` if none exists.
pub fn read_config_toml_text() -> Option<String> {
    let paths = ["configs/urania.toml", "../../configs/urania.toml"];
    paths.iter().find_map(|p| fs::read_to_string(p).ok())
}

/// Parse settings from TOML text.
pub fn parse_settings(text: &str) -> anyhow::Result<UraniaSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;
    let settings = resolve(root);
    validate(&settings)?;
    Ok(settings)
}

/// Load settings. An explicit path must exist and parse; otherwise the
/// default locations are tried and defaults used if nothing is found.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<UraniaSettings> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
        return parse_settings(&text);
    }
    match read_config_toml_text() {
        Some(text) => parse_settings(&text),
        None => Ok(UraniaSettings::default()),
    }
}

fn resolve(root: RootConfigToml) -> UraniaSettings {
    let RootConfigToml {
        geocoder,
        location,
        ephemeris,
        chart,
    } = root;
    UraniaSettings {
        geocoder_enabled: geocoder.enabled,
        geocoder_endpoint: geocoder.endpoint,
        user_agent: geocoder.user_agent,
        geocoder_timeout: geocoder.timeout_secs.map(Duration::from_secs),
        fallback_lat: location.fallback_lat,
        fallback_lon: location.fallback_lon,
        ephemeris_path: ephemeris.path,
        unknown_time: chart.unknown_time,
    }
}

fn validate(settings: &UraniaSettings) -> anyhow::Result<()> {
    if !(-90.0..=90.0).contains(&settings.fallback_lat) {
        anyhow::bail!("location.fallback_lat out of range: {}", settings.fallback_lat);
    }
    if !(-180.0..=180.0).contains(&settings.fallback_lon) {
        anyhow::bail!("location.fallback_lon out of range: {}", settings.fallback_lon);
    }
    if settings.geocoder_endpoint.trim().is_empty() {
        anyhow::bail!("geocoder.endpoint must not be empty");
    }
    Ok(())
}
