use crate::aspects::AspectRecord;
use crate::chart::types::{HouseRecord, PlanetRecord};
use crate::ephemeris::GeoLocation;
use serde::{Serialize, Serializer};

/// Chart metadata: the caller's input plus the resolved coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub date: String,
    pub time: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// The assembled natal chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    #[serde(rename = "chartData")]
    pub chart_data: ChartData,
    #[serde(serialize_with = "planets_by_id")]
    pub planets: Vec<PlanetRecord>,
    #[serde(serialize_with = "houses_by_index")]
    pub houses: Vec<HouseRecord>,
    #[serde(serialize_with = "aspects_by_key")]
    pub aspects: Vec<AspectRecord>,
}

impl ChartReport {
    pub fn assemble(
        date: &str,
        time: &str,
        location: &str,
        resolved: GeoLocation,
        planets: Vec<PlanetRecord>,
        houses: Vec<HouseRecord>,
        aspects: Vec<AspectRecord>,
    ) -> Self {
        Self {
            chart_data: ChartData {
                date: date.to_string(),
                time: time.to_string(),
                location: location.to_string(),
                latitude: resolved.lat,
                longitude: resolved.lon,
            },
            planets,
            houses,
            aspects,
        }
    }
}

// The records are kept as ordered vectors and only become JSON objects here,
// so key order in the output follows chart enumeration order.

fn planets_by_id<S: Serializer>(planets: &[PlanetRecord], s: S) -> Result<S::Ok, S::Error> {
    s.collect_map(planets.iter().map(|p| (p.id, p)))
}

fn houses_by_index<S: Serializer>(houses: &[HouseRecord], s: S) -> Result<S::Ok, S::Error> {
    s.collect_map(houses.iter().map(|h| (h.index.to_string(), h)))
}

fn aspects_by_key<S: Serializer>(aspects: &[AspectRecord], s: S) -> Result<S::Ok, S::Error> {
    s.collect_map(aspects.iter().map(|a| (a.key(), a)))
}

/// Error document emitted in place of a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFailure {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traceback: Option<String>,
}

impl ChartFailure {
    /// A failure inside chart calculation; carries the full cause chain.
    pub fn calculation(err: anyhow::Error) -> Self {
        Self {
            error: format!("Chart calculation failed: {}", err),
            traceback: Some(format!("{:?}", err)),
        }
    }

    /// A required collaborator could not be set up.
    pub fn missing_dependency(detail: impl std::fmt::Display) -> Self {
        Self {
            error: format!("Required libraries not installed: {}", detail),
            traceback: None,
        }
    }

    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            traceback: None,
        }
    }
}

/// Result of one chart invocation, as written to stdout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartOutcome {
    Chart(ChartReport),
    Failed(ChartFailure),
}

impl ChartOutcome {
    pub fn is_chart(&self) -> bool {
        matches!(self, ChartOutcome::Chart(_))
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl<E> From<Result<ChartReport, E>> for ChartOutcome
where
    E: Into<anyhow::Error>,
{
    fn from(result: Result<ChartReport, E>) -> Self {
        match result {
            Ok(report) => ChartOutcome::Chart(report),
            Err(e) => ChartOutcome::Failed(ChartFailure::calculation(e.into())),
        }
    }
}
