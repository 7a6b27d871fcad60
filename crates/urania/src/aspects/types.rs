use crate::ephemeris::Planet;
use serde::{Deserialize, Serialize};

/// The five major aspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Target angle and orb for one aspect type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectTemplate {
    pub aspect_type: AspectType,
    pub exact_angle: f64,
    pub orb: f64,
}

impl AspectTemplate {
    pub fn matches(&self, angle: f64) -> bool {
        (angle - self.exact_angle).abs() <= self.orb
    }
}

/// Templates in match priority order; the first match wins.
pub const ASPECT_TEMPLATES: [AspectTemplate; 5] = [
    AspectTemplate { aspect_type: AspectType::Conjunction, exact_angle: 0.0, orb: 8.0 },
    AspectTemplate { aspect_type: AspectType::Sextile, exact_angle: 60.0, orb: 6.0 },
    AspectTemplate { aspect_type: AspectType::Square, exact_angle: 90.0, orb: 8.0 },
    AspectTemplate { aspect_type: AspectType::Trine, exact_angle: 120.0, orb: 8.0 },
    AspectTemplate { aspect_type: AspectType::Opposition, exact_angle: 180.0, orb: 8.0 },
];

/// An aspect between two planets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    pub planet1: Planet,
    pub planet2: Planet,
    #[serde(rename = "type")]
    pub aspect_type: AspectType,
    /// Minimal separation in degrees, rounded to 2 decimals
    pub angle: f64,
}

impl AspectRecord {
    /// Report key, e.g. `Sun_Moon`
    pub fn key(&self) -> String {
        format!("{}_{}", self.planet1, self.planet2)
    }
}
