use crate::aspects::types::{AspectRecord, AspectTemplate, AspectType, ASPECT_TEMPLATES};
use crate::chart::PlanetRecord;

/// Aspect calculator
pub struct AspectCalculator {
    templates: &'static [AspectTemplate],
}

impl AspectCalculator {
    /// Create a calculator over the five major aspects
    pub fn new() -> Self {
        Self {
            templates: &ASPECT_TEMPLATES,
        }
    }

    /// Compute aspects between every pair of planets.
    ///
    /// Pairs are taken in slice order (i < j), which also fixes the
    /// `planet1`/`planet2` order of each record.
    pub fn detect_aspects(&self, planets: &[PlanetRecord]) -> Vec<AspectRecord> {
        let mut aspects = Vec::new();
        for i in 0..planets.len() {
            for j in (i + 1)..planets.len() {
                let p1 = &planets[i];
                let p2 = &planets[j];

                let angle = angular_separation(p1.longitude, p2.longitude);
                if let Some(aspect_type) = self.classify(angle) {
                    aspects.push(AspectRecord {
                        planet1: p1.id,
                        planet2: p2.id,
                        aspect_type,
                        angle: round_to_hundredths(angle),
                    });
                }
            }
        }
        aspects
    }

    /// First template whose orb contains the angle
    pub fn classify(&self, angle: f64) -> Option<AspectType> {
        self.templates
            .iter()
            .find(|template| template.matches(angle))
            .map(|template| template.aspect_type)
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal separation between two longitudes, in [0, 180]
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Exact decimal rounding, ties to even
fn round_to_hundredths(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
