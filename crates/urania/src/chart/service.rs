use crate::aspects::AspectCalculator;
use crate::chart::normalizer::normalize;
use crate::chart::report::{ChartOutcome, ChartReport};
use crate::chart::request::ChartRequest;
use crate::chart::ChartError;
use crate::ephemeris::{EphemerisProvider, EphemerisSettings};
use crate::geocoding::{Geocoder, LocationResolver};

/// Runs the natal chart pipeline: resolve place, compute positions,
/// normalize, detect aspects, assemble.
pub struct NatalChartService<G, E> {
    resolver: LocationResolver<G>,
    ephemeris: E,
    settings: EphemerisSettings,
    aspects: AspectCalculator,
}

impl<G: Geocoder, E: EphemerisProvider> NatalChartService<G, E> {
    pub fn new(resolver: LocationResolver<G>, ephemeris: E) -> Self {
        Self {
            resolver,
            ephemeris,
            settings: EphemerisSettings::default(),
            aspects: AspectCalculator::new(),
        }
    }

    pub fn with_settings(mut self, settings: EphemerisSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Compute one chart.
    pub fn calculate(&mut self, request: &ChartRequest) -> Result<ChartReport, ChartError> {
        let birth = request.birth_datetime()?;
        let location = self.resolver.resolve(&request.location);
        log::info!(
            "Computing chart for {} at ({:.4}, {:.4})",
            birth,
            location.lat,
            location.lon
        );

        let raw = self.ephemeris.compute_chart(birth, &location, &self.settings)?;
        let chart = normalize(&raw)?;
        let aspects = self.aspects.detect_aspects(&chart.planets);
        log::debug!(
            "{} planets, {} houses, {} aspects",
            chart.planets.len(),
            chart.houses.len(),
            aspects.len()
        );

        Ok(ChartReport::assemble(
            &request.date,
            &request.time,
            &request.location,
            location,
            chart.planets,
            chart.houses,
            aspects,
        ))
    }

    /// Compute one chart, folding any failure into an error document.
    pub fn run(&mut self, request: &ChartRequest) -> ChartOutcome {
        let outcome = ChartOutcome::from(self.calculate(request));
        if let ChartOutcome::Failed(failure) = &outcome {
            log::error!("{}", failure.error);
        }
        outcome
    }
}
