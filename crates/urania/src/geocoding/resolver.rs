use crate::ephemeris::GeoLocation;
use crate::geocoding::Geocoder;

/// London. Used whenever a place cannot be resolved.
pub const FALLBACK_LOCATION: GeoLocation = GeoLocation {
    lat: 51.5074,
    lon: -0.1278,
};

/// Resolves place names, falling back to a fixed coordinate on any miss.
pub struct LocationResolver<G> {
    geocoder: Option<G>,
    fallback: GeoLocation,
}

impl<G: Geocoder> LocationResolver<G> {
    pub fn new(geocoder: G) -> Self {
        Self {
            geocoder: Some(geocoder),
            fallback: FALLBACK_LOCATION,
        }
    }

    /// A resolver that never calls out and always answers with the fallback.
    pub fn offline() -> Self {
        Self {
            geocoder: None,
            fallback: FALLBACK_LOCATION,
        }
    }

    pub fn with_fallback(mut self, fallback: GeoLocation) -> Self {
        self.fallback = fallback;
        self
    }

    /// One lookup, no retries. Failures are logged and discarded.
    pub fn resolve(&self, place: &str) -> GeoLocation {
        let Some(geocoder) = &self.geocoder else {
            return self.fallback;
        };
        match geocoder.geocode(place) {
            Ok(Some(location)) => location,
            Ok(None) => {
                log::warn!("No geocoding result for {:?}; using fallback location", place);
                self.fallback
            }
            Err(e) => {
                log::warn!("Geocoding {:?} failed: {}; using fallback location", place, e);
                self.fallback
            }
        }
    }
}
