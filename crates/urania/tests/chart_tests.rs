mod common;

use approx::assert_relative_eq;
use common::{BrokenEphemeris, FixedEphemeris, OfflineGeocoder, TableGeocoder, LONDON};
use urania::aspects::AspectType;
use urania::chart::{ChartFailure, ChartOutcome, ChartRequest, NatalChartService};
use urania::ephemeris::{GeoLocation, Planet};
use urania::geocoding::LocationResolver;

fn london_service(ephemeris: FixedEphemeris) -> NatalChartService<TableGeocoder, FixedEphemeris> {
    let geocoder = TableGeocoder {
        places: vec![
            ("London", LONDON),
            ("Paris", GeoLocation { lat: 48.8566, lon: 2.3522 }),
        ],
    };
    NatalChartService::new(LocationResolver::new(geocoder), ephemeris)
}

#[test]
fn test_london_chart_shape() {
    let mut service = london_service(FixedEphemeris::sample());
    let request = ChartRequest::new("2000-01-01", "12:00", "London");

    let outcome = service.run(&request);
    assert!(outcome.is_chart());

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["planets"].as_object().unwrap().len(), 7);
    let houses = json["houses"].as_object().unwrap();
    assert_eq!(houses.len(), 12);
    for i in 1..=12 {
        assert!(houses.contains_key(&i.to_string()), "missing house {}", i);
    }
    assert_relative_eq!(json["chartData"]["latitude"].as_f64().unwrap(), 51.5074);
    assert_eq!(json["chartData"]["date"], "2000-01-01");
    assert_eq!(json["chartData"]["time"], "12:00");
    assert_eq!(json["chartData"]["location"], "London");
}

#[test]
fn test_planet_and_house_entries() {
    let mut service = london_service(FixedEphemeris::sample());
    let report = service
        .calculate(&ChartRequest::new("2000-01-01", "12:00", "London"))
        .unwrap();

    let ids: Vec<Planet> = report.planets.iter().map(|p| p.id).collect();
    assert_eq!(ids, Planet::ALL.to_vec());

    let sun = &report.planets[0];
    assert_eq!(sun.sign, "capricorn");
    assert_eq!(sun.sign_name, "Capricorn");
    assert_eq!(sun.house_number, 10);
    assert_eq!(sun.latitude, 0.0);
    assert_eq!(report.planets[1].house_number, 8);

    let json = serde_json::to_value(&report).unwrap();
    let sun_json = &json["planets"]["Sun"];
    assert_eq!(sun_json["name"], "Sun");
    assert_eq!(sun_json["house"], 10);
    assert_eq!(sun_json["house_number"], 10);
    assert_eq!(sun_json["sign_name"], "Capricorn");

    let first = &json["houses"]["1"];
    assert_eq!(first["index"], 1);
    assert_eq!(first["sign"], "aries");
    assert_eq!(first["sign_name"], "Aries");
    assert_eq!(first["cusp"], 0.0);
}

#[test]
fn test_aspects_in_report() {
    let mut service = london_service(FixedEphemeris::sample());
    let report = service
        .calculate(&ChartRequest::new("2000-01-01", "12:00", "London"))
        .unwrap();

    let find = |key: &str| report.aspects.iter().find(|a| a.key() == key);
    assert_eq!(find("Sun_Moon").unwrap().aspect_type, AspectType::Sextile);
    assert_eq!(find("Venus_Mars").unwrap().aspect_type, AspectType::Square);
    let opposition = find("Moon_Saturn").unwrap();
    assert_eq!(opposition.aspect_type, AspectType::Opposition);
    assert_relative_eq!(opposition.angle, 177.08, epsilon = 1e-9);
    assert!(find("Moon_Sun").is_none());

    let json = serde_json::to_value(&report).unwrap();
    let entry = &json["aspects"]["Moon_Saturn"];
    assert_eq!(entry["planet1"], "Moon");
    assert_eq!(entry["planet2"], "Saturn");
    assert_eq!(entry["type"], "Opposition");
}

#[test]
fn test_resolved_coordinates_reach_ephemeris() {
    let ephemeris = FixedEphemeris::sample();
    let calls = ephemeris.calls.clone();
    let mut service = london_service(ephemeris);

    let report = service
        .calculate(&ChartRequest::new("1985-07-13", "06:45", "Paris"))
        .unwrap();
    assert_relative_eq!(report.chart_data.latitude, 48.8566);
    assert_relative_eq!(report.chart_data.longitude, 2.3522);

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0.to_rfc3339(), "1985-07-13T06:45:00+00:00");
    assert_eq!(calls[0].1, GeoLocation { lat: 48.8566, lon: 2.3522 });
}

#[test]
fn test_unresolvable_location_uses_fallback() {
    let mut service = NatalChartService::new(
        LocationResolver::new(OfflineGeocoder),
        FixedEphemeris::sample(),
    );
    let report = service
        .calculate(&ChartRequest::new("2000-01-01", "12:00", "Lndon"))
        .unwrap();
    assert_eq!(report.chart_data.latitude, 51.5074);
    assert_eq!(report.chart_data.longitude, -0.1278);
    assert_eq!(report.chart_data.location, "Lndon");
}

#[test]
fn test_malformed_date_yields_error_document() {
    let ephemeris = FixedEphemeris::sample();
    let calls = ephemeris.calls.clone();
    let mut service = london_service(ephemeris);

    let outcome = service.run(&ChartRequest::new("2000-13-45", "12:00", "London"));
    let json = serde_json::to_value(&outcome).unwrap();
    let doc = json.as_object().unwrap();

    assert!(doc["error"]
        .as_str()
        .unwrap()
        .starts_with("Chart calculation failed: "));
    assert!(doc["traceback"].as_str().unwrap().contains("2000-13-45"));
    assert!(!doc.contains_key("planets"));
    assert!(!doc.contains_key("houses"));
    assert!(!doc.contains_key("aspects"));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_ephemeris_failure_yields_error_document() {
    let mut service = NatalChartService::new(LocationResolver::new(OfflineGeocoder), BrokenEphemeris);
    match service.run(&ChartRequest::new("2000-01-01", "12:00", "London")) {
        ChartOutcome::Failed(failure) => {
            assert!(failure.error.starts_with("Chart calculation failed: "));
            assert!(failure.error.contains("Moon"));
            assert!(failure.traceback.is_some());
        }
        ChartOutcome::Chart(_) => panic!("expected failure"),
    }
}

#[test]
fn test_missing_planet_is_a_calculation_failure() {
    let ephemeris = FixedEphemeris::new(&[(Planet::Sun, 10.0), (Planet::Moon, 15.0)], 0);
    let mut service = london_service(ephemeris);
    let outcome = service.run(&ChartRequest::new("2000-01-01", "12:00", "London"));
    match outcome {
        ChartOutcome::Failed(failure) => assert!(failure.error.contains("Mercury")),
        ChartOutcome::Chart(_) => panic!("expected failure"),
    }
}

#[test]
fn test_missing_dependency_document() {
    let outcome = ChartOutcome::Failed(ChartFailure::missing_dependency("swisseph data not found"));
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"error": "Required libraries not installed: swisseph data not found"})
    );
}

#[test]
fn test_pretty_output_uses_two_space_indent() {
    let mut service = london_service(FixedEphemeris::sample());
    let outcome = service.run(&ChartRequest::new("2000-01-01", "12:00", "London"));
    let text = outcome.to_json(true).unwrap();
    assert!(text.starts_with("{\n  \"chartData\": {\n    \"date\""));
    let compact = outcome.to_json(false).unwrap();
    assert!(!compact.contains('\n'));
}
