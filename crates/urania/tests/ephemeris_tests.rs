use chrono::{TimeZone, Utc};
use urania::chart::normalize;
use urania::ephemeris::{
    EphemerisProvider, EphemerisSettings, GeoLocation, Planet, RawHouse, RawPlanet,
    SwissEphemerisAdapter,
};

fn house(lon: f64, size: f64) -> RawHouse {
    RawHouse {
        id: "house1".to_string(),
        sign: "aries".to_string(),
        lon,
        size,
    }
}

fn body(lon: f64) -> RawPlanet {
    RawPlanet {
        id: Planet::Sun,
        sign: "aries".to_string(),
        lon,
        lat: None,
    }
}

#[test]
fn test_house_membership_half_open() {
    let h = house(30.0, 30.0);
    assert!(h.has_object(&body(30.0)));
    assert!(h.has_object(&body(59.99)));
    assert!(!h.has_object(&body(60.0)));
    assert!(!h.has_object(&body(29.99)));
}

#[test]
fn test_house_membership_wraps_past_pisces() {
    let h = house(330.0, 30.0);
    assert!(h.has_object(&body(345.0)));
    assert!(!h.has_object(&body(0.0)));

    let wide = house(350.0, 25.0);
    assert!(wide.has_object(&body(5.0)));
}

#[test]
fn test_default_settings_are_whole_sign_seven_planets() {
    let settings = EphemerisSettings::default();
    assert_eq!(settings.house_system, "whole_sign");
    assert_eq!(settings.include_objects, Planet::ALL.to_vec());
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_compute_chart_j2000() {
    let mut adapter = SwissEphemerisAdapter::new(None).unwrap();
    let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    let london = GeoLocation { lat: 51.5074, lon: -0.1278 };

    let raw = adapter
        .compute_chart(dt, &london, &EphemerisSettings::default())
        .unwrap();
    assert_eq!(raw.planets.len(), 7);
    assert_eq!(raw.houses.len(), 12);

    // Sun near 280.37 (10 Capricorn) at J2000
    let sun = raw.planet(Planet::Sun).unwrap();
    assert!((sun.lon - 280.37).abs() < 0.05);
    assert_eq!(sun.sign, "capricorn");

    let chart = normalize(&raw).unwrap();
    assert!(chart.planets.iter().all(|p| (1..=12).contains(&p.house_number)));
    assert!(chart.houses.iter().all(|h| h.cusp_longitude % 30.0 < 1e-6));
}
