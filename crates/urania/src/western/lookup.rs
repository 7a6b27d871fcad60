//! Sign and house identifier tables.
//!
//! Both lookups are total: unknown identifiers fall back to `"Unknown"` and
//! house 1 respectively.

/// Canonical sign identifiers in zodiac order
pub const SIGN_IDS: [&str; 12] = [
    "aries", "taurus", "gemini", "cancer",
    "leo", "virgo", "libra", "scorpio",
    "sagittarius", "capricorn", "aquarius", "pisces",
];

const SIGN_NAMES: [&str; 12] = [
    "Aries", "Taurus", "Gemini", "Cancer",
    "Leo", "Virgo", "Libra", "Scorpio",
    "Sagittarius", "Capricorn", "Aquarius", "Pisces",
];

/// Canonical house identifiers in house-system enumeration order
pub const HOUSE_IDS: [&str; 12] = [
    "house1", "house2", "house3", "house4",
    "house5", "house6", "house7", "house8",
    "house9", "house10", "house11", "house12",
];

pub const UNKNOWN_SIGN: &str = "Unknown";

/// Human-readable name for a sign identifier
pub fn sign_name(sign_id: &str) -> &'static str {
    SIGN_IDS
        .iter()
        .position(|id| *id == sign_id)
        .map(|idx| SIGN_NAMES[idx])
        .unwrap_or(UNKNOWN_SIGN)
}

/// 1-based ordinal for a house identifier
pub fn house_number(house_id: &str) -> u8 {
    HOUSE_IDS
        .iter()
        .position(|id| *id == house_id)
        .map(|idx| idx as u8 + 1)
        .unwrap_or(1)
}

/// Sign identifier for an ecliptic longitude
pub fn sign_id_from_longitude(longitude: f64) -> &'static str {
    let normalized = longitude.rem_euclid(360.0);
    SIGN_IDS[((normalized / 30.0) as usize) % 12]
}
