use crate::chart::types::{HouseRecord, PlanetRecord};
use crate::chart::ChartError;
use crate::ephemeris::{Planet, RawChart, RawHouse, RawPlanet};
use crate::western::lookup::{house_number, sign_name};

/// Planets and houses in canonical form
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedChart {
    /// Ordered as [`Planet::ALL`]
    pub planets: Vec<PlanetRecord>,
    /// Ordered by house index
    pub houses: Vec<HouseRecord>,
}

/// Walk raw ephemeris output into planet and house records.
pub fn normalize(raw: &RawChart) -> Result<NormalizedChart, ChartError> {
    if raw.houses.len() != 12 {
        return Err(ChartError::HouseCount(raw.houses.len()));
    }

    let planets = Planet::ALL
        .iter()
        .map(|id| {
            raw.planet(*id)
                .map(|planet| planet_record(planet, &raw.houses))
                .ok_or(ChartError::MissingPlanet(*id))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let houses = raw
        .houses
        .iter()
        .enumerate()
        .map(|(i, house)| HouseRecord {
            index: i as u8 + 1,
            sign: house.sign.clone(),
            sign_name: sign_name(&house.sign),
            cusp_longitude: house.lon,
        })
        .collect();

    Ok(NormalizedChart { planets, houses })
}

/// First house, in enumeration order, that contains the planet. House 1 if none does.
pub fn occupied_house(planet: &RawPlanet, houses: &[RawHouse]) -> u8 {
    houses
        .iter()
        .find(|house| house.has_object(planet))
        .map(|house| house_number(&house.id))
        .unwrap_or(1)
}

fn planet_record(planet: &RawPlanet, houses: &[RawHouse]) -> PlanetRecord {
    PlanetRecord {
        id: planet.id,
        sign: planet.sign.clone(),
        sign_name: sign_name(&planet.sign),
        house_number: occupied_house(planet, houses),
        longitude: planet.lon,
        latitude: planet.lat.unwrap_or(0.0),
    }
}
