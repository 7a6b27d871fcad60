use crate::ephemeris::Planet;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A planet placed in a sign and whole-sign house
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetRecord {
    pub id: Planet,
    pub sign: String,
    pub sign_name: &'static str,
    /// 1-12
    pub house_number: u8,
    pub longitude: f64,
    pub latitude: f64,
}

// `house` duplicates `house_number`; consumers of the report read either key.
impl Serialize for PlanetRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PlanetRecord", 7)?;
        state.serialize_field("name", &self.id)?;
        state.serialize_field("sign", &self.sign)?;
        state.serialize_field("house", &self.house_number)?;
        state.serialize_field("longitude", &self.longitude)?;
        state.serialize_field("latitude", &self.latitude)?;
        state.serialize_field("sign_name", self.sign_name)?;
        state.serialize_field("house_number", &self.house_number)?;
        state.end()
    }
}

/// One house cusp
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HouseRecord {
    /// 1-12, by house enumeration order
    pub index: u8,
    pub sign: String,
    pub sign_name: &'static str,
    #[serde(rename = "cusp")]
    pub cusp_longitude: f64,
}
