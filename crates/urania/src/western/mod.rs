pub mod lookup;

pub use lookup::{house_number, sign_id_from_longitude, sign_name, HOUSE_IDS, SIGN_IDS};
