use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{invalid_input_error, Error};

/// A coordinate pair kept as the decimal strings it was submitted with.
///
/// Serializes as a two element array, `["52.5", "13.4"]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "[String; 2]", try_from = "Vec<String>")]
pub struct Location {
    latitude: String,
    longitude: String,
}

impl Location {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Result<Self, Error> {
        let latitude = latitude.into();
        let longitude = longitude.into();

        check_coordinate("latitude", &latitude, 90.0)?;
        check_coordinate("longitude", &longitude, 180.0)?;

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    pub fn longitude(&self) -> &str {
        &self.longitude
    }
}

fn check_coordinate(name: &str, value: &str, bound: f64) -> Result<(), Error> {
    let parsed: f64 = value
        .parse()
        .map_err(|_| invalid_input_error(format!("{} {:?} is not a decimal number", name, value)))?;

    if !parsed.is_finite() || parsed.abs() > bound {
        return Err(invalid_input_error(format!(
            "{} {:?} is out of range",
            name, value
        )));
    }

    Ok(())
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl TryFrom<Vec<String>> for Location {
    type Error = Error;

    fn try_from(pair: Vec<String>) -> Result<Self, Self::Error> {
        let [latitude, longitude]: [String; 2] = pair
            .try_into()
            .map_err(|_| invalid_input_error("a geo location can only contain 2 elements"))?;

        Location::new(latitude, longitude)
    }
}

impl From<Location> for [String; 2] {
    fn from(location: Location) -> Self {
        [location.latitude, location.longitude]
    }
}
