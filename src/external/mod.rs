pub mod google_maps;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{entities::Location, error::Error};

/// Computes an optimized round trip through a list of locations.
///
/// The first location is both origin and destination; every other location is
/// a waypoint the provider is free to reorder.
#[async_trait]
pub trait DirectionsProvider {
    async fn calculate_directions(&self, locations: &[Location]) -> Result<Directions, Error>;
}

pub type DynProvider = std::sync::Arc<dyn DirectionsProvider + Send + Sync>;

/// The subset of a directions response the engine consumes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Directions {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<Leg>,
    #[serde(default)]
    pub waypoint_order: Vec<usize>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Leg {
    pub distance: Measure,
    pub duration: Measure,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Measure {
    #[serde(default)]
    pub text: String,
    pub value: u64,
}
