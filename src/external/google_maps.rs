use async_trait::async_trait;

use super::{Directions, DirectionsProvider};
use crate::{
    config::GoogleMapsConfig,
    entities::Location,
    error::{config_error, invalid_input_error, upstream_error, Error},
};

/// Directions API client. Waypoint optimization is always requested.
#[derive(Clone, Debug)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl GoogleMaps {
    pub fn new(config: &GoogleMapsConfig) -> Result<Self, Error> {
        if config.api_key.is_empty() {
            return Err(config_error("GOOGLE_MAPS_API_KEY not allowed to be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

fn waypoints_param(waypoints: &[Location]) -> String {
    let mut param = String::from("optimize:true");
    for waypoint in waypoints {
        param.push('|');
        param.push_str(&waypoint.to_string());
    }
    param
}

#[async_trait]
impl DirectionsProvider for GoogleMaps {
    #[tracing::instrument(skip(self, locations), fields(waypoints = locations.len().saturating_sub(1)))]
    async fn calculate_directions(&self, locations: &[Location]) -> Result<Directions, Error> {
        let (origin, waypoints) = locations
            .split_first()
            .ok_or_else(|| invalid_input_error("no locations to route"))?;
        let origin = origin.to_string();

        let url = format!("{}/maps/api/directions/json", self.api_base);

        let res = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(&[("mode", "driving")])
            .query(&[("origin", origin.as_str())])
            .query(&[("destination", origin.as_str())])
            .query(&[("waypoints", waypoints_param(waypoints))])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code != 200 {
            return Err(upstream_error(format!(
                "unexpected status code from google maps api: {}",
                status_code
            )));
        }

        let data: Directions = res.json().await?;

        // impossible routes and unknown coordinates come back as ZERO_RESULTS with no routes
        if data.routes.is_empty() {
            return Err(upstream_error(format!(
                "no routes returned from API (status {})",
                data.status
            )));
        }

        tracing::debug!(status = %data.status, routes = data.routes.len(), "directions received");

        Ok(data)
    }
}
