use super::{calculation::calculate, Engine};

use async_trait::async_trait;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    api::RouteAPI,
    entities::{Location, RouteResult},
    error::{invalid_input_error, not_found_error, Error},
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self, locations), fields(locations = locations.len()))]
    async fn create_route(&self, locations: Vec<Location>) -> Result<Uuid, Error> {
        if locations.len() < 2 {
            return Err(invalid_input_error("not enough values to calculate paths"));
        }

        let token = Uuid::new_v4();
        self.store.set(&token, &RouteResult::InProgress).await?;

        tokio::spawn(
            calculate(
                self.provider.clone(),
                self.store.clone(),
                token,
                locations,
            )
            .instrument(tracing::info_span!("calculate_route", %token)),
        );

        tracing::info!(%token, "route calculation scheduled");

        Ok(token)
    }

    #[tracing::instrument(skip(self))]
    async fn find_route(&self, token: &str) -> Result<RouteResult, Error> {
        let token = Uuid::parse_str(token).map_err(|_| not_found_error())?;

        self.store.get(&token).await?.ok_or_else(not_found_error)
    }
}
