use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{Location, RouteResult};
use crate::error::Error;

#[async_trait]
pub trait RouteAPI {
    /// Accepts a round trip starting and ending at the first location and
    /// returns the token to poll. Never waits on the directions provider.
    async fn create_route(&self, locations: Vec<Location>) -> Result<Uuid, Error>;

    /// Returns the result currently stored for `token`, whatever its status.
    async fn find_route(&self, token: &str) -> Result<RouteResult, Error>;
}

pub trait API: RouteAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
