mod calculation;
pub mod reducer;
mod route_api;

use crate::{api::API, db::DynStore, external::DynProvider};

pub struct Engine {
    provider: DynProvider,
    store: DynStore,
}

impl Engine {
    pub fn new(provider: DynProvider, store: DynStore) -> Self {
        Self { provider, store }
    }
}

impl API for Engine {}
