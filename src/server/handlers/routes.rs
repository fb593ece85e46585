use axum::extract::{rejection::JsonRejection, Extension, Json, Path};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::{
    entities::{Location, RouteResult},
    error::{invalid_input_error, Error},
};

#[derive(Serialize, Deserialize)]
pub struct CreateResponse {
    token: Uuid,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    params: Result<Json<Vec<Vec<String>>>, JsonRejection>,
) -> Result<Json<CreateResponse>, Error> {
    let Json(params) = params.map_err(|rejection| invalid_input_error(rejection.to_string()))?;

    let locations = params
        .into_iter()
        .map(Location::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let token = api.create_route(locations).await?;

    Ok(CreateResponse { token }.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(token): Path<String>,
) -> Result<(StatusCode, Json<RouteResult>), Error> {
    let result = api.find_route(&token).await?;

    let status = if result.is_terminal() {
        StatusCode::OK
    } else {
        StatusCode::ACCEPTED
    };

    Ok((status, result.into()))
}
