use uuid::Uuid;

use super::reducer::reduce;
use crate::{
    db::DynStore,
    entities::{Location, RouteResult},
    error::Error,
    external::DynProvider,
};

/// Runs one submission to its terminal state. A single provider attempt is
/// made; its outcome, good or bad, ends up in the store.
pub(super) async fn calculate(
    provider: DynProvider,
    store: DynStore,
    token: Uuid,
    locations: Vec<Location>,
) {
    let outcome = match provider.calculate_directions(&locations).await {
        Ok(directions) => reduce(&directions, &locations),
        Err(err) => Err(err),
    };

    let result = match outcome {
        Ok(reduced) => {
            tracing::info!(
                total_distance = reduced.total_distance,
                total_time = reduced.total_time,
                "route calculated"
            );
            RouteResult::success(reduced.path, reduced.total_distance, reduced.total_time)
        }
        Err(err) => {
            tracing::warn!(error = %err, "route calculation failed");
            RouteResult::failure(err.to_string())
        }
    };

    // the token stays in progress if this write is lost
    if let Err(err) = finish(&store, &token, result).await {
        tracing::error!(error = %err, "could not store terminal result, token left in progress");
    }
}

async fn finish(store: &DynStore, token: &Uuid, result: RouteResult) -> Result<(), Error> {
    let current = store.get(token).await?.unwrap_or(RouteResult::InProgress);
    let terminal = current.transition(result)?;

    store.set(token, &terminal).await
}
