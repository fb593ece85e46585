use crate::{
    entities::Location,
    error::{upstream_error, Error},
    external::Directions,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReducedPath {
    pub path: Vec<Location>,
    pub total_distance: u64,
    pub total_time: u64,
}

/// Turns a round trip response into the visiting order and its totals.
///
/// Only the first route counts since alternatives are never requested. A round
/// trip through `n` stops has `n` legs; the closing leg back to the origin is
/// left out of both totals.
pub fn reduce(directions: &Directions, locations: &[Location]) -> Result<ReducedPath, Error> {
    let route = directions
        .routes
        .first()
        .ok_or_else(|| upstream_error("no routes returned from API"))?;

    let (origin, waypoints) = locations
        .split_first()
        .ok_or_else(|| upstream_error("no locations to reduce"))?;

    if route.legs.len() != locations.len() {
        return Err(upstream_error(format!(
            "route has {} legs for {} stops",
            route.legs.len(),
            locations.len()
        )));
    }

    let mut total_distance: u64 = 0;
    let mut total_time: u64 = 0;
    for leg in &route.legs[..route.legs.len() - 1] {
        total_distance = total_distance
            .checked_add(leg.distance.value)
            .ok_or_else(|| upstream_error("leg totals overflow"))?;
        total_time = total_time
            .checked_add(leg.duration.value)
            .ok_or_else(|| upstream_error("leg totals overflow"))?;
    }

    if route.waypoint_order.len() != waypoints.len() {
        return Err(upstream_error(format!(
            "waypoint order covers {} of {} waypoints",
            route.waypoint_order.len(),
            waypoints.len()
        )));
    }

    let mut seen = vec![false; waypoints.len()];
    let mut path = Vec::with_capacity(locations.len());
    path.push(origin.clone());

    for &index in &route.waypoint_order {
        match seen.get_mut(index) {
            Some(visited) if !*visited => *visited = true,
            _ => {
                return Err(upstream_error(format!(
                    "invalid waypoint order {:?}",
                    route.waypoint_order
                )))
            }
        }
        path.push(waypoints[index].clone());
    }

    Ok(ReducedPath {
        path,
        total_distance,
        total_time,
    })
}
