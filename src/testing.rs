//! Test doubles for the provider and store seams.

use async_trait::async_trait;
use axum::Router;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use uuid::Uuid;

use crate::{
    api::RouteAPI,
    db::{MemoryStore, ResultStore},
    entities::{Location, RouteResult},
    error::{storage_error, Error},
    external::{Directions, DirectionsProvider, DirectionsRoute, Leg, Measure},
};

pub fn locations(pairs: &[(&str, &str)]) -> Vec<Location> {
    pairs
        .iter()
        .map(|(lat, lng)| Location::new(*lat, *lng).unwrap())
        .collect()
}

/// A single route response with the given order and `(distance, duration)` legs.
pub fn directions(waypoint_order: Vec<usize>, legs: &[(u64, u64)]) -> Directions {
    Directions {
        status: "OK".into(),
        routes: vec![DirectionsRoute {
            legs: legs
                .iter()
                .map(|&(distance, duration)| Leg {
                    distance: Measure {
                        text: format!("{} m", distance),
                        value: distance,
                    },
                    duration: Measure {
                        text: format!("{} s", duration),
                        value: duration,
                    },
                })
                .collect(),
            waypoint_order,
        }],
    }
}

/// Serves `app` on an ephemeral local port.
pub fn spawn_app(app: Router) -> SocketAddr {
    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    addr
}

pub async fn wait_for_terminal<A>(api: &A, token: &str) -> RouteResult
where
    A: RouteAPI + ?Sized,
{
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let result = api.find_route(token).await.unwrap();
            if result.is_terminal() {
                return result;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("route never reached a terminal state")
}

/// Answers every request with the same canned response.
pub struct FakeProvider {
    response: Result<Directions, Error>,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
}

impl FakeProvider {
    pub fn returning(directions: Directions) -> Self {
        Self {
            response: Ok(directions),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(err: Error) -> Self {
        Self {
            response: Err(err),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Holds the response back until the returned handle is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectionsProvider for FakeProvider {
    async fn calculate_directions(&self, _locations: &[Location]) -> Result<Directions, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.response.clone()
    }
}

/// Visits waypoints in reverse, 1000 m and 60 s per leg.
#[derive(Default)]
pub struct EchoProvider {
    calls: AtomicUsize,
}

impl EchoProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectionsProvider for EchoProvider {
    async fn calculate_directions(&self, locations: &[Location]) -> Result<Directions, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        let waypoints = locations.len() - 1;
        let legs: Vec<(u64, u64)> = vec![(1000, 60); waypoints + 1];
        Ok(directions((0..waypoints).rev().collect(), &legs))
    }
}

/// Memory store whose writes start failing after `fail_after` successes.
pub struct FaultyStore {
    inner: MemoryStore,
    fail_after: usize,
    attempts: AtomicUsize,
}

impl FaultyStore {
    pub fn failing_after(fail_after: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_after,
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResultStore for FaultyStore {
    async fn get(&self, token: &Uuid) -> Result<Option<RouteResult>, Error> {
        self.inner.get(token).await
    }

    async fn set(&self, token: &Uuid, result: &RouteResult) -> Result<(), Error> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt >= self.fail_after {
            return Err(storage_error("disk full"));
        }
        self.inner.set(token, result).await
    }
}
