//! Liveness endpoint mounted at `/health`, outside the versioned API.

use std::time::Instant;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

/// Result of one `SELECT 1` round trip.
#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    /// Round-trip time, present only when the database answered.
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub database: DatabaseHealth,
}

async fn probe_database(pool: &cinema_db::DbPool) -> DatabaseHealth {
    let started = Instant::now();
    match cinema_db::health_check(pool).await {
        Ok(()) => DatabaseHealth {
            reachable: true,
            latency_ms: Some(u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            DatabaseHealth {
                reachable: false,
                latency_ms: None,
            }
        }
    }
}

/// Always 200; a database outage shows up as `degraded`.
async fn health(State(state): State<AppState>) -> Json<DataResponse<Health>> {
    let database = probe_database(&state.pool).await;
    let status = if database.reachable {
        ServiceStatus::Ok
    } else {
        ServiceStatus::Degraded
    };

    Json(DataResponse {
        data: Health {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
