//! DTOs for the service-level endpoints.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: u16,
    pub message: &'static str,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: 200,
            message: "Healthy",
        }
    }
}

/// Self-description returned by `GET /api`.
#[derive(Debug, Serialize)]
pub struct ApiMetadata {
    pub name: &'static str,
    pub version: &'static str,
    /// Operation name to absolute URL.
    pub paths: BTreeMap<&'static str, String>,
}
