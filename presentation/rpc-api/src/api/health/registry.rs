use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Name under which the overall server status is registered.
pub const OVERALL: &str = "";

/// Serving status reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingStatus {
    Serving,
    NotServing,
}

impl std::fmt::Display for ServingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServingStatus::Serving => write!(f, "SERVING"),
            ServingStatus::NotServing => write!(f, "NOT_SERVING"),
        }
    }
}

/// Per-service serving status, shared between the runtime and the health API.
///
/// Services start as NOT_SERVING and are flipped by the server once the
/// listener is bound, then back on shutdown.
#[derive(Debug, Clone, Default)]
pub struct HealthRegistry {
    statuses: Arc<RwLock<HashMap<String, ServingStatus>>>,
}

impl HealthRegistry {
    /// Creates a registry holding the overall entry plus `services`.
    pub fn new<I, S>(services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let statuses = std::iter::once(OVERALL.to_string())
            .chain(services.into_iter().map(Into::into))
            .map(|name| (name, ServingStatus::NotServing))
            .collect();
        Self {
            statuses: Arc::new(RwLock::new(statuses)),
        }
    }

    /// `None` for names that were never registered.
    pub fn status(&self, service: &str) -> Option<ServingStatus> {
        let statuses = self.statuses.read().unwrap_or_else(|e| e.into_inner());
        statuses.get(service).copied()
    }

    pub fn set_all(&self, status: ServingStatus) {
        let mut statuses = self.statuses.write().unwrap_or_else(|e| e.into_inner());
        for value in statuses.values_mut() {
            *value = status;
        }
    }
}
