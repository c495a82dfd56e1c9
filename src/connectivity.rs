//! Backend connectivity status
//!
//! Checked once when the UI mounts; never retried and independent of the
//! upload lifecycle.

use crate::client::HealthService;
use std::fmt;
use tracing::{info, warn};

pub const CHECKING_LABEL: &str = "Checking...";
pub const UNREACHABLE_LABEL: &str = "error - backend not running";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectivityStatus {
    #[default]
    Checking,
    /// Status string as reported by the service
    Reported(String),
    Unreachable,
}

impl ConnectivityStatus {
    pub fn label(&self) -> &str {
        match self {
            ConnectivityStatus::Checking => CHECKING_LABEL,
            ConnectivityStatus::Reported(status) => status,
            ConnectivityStatus::Unreachable => UNREACHABLE_LABEL,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, ConnectivityStatus::Reported(_))
    }
}

impl fmt::Display for ConnectivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub async fn check<H: HealthService + ?Sized>(service: &H) -> ConnectivityStatus {
    match service.health().await {
        Ok(status) => {
            info!("Backend status: {}", status);
            ConnectivityStatus::Reported(status)
        }
        Err(e) => {
            warn!("Health check failed: {}", e);
            ConnectivityStatus::Unreachable
        }
    }
}
