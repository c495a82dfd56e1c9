use async_trait::async_trait;
use crate::models::{AnalysisReport, FileHandle};
use crate::types::AppResult;

/// The remote profiling backend: one file in, one report (or error) out.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn upload(&self, file: &FileHandle) -> AppResult<AnalysisReport>;
}

/// Backend reachability probe.
#[async_trait]
pub trait HealthService: Send + Sync {
    /// The status string reported by the service
    async fn health(&self) -> AppResult<String>;
}
