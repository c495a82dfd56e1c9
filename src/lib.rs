// Tabular Lens - submit CSV/Excel files to a profiling service and view the report

pub mod config;
pub mod types;
pub mod models;
pub mod intake;
pub mod validator;
pub mod client;
pub mod lifecycle;
pub mod render;
pub mod connectivity;
pub mod utils;
pub mod tui;       // Terminal User Interface

// Re-exports for convenience
pub use config::Config;
pub use lifecycle::{UploadController, UploadState};
pub use models::{AnalysisReport, FileHandle};
pub use types::{AppError, AppResult};
