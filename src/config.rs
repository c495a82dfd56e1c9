use anyhow::Result;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";
pub const DEFAULT_UPLOAD_PATH: &str = "/upload";
pub const DEFAULT_HEALTH_PATH: &str = "/health";
pub const DEFAULT_LOG_DIR: &str = "./logs";

#[derive(Debug, Clone)]
pub struct Config {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
    pub upload_path: String,
    pub health_path: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = env::var("ANALYSIS_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
        if base_url.trim().is_empty() {
            anyhow::bail!("ANALYSIS_SERVICE_URL must not be empty");
        }

        Ok(Self {
            service: ServiceConfig {
                base_url,
                upload_path: env::var("UPLOAD_PATH")
                    .unwrap_or_else(|_| DEFAULT_UPLOAD_PATH.to_string()),
                health_path: env::var("HEALTH_PATH")
                    .unwrap_or_else(|_| DEFAULT_HEALTH_PATH.to_string()),
            },
            logging: LoggingConfig {
                log_dir: env::var("TABULAR_LENS_LOG_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR)),
            },
        })
    }

    /// Replace the service base URL, e.g. from `--server` on the command line
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.service.base_url = base_url.into();
        self
    }

    pub fn upload_url(&self) -> String {
        join_url(&self.service.base_url, &self.service.upload_path)
    }

    pub fn health_url(&self) -> String {
        join_url(&self.service.base_url, &self.service.health_path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                base_url: DEFAULT_SERVICE_URL.to_string(),
                upload_path: DEFAULT_UPLOAD_PATH.to_string(),
                health_path: DEFAULT_HEALTH_PATH.to_string(),
            },
            logging: LoggingConfig {
                log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            },
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
