use crate::types::AppResult;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// A user-selected file, as handed to the upload workflow.
///
/// Cloning is cheap: the contents are reference-counted.
#[derive(Debug, Clone, PartialEq)]
pub struct FileHandle {
    name: String,
    media_type: String,
    contents: Bytes,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, contents: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            contents: contents.into(),
        }
    }

    /// Read a file from disk, declaring its media type from the extension.
    ///
    /// An extension `mime_guess` does not know yields an empty media type,
    /// which the validator rejects.
    pub async fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let media_type = mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        Ok(Self::new(name, media_type, contents))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared media type (may be empty)
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn size(&self) -> u64 {
        self.contents.len() as u64
    }

    pub fn bytes(&self) -> Bytes {
        self.contents.clone()
    }
}

/// Successful response body of `POST /upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub upload_id: i64,
    pub filename: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
    pub analysis: AnalysisSummary,
}

/// Profiling figures for one uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub rows: u64,
    pub columns: u64,
    pub column_names: Vec<String>,
    pub data_types: BTreeMap<String, String>,
    #[serde(default)]
    pub sample_data: Vec<serde_json::Value>,
    pub missing_values: BTreeMap<String, u64>,
    #[serde(default)]
    pub numeric_summary: BTreeMap<String, serde_json::Value>,
}

impl AnalysisSummary {
    /// Sum of all per-column missing counts, saturating at `u64::MAX`; 0 for an
    /// empty mapping
    pub fn total_missing(&self) -> u64 {
        self.missing_values
            .values()
            .fold(0u64, |total, count| total.saturating_add(*count))
    }

    pub fn data_type_of(&self, column: &str) -> Option<&str> {
        self.data_types.get(column).map(String::as_str)
    }
}

impl AnalysisReport {
    /// Check the column invariants of the report.
    ///
    /// Returns one human-readable line per violation; an empty vector means
    /// every column-keyed mapping lines up with `column_names`.
    pub fn check_consistency(&self) -> Vec<String> {
        let analysis = &self.analysis;
        let mut issues = Vec::new();

        if analysis.column_names.len() as u64 != analysis.columns {
            issues.push(format!(
                "columns is {} but column_names has {} entries",
                analysis.columns,
                analysis.column_names.len()
            ));
        }

        let names: BTreeSet<&str> = analysis.column_names.iter().map(String::as_str).collect();
        let typed: BTreeSet<&str> = analysis.data_types.keys().map(String::as_str).collect();
        let missing: BTreeSet<&str> = analysis.missing_values.keys().map(String::as_str).collect();

        if typed != names {
            issues.push("data_types keys differ from column_names".to_string());
        }
        if missing != names {
            issues.push("missing_values keys differ from column_names".to_string());
        }
        for key in analysis.numeric_summary.keys() {
            if !names.contains(key.as_str()) {
                issues.push(format!("numeric_summary has unknown column '{}'", key));
            }
        }

        issues
    }
}

/// Error body the service attaches to non-success responses.
///
/// `detail` is usually a string, but request-validation failures carry a list
/// of objects instead; only the string form is shown to the user.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorDetail {
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .filter(|d| !d.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
