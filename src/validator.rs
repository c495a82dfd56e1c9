//! Client-side file validation
//!
//! Runs before any network activity. Only the declared media type is looked
//! at; file contents are never inspected.

use crate::models::FileHandle;

pub const CSV_MEDIA_TYPE: &str = "text/csv";
pub const XLSX_MEDIA_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Media types the upload workflow accepts.
///
/// The legacy Excel type (`application/vnd.ms-excel`) is deliberately absent
/// even though the picker filter lists `.xls`; see DESIGN.md.
pub const ACCEPTED_MEDIA_TYPES: [&str; 2] = [CSV_MEDIA_TYPE, XLSX_MEDIA_TYPE];

pub const REJECTION_MESSAGE: &str = "Only CSV and Excel files are allowed.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected(String),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }
}

pub fn validate(file: &FileHandle) -> ValidationOutcome {
    validate_media_type(file.media_type())
}

pub fn validate_media_type(media_type: &str) -> ValidationOutcome {
    if ACCEPTED_MEDIA_TYPES.contains(&media_type) {
        ValidationOutcome::Accepted
    } else {
        ValidationOutcome::Rejected(REJECTION_MESSAGE.to_string())
    }
}
