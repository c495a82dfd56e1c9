//! Result Renderer
//!
//! Pure projection of `UploadState` into a view model. The terminal UI and
//! the one-shot CLI both draw from `UploadView`, so neither reads the report
//! directly.

pub mod text;

use crate::intake::Intake;
use crate::lifecycle::UploadState;
use crate::models::AnalysisReport;

pub const BUSY_MESSAGE: &str = "Processing your file...";
pub const SUCCESS_HEADING: &str = "Analysis Complete!";

#[derive(Debug, Clone, PartialEq)]
pub struct UploadView {
    pub intake: IntakeView,
    pub panel: Panel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeView {
    pub enabled: bool,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    None,
    Busy(&'static str),
    Error(String),
    Summary(SummaryView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub heading: &'static str,
    pub filename: String,
    /// Row count with thousands grouping
    pub rows: String,
    pub columns: String,
    pub missing_values: String,
    pub column_overview: Vec<ColumnEntry>,
    pub sample_rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnEntry {
    pub name: String,
    /// Empty when the report has no type for this column
    pub data_type: String,
}

pub fn project(state: &UploadState, intake: &Intake) -> UploadView {
    let uploading = state.is_uploading();

    let panel = match state {
        UploadState::Idle => Panel::None,
        UploadState::Uploading => Panel::Busy(BUSY_MESSAGE),
        UploadState::Failed(message) => Panel::Error(message.clone()),
        UploadState::Succeeded(report) => Panel::Summary(summarize(report)),
    };

    UploadView {
        intake: IntakeView {
            enabled: intake.is_enabled() && !uploading,
            highlighted: intake.drag_active(),
        },
        panel,
    }
}

pub fn summarize(report: &AnalysisReport) -> SummaryView {
    let analysis = &report.analysis;

    let column_overview = analysis
        .column_names
        .iter()
        .map(|name| ColumnEntry {
            name: name.clone(),
            data_type: analysis.data_type_of(name).unwrap_or_default().to_string(),
        })
        .collect();

    SummaryView {
        heading: SUCCESS_HEADING,
        filename: report.filename.clone(),
        rows: group_thousands(analysis.rows),
        columns: analysis.columns.to_string(),
        missing_values: analysis.total_missing().to_string(),
        column_overview,
        sample_rows: analysis.sample_data.len(),
    }
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisSummary;
    use std::collections::BTreeMap;

    fn scenario_a() -> AnalysisReport {
        AnalysisReport {
            upload_id: 1,
            filename: "data.csv".to_string(),
            message: "ok".to_string(),
            status: "success".to_string(),
            analysis: AnalysisSummary {
                rows: 100,
                columns: 3,
                column_names: vec!["a".into(), "b".into(), "c".into()],
                data_types: BTreeMap::from([
                    ("a".into(), "int".into()),
                    ("b".into(), "float".into()),
                    ("c".into(), "string".into()),
                ]),
                sample_data: vec![],
                missing_values: BTreeMap::from([("a".into(), 0), ("b".into(), 2), ("c".into(), 0)]),
                numeric_summary: BTreeMap::new(),
            },
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_summary_figures() {
        let view = summarize(&scenario_a());
        assert_eq!(view.rows, "100");
        assert_eq!(view.columns, "3");
        assert_eq!(view.missing_values, "2");
        assert_eq!(view.heading, "Analysis Complete!");
        assert_eq!(
            view.column_overview,
            vec![
                ColumnEntry { name: "a".into(), data_type: "int".into() },
                ColumnEntry { name: "b".into(), data_type: "float".into() },
                ColumnEntry { name: "c".into(), data_type: "string".into() },
            ]
        );
    }

    #[test]
    fn test_only_rows_are_grouped() {
        let mut report = scenario_a();
        report.analysis.rows = 2_500_000;
        report.analysis.columns = 1200;
        report.analysis.missing_values = BTreeMap::from([("a".into(), 1500)]);

        let view = summarize(&report);
        assert_eq!(view.rows, "2,500,000");
        assert_eq!(view.columns, "1200");
        assert_eq!(view.missing_values, "1500");
    }

    #[test]
    fn test_missing_values_empty_mapping_shows_zero() {
        let mut report = scenario_a();
        report.analysis.missing_values.clear();
        assert_eq!(summarize(&report).missing_values, "0");
    }

    #[test]
    fn test_huge_missing_counts_do_not_panic() {
        let mut report = scenario_a();
        report.analysis.missing_values = BTreeMap::from([("a".into(), u64::MAX), ("b".into(), 1)]);
        assert_eq!(summarize(&report).missing_values, u64::MAX.to_string());
    }

    #[test]
    fn test_unknown_column_type_renders_empty() {
        let mut report = scenario_a();
        report.analysis.data_types.remove("b");
        let view = summarize(&report);
        assert_eq!(view.column_overview[1].data_type, "");
    }

    #[test]
    fn test_project_each_state() {
        let intake = Intake::new();

        let view = project(&UploadState::Idle, &intake);
        assert_eq!(view.panel, Panel::None);
        assert!(view.intake.enabled);

        let view = project(&UploadState::Uploading, &intake);
        assert_eq!(view.panel, Panel::Busy("Processing your file..."));
        assert!(!view.intake.enabled);

        let view = project(&UploadState::Failed("disk full".into()), &intake);
        assert_eq!(view.panel, Panel::Error("disk full".into()));
        assert!(view.intake.enabled);

        let view = project(&UploadState::Succeeded(scenario_a()), &intake);
        assert!(matches!(view.panel, Panel::Summary(ref s) if s.rows == "100"));
    }

    #[test]
    fn test_project_reflects_drag_highlight() {
        let mut intake = Intake::new();
        intake.handle(crate::intake::IntakeEvent::<crate::models::FileHandle>::DragEnter);
        assert!(project(&UploadState::Idle, &intake).intake.highlighted);
    }
}
