//! Upload Lifecycle Controller
//!
//! Owns the single `UploadState` and drives it through
//!
//! ```text
//! Idle ──submit──▶ Uploading ──▶ Succeeded(report)
//!   ▲                  │
//!   │                  └───────▶ Failed(message)
//!   └──── Reset (next submit) ◀──────┘
//! ```
//!
//! Transitions are plain values applied by `UploadState::apply`, so the state
//! machine can be exercised without a service or a terminal. `drive` is the
//! async sequence behind one submission; `UploadController` wires it to an
//! owned state and a service.

use crate::client::AnalysisService;
use crate::models::{AnalysisReport, FileHandle};
use crate::types::{AppError, AppResult};
use crate::validator::{self, ValidationOutcome};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
    Succeeded(AnalysisReport),
    Failed(String),
}

impl UploadState {
    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading)
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            UploadState::Succeeded(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UploadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Apply one transition. Every transition replaces the whole value, so a
    /// previous report or error never survives into the next state.
    pub fn apply(self, transition: Transition) -> UploadState {
        match transition {
            Transition::Reset => UploadState::Idle,
            Transition::Started => UploadState::Uploading,
            Transition::Succeeded(report) => UploadState::Succeeded(report),
            Transition::Failed(message) => UploadState::Failed(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Clear any previous result or error
    Reset,
    /// Request is about to be sent
    Started,
    Succeeded(AnalysisReport),
    Failed(String),
}

/// Run one submission against `service`, reporting each transition to `emit`
/// in order.
///
/// The sequence is always `Reset`, then either `Failed` (validation) or
/// `Started` followed by exactly one of `Succeeded` / `Failed`. The returned
/// value mirrors the terminal transition.
pub async fn drive<S, F>(service: &S, file: FileHandle, mut emit: F) -> AppResult<AnalysisReport>
where
    S: AnalysisService + ?Sized,
    F: FnMut(Transition),
{
    emit(Transition::Reset);

    if let ValidationOutcome::Rejected(reason) = validator::validate(&file) {
        info!(
            "Rejected {} (declared type {:?}) before upload",
            file.name(),
            file.media_type()
        );
        emit(Transition::Failed(reason.clone()));
        return Err(AppError::Validation(reason));
    }

    emit(Transition::Started);
    info!("Uploading {} ({} bytes)", file.name(), file.size());

    let outcome = service.upload(&file).await;
    drop(file);

    match outcome {
        Ok(report) => {
            let issues = report.check_consistency();
            if !issues.is_empty() {
                warn!("Report {} is inconsistent: {}", report.upload_id, issues.join("; "));
            }
            info!(
                "Upload {} analysed: {} rows, {} columns",
                report.upload_id, report.analysis.rows, report.analysis.columns
            );
            emit(Transition::Succeeded(report.clone()));
            Ok(report)
        }
        Err(err) => {
            warn!("Upload failed: {}", err);
            emit(Transition::Failed(err.user_message()));
            Err(err)
        }
    }
}

/// Single source of truth for upload progress, result and error.
///
/// `submit` takes `&mut self`, so one controller can never have two
/// submissions in flight.
pub struct UploadController<S> {
    service: S,
    state: UploadState,
}

impl<S: AnalysisService> UploadController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: UploadState::Idle,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Submit one file and wait for the terminal state.
    pub async fn submit(&mut self, file: FileHandle) -> AppResult<&AnalysisReport> {
        let Self { service, state } = self;
        drive(&*service, file, |transition| {
            *state = std::mem::take(state).apply(transition);
        })
        .await?;

        self.state
            .report()
            .ok_or_else(|| AppError::MalformedResponse("report missing after success".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TRANSPORT_FAILURE_MESSAGE;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn report(rows: u64) -> AnalysisReport {
        AnalysisReport {
            upload_id: 1,
            filename: "data.csv".to_string(),
            message: "ok".to_string(),
            status: "success".to_string(),
            analysis: crate::models::AnalysisSummary {
                rows,
                columns: 1,
                column_names: vec!["a".to_string()],
                data_types: BTreeMap::from([("a".to_string(), "int".to_string())]),
                sample_data: vec![],
                missing_values: BTreeMap::from([("a".to_string(), 0)]),
                numeric_summary: BTreeMap::new(),
            },
        }
    }

    /// Replays queued outcomes and counts requests
    struct ScriptedService {
        outcomes: Mutex<Vec<AppResult<AnalysisReport>>>,
        calls: AtomicUsize,
    }

    impl ScriptedService {
        fn new(mut outcomes: Vec<AppResult<AnalysisReport>>) -> Self {
            outcomes.reverse();
            Self {
                outcomes: Mutex::new(outcomes),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AnalysisService for ScriptedService {
        async fn upload(&self, _file: &FileHandle) -> AppResult<AnalysisReport> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcomes
                .lock()
                .unwrap()
                .pop()
                .expect("no scripted outcome left")
        }
    }

    fn csv() -> FileHandle {
        FileHandle::new("data.csv", "text/csv", b"a\n1\n".to_vec())
    }

    #[test]
    fn test_apply_replaces_whole_state() {
        let state = UploadState::Succeeded(report(5));
        let state = state.apply(Transition::Started);
        assert_eq!(state, UploadState::Uploading);
        assert!(state.report().is_none());
        assert!(state.error().is_none());

        let state = UploadState::Failed("boom".to_string()).apply(Transition::Reset);
        assert_eq!(state, UploadState::Idle);
    }

    #[test]
    fn test_rejected_file_never_reaches_service() {
        let service = ScriptedService::new(vec![]);
        let mut transitions = Vec::new();

        let pdf = FileHandle::new("paper.pdf", "application/pdf", b"%PDF".to_vec());
        let result = tokio_test::block_on(drive(&service, pdf, |t| transitions.push(t)));

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(service.calls(), 0);
        assert_eq!(
            transitions,
            vec![
                Transition::Reset,
                Transition::Failed("Only CSV and Excel files are allowed.".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_success_sequence() {
        let service = ScriptedService::new(vec![Ok(report(100))]);
        let mut transitions = Vec::new();

        let result = drive(&service, csv(), |t| transitions.push(t)).await;

        assert_eq!(result.unwrap().analysis.rows, 100);
        assert_eq!(
            transitions,
            vec![
                Transition::Reset,
                Transition::Started,
                Transition::Succeeded(report(100))
            ]
        );
    }

    #[tokio::test]
    async fn test_every_upload_ends_in_one_terminal_state() {
        let service = ScriptedService::new(vec![
            Ok(report(1)),
            Err(AppError::Service("disk full".to_string())),
            Err(AppError::Transport("connection refused".to_string())),
            Err(AppError::MalformedResponse("missing field".to_string())),
        ]);

        for _ in 0..4 {
            let mut transitions = Vec::new();
            let _ = drive(&service, csv(), |t| transitions.push(t)).await;

            let started = transitions.iter().position(|t| *t == Transition::Started).unwrap();
            let after = &transitions[started + 1..];
            assert_eq!(after.len(), 1, "got {:?}", transitions);
            assert!(matches!(
                after[0],
                Transition::Succeeded(_) | Transition::Failed(_)
            ));
        }
        assert_eq!(service.calls(), 4);
    }

    #[tokio::test]
    async fn test_controller_clears_previous_result() {
        let service = ScriptedService::new(vec![
            Ok(report(100)),
            Err(AppError::Transport("offline".to_string())),
            Ok(report(7)),
        ]);
        let mut controller = UploadController::new(service);
        assert_eq!(*controller.state(), UploadState::Idle);

        let rows = controller.submit(csv()).await.unwrap().analysis.rows;
        assert_eq!(rows, 100);

        assert!(controller.submit(csv()).await.is_err());
        assert_eq!(
            *controller.state(),
            UploadState::Failed(TRANSPORT_FAILURE_MESSAGE.to_string())
        );
        assert!(controller.state().report().is_none());

        let rows = controller.submit(csv()).await.unwrap().analysis.rows;
        assert_eq!(rows, 7);
        assert!(controller.state().error().is_none());
        assert_eq!(controller.service().calls(), 3);
    }

    #[tokio::test]
    async fn test_controller_validation_failure_replaces_report() {
        let service = ScriptedService::new(vec![Ok(report(3))]);
        let mut controller = UploadController::new(service);
        controller.submit(csv()).await.unwrap();

        let xls = FileHandle::new("old.xls", "application/vnd.ms-excel", Vec::new());
        let err = controller.submit(xls).await.unwrap_err();

        assert_eq!(err.user_message(), "Only CSV and Excel files are allowed.");
        assert_eq!(
            *controller.state(),
            UploadState::Failed("Only CSV and Excel files are allowed.".to_string())
        );
        assert_eq!(controller.service().calls(), 1);
    }
}
