//! Application State
//!
//! Holds everything the terminal front-end draws: the intake surface, the
//! upload state and the connectivity status. Background work (health check,
//! upload) runs on spawned tasks and reports back through `AppEvent`s, which
//! the main loop applies in order.

use crate::client::{AnalysisService, HealthService, HttpServiceClient};
use crate::config::Config;
use crate::connectivity::{self, ConnectivityStatus};
use crate::intake::{parse_dropped_paths, Intake, IntakeEvent};
use crate::lifecycle::{self, Transition, UploadState};
use crate::models::FileHandle;
use crate::render::{self, UploadView};
use crate::tui::event::AppAction;
use crate::types::GENERIC_UPLOAD_FAILURE;
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tui_textarea::TextArea;

const PICKER_PLACEHOLDER: &str = "Type a path and press Enter, or drop a file here";

/// Current view/screen
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Main,
    Help,
}

/// Events from background tasks
#[derive(Debug)]
pub enum AppEvent {
    Connectivity(ConnectivityStatus),
    Upload(Transition),
}

/// Main application state
pub struct App {
    pub config: Config,

    // UI State
    pub view: View,
    pub should_quit: bool,
    pub tick: u64,
    pub picker: TextArea<'static>,
    pub scroll_offset: u16,
    pub max_scroll: u16,

    // Workflow State
    pub intake: Intake,
    pub upload_state: UploadState,
    pub connectivity: ConnectivityStatus,
    upload_in_flight: bool,
    mounted: bool,

    analysis: Arc<dyn AnalysisService>,
    health: Arc<dyn HealthService>,

    // Async communication
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    /// Create an application talking to the configured HTTP service
    pub fn new(config: Config) -> Self {
        let client = Arc::new(HttpServiceClient::new(&config));
        Self::with_services(config, client.clone(), client)
    }

    pub fn with_services(
        config: Config,
        analysis: Arc<dyn AnalysisService>,
        health: Arc<dyn HealthService>,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            config,
            view: View::Main,
            should_quit: false,
            tick: 0,
            picker: Self::empty_picker(),
            scroll_offset: 0,
            max_scroll: 0,
            intake: Intake::new(),
            upload_state: UploadState::Idle,
            connectivity: ConnectivityStatus::Checking,
            upload_in_flight: false,
            mounted: false,
            analysis,
            health,
            event_rx,
            event_tx,
        }
    }

    fn empty_picker() -> TextArea<'static> {
        let mut picker = TextArea::default();
        picker.set_cursor_line_style(ratatui::style::Style::default());
        picker.set_placeholder_text(PICKER_PLACEHOLDER);
        picker
    }

    /// Start the one-shot connectivity check. Later calls do nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let health = Arc::clone(&self.health);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let status = connectivity::check(&*health).await;
            tx.send(AppEvent::Connectivity(status)).ok();
        });
    }

    pub fn upload_in_flight(&self) -> bool {
        self.upload_in_flight
    }

    /// View model for the current state
    pub fn upload_view(&self) -> UploadView {
        render::project(&self.upload_state, &self.intake)
    }

    /// Drain events sent by background tasks
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Connectivity(status) => {
                self.connectivity = status;
            }
            AppEvent::Upload(transition) => self.apply_upload(transition),
        }
    }

    fn apply_upload(&mut self, transition: Transition) {
        if matches!(transition, Transition::Succeeded(_) | Transition::Failed(_)) {
            self.upload_in_flight = false;
            self.scroll_offset = 0;
        }
        self.upload_state = std::mem::take(&mut self.upload_state).apply(transition);
        self.intake.set_enabled(!self.upload_in_flight);
    }

    /// Handle a user action
    pub async fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit | AppAction::ForceQuit => {
                self.should_quit = true;
            }
            AppAction::ToggleHelp => {
                self.view = if self.view == View::Help {
                    View::Main
                } else {
                    View::Help
                };
            }
            AppAction::Escape => {
                if self.view == View::Help {
                    self.view = View::Main;
                } else {
                    self.picker = Self::empty_picker();
                }
            }
            AppAction::Submit => {
                if self.view == View::Help {
                    self.view = View::Main;
                } else {
                    self.submit_picker().await;
                }
            }
            AppAction::Paste(text) => {
                if self.view == View::Main {
                    let paths = parse_dropped_paths(&text);
                    self.select(IntakeEvent::Drop(paths)).await;
                }
            }
            AppAction::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            AppAction::ScrollDown => {
                if self.scroll_offset < self.max_scroll {
                    self.scroll_offset += 1;
                }
            }
            AppAction::Input(key) => {
                if self.view == View::Help {
                    self.view = View::Main;
                } else if self.intake.is_enabled() {
                    self.picker.input(key);
                }
            }
            AppAction::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
        }
    }

    async fn submit_picker(&mut self) {
        let text = self.picker.lines().join(" ");
        let paths = parse_dropped_paths(&text);
        if paths.is_empty() {
            return;
        }
        if self.intake.is_enabled() {
            self.picker = Self::empty_picker();
        }
        self.select(IntakeEvent::PickerChange(paths)).await;
    }

    /// Route a drop or picker selection through the intake surface
    async fn select(&mut self, event: IntakeEvent<PathBuf>) {
        let response = self.intake.handle(event);
        let Some(path) = response.selected else {
            return;
        };

        let label = path.display().to_string();
        self.spawn_upload(label, async move {
            FileHandle::from_path(&path).await.map_err(|e| {
                warn!("Could not read {}: {}", path.display(), e);
                format!("Could not read {}: {}", path.display(), e.user_message())
            })
        });
    }

    /// Spawn the lifecycle for one file. Ignored while another upload runs.
    pub fn start_upload(&mut self, file: FileHandle) {
        let label = file.name().to_string();
        self.spawn_upload(label, async move { Ok(file) });
    }

    /// Load and upload on a background task so the draw loop never waits on
    /// disk or network. A load error ends the upload as `Failed`.
    fn spawn_upload<L>(&mut self, label: String, load: L)
    where
        L: Future<Output = Result<FileHandle, String>> + Send + 'static,
    {
        if self.upload_in_flight {
            warn!("Upload already in progress, ignoring {}", label);
            return;
        }
        info!("Submitting {}", label);
        self.upload_in_flight = true;
        self.intake.set_enabled(false);

        let service = Arc::clone(&self.analysis);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let emit_tx = tx.clone();
            let run = async move {
                let file = match load.await {
                    Ok(file) => file,
                    Err(message) => {
                        emit_tx.send(AppEvent::Upload(Transition::Failed(message))).ok();
                        return;
                    }
                };
                let emit = |transition| {
                    if emit_tx.send(AppEvent::Upload(transition)).is_err() {
                        error!("Dropped upload transition, event loop gone");
                    }
                };
                let _ = lifecycle::drive(&*service, file, emit).await;
            };

            if AssertUnwindSafe(run).catch_unwind().await.is_err() {
                error!("Upload task panicked");
                tx.send(AppEvent::Upload(Transition::Failed(
                    GENERIC_UPLOAD_FAILURE.to_string(),
                )))
                .ok();
            }
        });
    }

    /// Keep the overview scroll inside its content
    pub fn update_scroll_bounds(&mut self, content_height: u16, viewport_height: u16) {
        self.max_scroll = content_height.saturating_sub(viewport_height);
        if self.scroll_offset > self.max_scroll {
            self.scroll_offset = self.max_scroll;
        }
    }
}
