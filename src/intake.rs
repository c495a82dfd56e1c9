//! Upload Intake
//!
//! Folds the two input surfaces, dropping files and picking one, into a
//! single "file selected" signal carrying exactly one `FileHandle`.
//!
//! In the terminal a drop arrives as a bracketed paste of file paths;
//! `parse_dropped_paths` turns that text into candidate paths.

use crate::models::FileHandle;
use percent_encoding::percent_decode_str;
use std::path::PathBuf;
use tracing::debug;

/// Extensions advertised by the file picker.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = [".csv", ".xlsx", ".xls"];

/// Raw input events reaching the intake surface.
///
/// Generic over what a "file" is so the terminal front-end can pick a path
/// before reading anything from disk.
#[derive(Debug, Clone)]
pub enum IntakeEvent<T = FileHandle> {
    DragEnter,
    DragOver,
    DragLeave,
    Drop(Vec<T>),
    PickerChange(Vec<T>),
}

impl<T> IntakeEvent<T> {
    fn is_drag(&self) -> bool {
        !matches!(self, IntakeEvent::PickerChange(_))
    }
}

/// What the intake surface did with one event
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeResponse<T = FileHandle> {
    /// The host must suppress its default handling (navigation on drop).
    pub prevent_default: bool,
    /// The file to submit, if this event selected one.
    pub selected: Option<T>,
}

#[derive(Debug, Clone)]
pub struct Intake {
    drag_active: bool,
    enabled: bool,
}

impl Default for Intake {
    fn default() -> Self {
        Self::new()
    }
}

impl Intake {
    pub fn new() -> Self {
        Self {
            drag_active: false,
            enabled: true,
        }
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled while an upload is in flight
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn handle<T>(&mut self, event: IntakeEvent<T>) -> IntakeResponse<T> {
        let prevent_default = event.is_drag();

        let selected = match event {
            IntakeEvent::DragEnter | IntakeEvent::DragOver => {
                self.drag_active = true;
                None
            }
            IntakeEvent::DragLeave => {
                self.drag_active = false;
                None
            }
            IntakeEvent::Drop(files) => {
                self.drag_active = false;
                self.take_first(files)
            }
            IntakeEvent::PickerChange(files) => self.take_first(files),
        };

        IntakeResponse {
            prevent_default,
            selected,
        }
    }

    fn take_first<T>(&self, files: Vec<T>) -> Option<T> {
        if !self.enabled {
            debug!("Intake disabled, ignoring {} file(s)", files.len());
            return None;
        }
        if files.len() > 1 {
            debug!("Ignoring {} extra file(s), single-file uploads only", files.len() - 1);
        }
        files.into_iter().next()
    }
}

/// Split pasted text into file paths.
///
/// Terminals paste dropped files as quoted or backslash-escaped paths,
/// separated by spaces or newlines, sometimes as `file://` URIs.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = text.trim().chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') if current.is_empty() => quote = Some(c),
            (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            (None, c) if c.is_whitespace() => {
                if !current.is_empty() {
                    paths.push(to_path(&current));
                    current.clear();
                }
            }
            (None, c) => current.push(c),
        }
    }
    if !current.is_empty() {
        paths.push(to_path(&current));
    }

    paths
}

/// Plain paths are taken literally; only `file://` URIs are percent-decoded.
fn to_path(raw: &str) -> PathBuf {
    match raw.strip_prefix("file://") {
        Some(uri_path) => PathBuf::from(percent_decode_str(uri_path).decode_utf8_lossy().into_owned()),
        None => PathBuf::from(raw),
    }
}
