//! TUI Widgets
//!
//! Drop zone and result panels.

mod intake;
mod result;

pub use intake::render_intake;
pub use result::{render_busy, render_error, render_summary, OverviewHeight};
