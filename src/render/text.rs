// Plain-text rendering of an `UploadView` for the one-shot CLI

use super::{Panel, SummaryView, UploadView};
use std::io::{self, Write};

pub fn write_view<W: Write>(out: &mut W, view: &UploadView) -> io::Result<()> {
    match &view.panel {
        Panel::None => Ok(()),
        Panel::Busy(message) => writeln!(out, "{}", message),
        Panel::Error(message) => writeln!(out, "Error: {}", message),
        Panel::Summary(summary) => write_summary(out, summary),
    }
}

fn write_summary<W: Write>(out: &mut W, summary: &SummaryView) -> io::Result<()> {
    writeln!(out, "{} ({})", summary.heading, summary.filename)?;
    writeln!(out)?;
    writeln!(out, "  Rows            {}", summary.rows)?;
    writeln!(out, "  Columns         {}", summary.columns)?;
    writeln!(out, "  Missing Values  {}", summary.missing_values)?;
    writeln!(out)?;
    writeln!(out, "Column Overview")?;

    let width = summary
        .column_overview
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);
    for column in &summary.column_overview {
        writeln!(out, "  {:<width$}  {}", column.name, column.data_type, width = width)?;
    }

    if summary.sample_rows > 0 {
        writeln!(out)?;
        writeln!(out, "{} sample row(s) returned", summary.sample_rows)?;
    }
    Ok(())
}
