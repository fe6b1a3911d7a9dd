//! Report rendering (bordered table or JSON) and output to stdout or a file.
mod format;
mod json;
mod table;
mod writer;


pub use json::render_json;
pub use table::render_table;
pub use writer::write_report;

use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::probe::RunReport;

/// Renders `report` in the requested format. An empty report renders as an
/// empty string in every format.
///
/// # Errors
///
/// Returns an error when the report cannot be formatted or serialized.
pub fn render(report: &RunReport, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Table => render_table(report),
        OutputFormat::Json => render_json(report),
    }
}
