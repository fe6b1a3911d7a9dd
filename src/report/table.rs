use std::fmt::Write as _;

use super::format::{format_seconds, write_line};
use crate::error::{AppError, AppResult, ReportError};
use crate::probe::{HostStats, RunReport};

const COLUMN_COUNT: usize = 7;
const HEADERS: [&str; COLUMN_COUNT] = ["Host", "Success", "Failed", "Errors", "Min", "Max", "Avg"];
/// Extra width added to the widest cell of every column.
const COLUMN_PADDING: usize = 2;

type Row = [String; COLUMN_COUNT];

/// Renders the report as a bordered table:
///
/// ```text
/// +-----------------------+-----------+----------+----------+---------+---------+---------+
/// |         Host          |  Success  |  Failed  |  Errors  |   Min   |   Max   |   Avg   |
/// +-----------------------+-----------+----------+----------+---------+---------+---------+
/// |  https://example.com  |     2     |    0     |    0     |  0.101  |  0.134  |  0.118  |
/// +-----------------------+-----------+----------+----------+---------+---------+---------+
/// ```
///
/// Cells are centered. Missing latencies (hosts where every probe errored)
/// are blank. An empty report renders as an empty string.
///
/// # Errors
///
/// Returns an error if writing into the output buffer fails.
pub fn render_table(report: &RunReport) -> AppResult<String> {
    if report.is_empty() {
        return Ok(String::new());
    }

    let rows: Vec<Row> = report.hosts().iter().map(row_cells).collect();
    let widths = column_widths(&rows);
    let border = border_line(&widths);

    let mut output = String::new();
    write_line(&mut output, &border)?;
    write_line(&mut output, &row_line(&HEADERS, &widths)?)?;
    write_line(&mut output, &border)?;
    for row in &rows {
        write_line(&mut output, &row_line(row, &widths)?)?;
        write_line(&mut output, &border)?;
    }
    Ok(output)
}

fn row_cells(stats: &HostStats) -> Row {
    [
        stats.host.clone(),
        stats.success.to_string(),
        stats.failed.to_string(),
        stats.errors.to_string(),
        format_seconds(stats.min),
        format_seconds(stats.max),
        format_seconds(stats.avg),
    ]
}

fn column_widths(rows: &[Row]) -> [usize; COLUMN_COUNT] {
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths.map(|width| width.saturating_add(COLUMN_PADDING))
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width.saturating_add(2)));
        line.push('+');
    }
    line
}

fn row_line<S>(cells: &[S], widths: &[usize]) -> AppResult<String>
where
    S: AsRef<str>,
{
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        write!(line, " {:^width$} |", cell.as_ref(), width = *width)
            .map_err(|err| AppError::report(ReportError::WriteLine { source: err }))?;
    }
    Ok(line)
}
