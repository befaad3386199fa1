use std::path::Path;

use anyhow::{bail, Result as AnyhowResult};

use super::report::parse_line;

/// Reads a report back and prints it as a box-drawing table. Fails on a
/// missing or empty file so callers can surface that as a batch problem.
pub fn display_csv_as_table(
    path: &Path,
    max_rows: usize,
    max_col_width: usize,
) -> AnyhowResult<()> {
    if !path.exists() {
        bail!("CSV file not found: {}", path.display());
    }
    let content = std::fs::read_to_string(path)?;
    let rows: Vec<Vec<String>> = content
        .lines()
        .filter(|l| !l.is_empty())
        .map(parse_line)
        .collect();
    if rows.is_empty() {
        bail!("CSV file is empty: {}", path.display());
    }

    print!("{}", render_table(&rows, max_rows, max_col_width));
    Ok(())
}

/// Renders parsed CSV rows (header first) into a bordered table string,
/// truncating long cells and capping the body at `max_rows` rows.
pub fn render_table(rows: &[Vec<String>], max_rows: usize, max_col_width: usize) -> String {
    let header = &rows[0];
    let body = &rows[1..];
    let shown = body.len().min(max_rows);

    let columns = header.len();
    let mut widths: Vec<usize> = header.iter().map(|h| display_len(h, max_col_width)).collect();
    for row in body.iter().take(shown) {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(display_len(cell, max_col_width));
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Batch search results (showing {}/{} rows)\n",
        shown,
        body.len()
    ));
    out.push_str(&border(&widths, '┌', '┬', '┐'));
    out.push_str(&data_row(header, &widths, max_col_width));
    out.push_str(&border(&widths, '├', '┼', '┤'));
    for row in body.iter().take(shown) {
        out.push_str(&data_row(row, &widths, max_col_width));
    }
    out.push_str(&border(&widths, '└', '┴', '┘'));
    if body.len() > shown {
        out.push_str(&format!("... and {} more rows\n", body.len() - shown));
    }
    out
}

fn display_len(cell: &str, max_col_width: usize) -> usize {
    cell.chars().count().min(max_col_width)
}

fn truncate_cell(cell: &str, max_col_width: usize) -> String {
    let len = cell.chars().count();
    if len <= max_col_width {
        return cell.to_string();
    }
    let keep = max_col_width.saturating_sub(3);
    let mut truncated: String = cell.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(mid);
        }
        line.push_str(&"─".repeat(width + 2));
    }
    line.push(right);
    line.push('\n');
    line
}

fn data_row(row: &[String], widths: &[usize], max_col_width: usize) -> String {
    let mut line = String::new();
    line.push('│');
    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        let cell = truncate_cell(cell, max_col_width);
        let padding = width.saturating_sub(cell.chars().count());
        line.push(' ');
        line.push_str(&cell);
        line.push_str(&" ".repeat(padding + 1));
        line.push('│');
    }
    line.push('\n');
    line
}
