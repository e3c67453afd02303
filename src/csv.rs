use crate::error::{Error, Result};
use crate::table::Table;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub fn read_csv(path: &Path) -> Result<Table> {
    let file = fs::read_to_string(path)?;
    let table = parse_csv(&file)?;
    info!(
        "read {} rows x {} columns from {}",
        table.rows.len(),
        table.columns.len(),
        path.display()
    );
    Ok(table)
}

/// Builds a table out of comma separated text. The first line is the header.
/// No quoting is understood; blank lines after the header are skipped.
pub fn parse_csv(text: &str) -> Result<Table> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line));

    let header = match lines.next() {
        Some(v) if !text.is_empty() => v,
        _ => return Err(Error::Format("No header in CSV".to_owned())),
    };
    if header.trim().is_empty() {
        return Err(Error::Format("Empty header in CSV".to_owned()));
    }

    let mut columns: Vec<String> = vec![];
    for h in split_fields(header) {
        if columns.contains(&h) {
            return Err(Error::Format(format!("Duplicate column in CSV header: {}", h)));
        }
        columns.push(h);
    }

    let mut table = Table::new(columns);
    for (i, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = split_fields(line);
        if row.len() > table.columns.len() {
            debug!(
                "line {}: {} values for {} columns, dropping the rest",
                i + 2,
                row.len(),
                table.columns.len()
            );
        }
        table.push_row(row.into_iter().map(Some).collect());
    }

    Ok(table)
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|x| x.trim().to_owned()).collect()
}
