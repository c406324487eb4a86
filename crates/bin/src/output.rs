//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use genery::{Record, Value};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  ").trim_end());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(col_count)
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}

/// Rows of `KEY  VALUE` for every top-level entry of a record
pub fn record_rows(record: &Record) -> Vec<Vec<String>> {
    record
        .iter()
        .map(|(key, value)| vec![key.clone(), value.to_string()])
        .collect()
}

/// Print a record in the selected format.
///
/// Human output is a key/value table for flat records and indented JSON
/// otherwise.
pub fn print_record(record: &Record, format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human if record.values().all(|v| !v.is_record()) => {
            if record.is_empty() {
                println!("Empty record.");
            }
            print_table(&["KEY", "VALUE"], &record_rows(record));
        }
        OutputFormat::Human => println!("{}", serde_json::to_string_pretty(&record.to_json())?),
        OutputFormat::Json => println!("{}", serde_json::to_string(&record.to_json())?),
    }
    Ok(())
}

/// Print a single value in the selected format
pub fn print_value(value: &Value, format: OutputFormat) -> Result<(), serde_json::Error> {
    let json = genery::containers::prepare_to_serialize(value);
    match format {
        OutputFormat::Human => match value {
            Value::Record(_) | Value::List(_) => {
                println!("{}", serde_json::to_string_pretty(&json)?)
            }
            other => println!("{other}"),
        },
        OutputFormat::Json => println!("{}", serde_json::to_string(&json)?),
    }
    Ok(())
}
