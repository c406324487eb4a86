//! Reading command input from files or stdin.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use genery::Record;

/// Read the whole input as text, from `path` or stdin when `None`
pub fn read_text(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Read a JSON object as a [`Record`]
pub fn read_record(path: Option<&Path>) -> genery::Result<Record> {
    let text = read_text(path)?;
    let record = Record::from_json_str(&text)?;
    tracing::debug!(keys = record.len(), "Read input record");
    Ok(record)
}
