//! Record commands: flatten, lookup, merge and key normalization.

use genery::{Value, containers::normalize_keys};

use crate::cli::{FlattenArgs, LookupArgs, MergeArgs, NormalizeKeysArgs};
use crate::input::read_record;
use crate::output::{OutputFormat, print_record, print_value};

/// Run the `flatten` command
pub fn flatten(args: &FlattenArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut record = read_record(args.file.as_deref())?;
    record.flatten_with(&args.separator);
    print_record(&record, format)?;
    Ok(())
}

/// Run the `lookup` command
pub fn lookup(args: &LookupArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let record = read_record(args.file.as_deref())?;
    let default = Value::from(serde_json::from_str::<serde_json::Value>(&args.default)?);

    let found = record.lookup_with(args.paths.as_slice(), &default, &args.delimiter);
    if found == &default {
        tracing::info!(paths = ?args.paths, "No path resolved, using default");
    }
    print_value(found, format)?;
    Ok(())
}

/// Run the `merge` command
pub fn merge(args: &MergeArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut base = read_record(Some(args.base.as_path()))?;
    let overrides = read_record(Some(args.overrides.as_path()))?;

    base.update(&overrides);
    print_record(&base, format)?;
    Ok(())
}

/// Run the `normalize-keys` command
pub fn normalize(
    args: &NormalizeKeysArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = read_record(args.file.as_deref())?;
    let normalized = normalize_keys(&record, !args.keep_case, &args.separator);
    print_record(&normalized, format)?;
    Ok(())
}
