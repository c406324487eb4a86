//! Duration formatting command.

use genery::datetime::human_readable_time;

use crate::cli::HumanTimeArgs;
use crate::output::OutputFormat;

/// Run the `human-time` command
pub fn human_time(
    args: &HumanTimeArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let readable = human_readable_time(args.ms, args.round_to)?;

    match format {
        OutputFormat::Human => println!("{readable}"),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "ms": args.ms,
                "readable": readable,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
