//! Text commands: transliteration and URL extraction.

use genery::text::{TextCleaner, UrlNormalizer, downcode};

use crate::cli::{DowncodeArgs, UrlsArgs};
use crate::input::read_text;
use crate::output::{OutputFormat, print_table};

/// Run the `downcode` command
pub fn run_downcode(
    args: &DowncodeArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let downcoded = downcode(&args.text);

    match format {
        OutputFormat::Human => println!("{downcoded}"),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "text": args.text,
                "downcoded": downcoded,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}

/// Run the `urls` command
pub fn urls(args: &UrlsArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_text(args.file.as_deref())?;
    let urls = TextCleaner::new(text).extract_urls(!args.all);
    let normalized: Vec<UrlNormalizer> = urls.iter().map(|url| UrlNormalizer::new(url)).collect();

    match format {
        OutputFormat::Human => {
            if normalized.is_empty() {
                println!("No URLs found.");
                return Ok(());
            }

            let rows: Vec<Vec<String>> = urls
                .iter()
                .zip(&normalized)
                .map(|(url, parts)| vec![url.clone(), parts.domain_name().to_string()])
                .collect();
            print_table(&["URL", "DOMAIN"], &rows);
        }
        OutputFormat::Json => {
            let entries: Vec<_> = urls
                .iter()
                .zip(&normalized)
                .map(|(url, parts)| {
                    serde_json::json!({
                        "url": url,
                        "valid": parts.is_valid(),
                        "domain": parts.domain(),
                        "domain_name": parts.domain_name(),
                        "ascii": parts.ascii(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&entries)?);
        }
    }

    Ok(())
}
