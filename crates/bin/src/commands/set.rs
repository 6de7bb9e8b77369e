//! Set command - stores a value at a key and rewrites the document.

use dataops::{
    DataHolder,
    json::{JsonElement, WriterOptions, io},
};
use serde_json::Value;

use super::read_or_default;
use crate::cli::SetArgs;
use crate::output::OutputFormat;

/// Interprets command-line text as JSON, falling back to a plain string.
fn parse_value(text: &str) -> JsonElement {
    serde_json::from_str(text).unwrap_or_else(|_| JsonElement::String(text.to_string()))
}

/// Run the set command
pub fn run(
    args: &SetArgs,
    options: &WriterOptions,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_or_default(&args.file)?;
    let value = parse_value(&args.value);
    let previous = data.put_value(&args.key, value)?;
    io::write(&data, &args.file, options)?;
    tracing::debug!(key = %args.key, replaced = previous.is_some(), "Stored value");

    match format {
        OutputFormat::Human => match &previous {
            Some(old) => println!("Set {} (was {old})", args.key),
            None => println!("Set {}", args.key),
        },
        OutputFormat::Json => {
            let value = serde_json::json!({
                "key": args.key,
                "previous": previous.as_ref().map(Value::from),
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
