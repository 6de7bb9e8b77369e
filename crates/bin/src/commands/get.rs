//! Get command - prints the value stored at a key.

use dataops::{DataHolder, json::io};
use serde_json::Value;

use crate::cli::KeyArgs;
use crate::output::OutputFormat;

/// Run the get command
pub fn run(args: &KeyArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let data = io::read(&args.file)?;
    let Some(value) = data.get(&args.key)? else {
        return Err(format!("No value at '{}' in {}", args.key, args.file.display()).into());
    };

    match format {
        OutputFormat::Human => match value.as_str() {
            Some(text) => println!("{text}"),
            None => println!("{value}"),
        },
        OutputFormat::Json => {
            let value = serde_json::json!({
                "key": args.key,
                "value": Value::from(&value),
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
