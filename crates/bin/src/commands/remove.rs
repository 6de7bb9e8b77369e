//! Remove command - deletes a key and rewrites the document.

use dataops::{
    DataHolder,
    json::{WriterOptions, io},
};
use serde_json::Value;

use crate::cli::KeyArgs;
use crate::output::OutputFormat;

/// Run the remove command
pub fn run(
    args: &KeyArgs,
    options: &WriterOptions,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = io::read(&args.file)?;
    let present = data.contains(&args.key)?;
    let removed = data.remove(&args.key)?;
    if present {
        io::write(&data, &args.file, options)?;
    }

    match format {
        OutputFormat::Human => match (&removed, present) {
            (Some(old), _) => println!("Removed {} (was {old})", args.key),
            (None, true) => println!("Removed {}", args.key),
            (None, false) => println!("No value at {}", args.key),
        },
        OutputFormat::Json => {
            let value = serde_json::json!({
                "key": args.key,
                "removed": present,
                "previous": removed.as_ref().map(Value::from),
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
