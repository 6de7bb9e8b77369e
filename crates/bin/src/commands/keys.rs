//! Keys command - lists the keys of the document or of a nested object.

use dataops::{DataHolder, json::io};

use crate::cli::KeysArgs;
use crate::output::OutputFormat;

/// Run the keys command
pub fn run(args: &KeysArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let data = io::read(&args.file)?;
    let keys = match &args.key {
        Some(key) => data.keys_at(key)?,
        None => data.keys(),
    };

    match format {
        OutputFormat::Human => {
            for key in &keys {
                println!("{key}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&keys)?),
    }

    Ok(())
}
