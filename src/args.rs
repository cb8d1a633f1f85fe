use clap::Parser;
use serde_json::Value;
use std::{fs, path::PathBuf};

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// SQLite filename holding the blob store.
    #[arg(
        short = 'n',
        long,
        value_name = "DATABASE_NAME",
        default_value = "yardage-tracker.db"
    )]
    pub db_name: String,

    /// Address:port the web server binds.
    #[arg(short = 'b', long, value_name = "BIND_ADDR", default_value = "0.0.0.0:8081")]
    pub bind: String,

    /// Optional clubs JSON to load into the store on startup when no
    /// collection has been saved yet.
    #[arg(
        long,
        value_name = "CLUBS_JSON",
        value_parser = check_readable_file_and_json
    )]
    pub db_populate_json: Option<Value>,
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("Could not read '{file}': {e}"))?;
    let json: Value =
        serde_json::from_str(&contents).map_err(|e| format!("'{file}' is not valid json: {e}"))?;
    if !json.is_array() {
        return Err(format!("'{file}' must be a json array of clubs."));
    }
    Ok(json)
}
