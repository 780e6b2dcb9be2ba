//! OpenAPI Schema Export Binary
//!
//! Writes the OpenAPI document without starting the server.
//!
//! Usage:
//!   cargo run -p translator_api --bin export-openapi > openapi.json
//!   cargo run -p translator_api --bin export-openapi -- openapi.json

use core_config::tracing::install_color_eyre;
use eyre::WrapErr;
use std::path::PathBuf;

fn main() -> eyre::Result<()> {
    install_color_eyre();

    let json = translator_api::openapi::openapi_json()
        .wrap_err("Failed to serialize OpenAPI document to JSON")?;

    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            std::fs::write(&path, &json)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Written to: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
