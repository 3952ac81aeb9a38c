// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use std::path::PathBuf;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = PathBuf::from(publishing_core::presentation::http::openapi::snapshot_path());
    publishing_core::presentation::http::openapi::write_openapi_snapshot(&output_path)?;
    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}
