//! Import command handler

use anyhow::Context;
use std::path::PathBuf;

use crate::config::Config;
use crate::state::SharedState;

pub async fn cmd_import(config: Config, path: Option<String>) -> anyhow::Result<()> {
    let path = PathBuf::from(path.unwrap_or_else(|| config.import.default_path.clone()));

    let state = SharedState::new(config).await?;

    let result = state.import_service.import_file(&path).await;

    // rows before a failing record are already committed
    state.employee_service.invalidate_listing().await;

    let summary = result.with_context(|| format!("Import of {} failed", path.display()))?;

    println!("Imported {}", path.display());
    println!("  employees created:   {}", summary.employees_created);
    println!("  departments created: {}", summary.departments_created);
    println!("  locations created:   {}", summary.locations_created);
    Ok(())
}
