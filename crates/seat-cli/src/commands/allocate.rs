use std::path::Path;

use anyhow::{Context, Result};
use seat_core::{RoomCatalog, SeatConfig, Strategy};
use seatgrid_placement::{RunReport, config_to_request, format_report, request_for_strategy};
use tracing::info;

/// Read seat.toml and the room catalog it points at.
pub fn load(config_path: &str) -> Result<(SeatConfig, RoomCatalog)> {
    let path = Path::new(config_path);
    let config = SeatConfig::from_file(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let catalog = config
        .load_catalog(base_dir)
        .context("failed to load room catalog")?;

    info!(
        groups = config.groups.len(),
        rooms = catalog.room_count(),
        capacity = catalog.total_capacity(),
        "loaded configuration"
    );
    Ok((config, catalog))
}

pub fn allocate(
    config_path: &str,
    strategy: Option<&str>,
    min_chunk: Option<i64>,
    format: &str,
) -> Result<()> {
    let (mut config, catalog) = load(config_path)?;
    if min_chunk.is_some() {
        config.allocation.min_chunk = min_chunk;
    }

    let req = match strategy {
        Some(name) => {
            let strategy: Strategy = name.parse().map_err(anyhow::Error::msg)?;
            request_for_strategy(&config, strategy)
        }
        None => config_to_request(&config),
    };

    let report = RunReport::run(&config.groups, &catalog, &req)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!("{}", format_report(&report));
        }
    }

    Ok(())
}
