use anyhow::Result;
use seat_core::Strategy;
use seatgrid_placement::{RunReport, format_comparison, request_for_strategy};

use super::allocate::load;

pub fn compare(config_path: &str, min_chunk: Option<i64>) -> Result<()> {
    let (mut config, catalog) = load(config_path)?;
    if min_chunk.is_some() {
        config.allocation.min_chunk = min_chunk;
    }

    let reports = Strategy::ALL
        .iter()
        .map(|&strategy| {
            let req = request_for_strategy(&config, strategy);
            RunReport::run(&config.groups, &catalog, &req)
        })
        .collect::<Result<Vec<_>, _>>()?;

    println!("{}", format_comparison(&reports));
    Ok(())
}
