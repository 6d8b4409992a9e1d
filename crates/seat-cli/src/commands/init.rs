use std::path::Path;

use anyhow::{Result, bail};
use seat_core::SeatConfig;

pub fn init(path: &str, rooms: &str) -> Result<()> {
    let output = Path::new(path).join("seat.toml");
    if output.exists() {
        bail!("{} already exists", output.display());
    }

    let config = SeatConfig::scaffold(rooms);
    std::fs::write(&output, config.to_toml_string()?)?;
    println!("✓ Generated {}", output.display());

    Ok(())
}
