use std::path::Path;

use anyhow::Result;
use seat_core::RoomCatalog;

pub fn catalog(path: &str, format: &str) -> Result<()> {
    let catalog = RoomCatalog::load(Path::new(path))?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        _ => {
            println!("{}", summarize(&catalog));
        }
    }

    Ok(())
}

fn summarize(catalog: &RoomCatalog) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} blocks, {} rooms, {} seats\n\n",
        catalog.blocks.len(),
        catalog.room_count(),
        catalog.total_capacity()
    ));

    for block in &catalog.blocks {
        out.push_str(&format!("{} ({} seats)\n", block.name, block.capacity()));
        for room in &block.rooms {
            let rows = if room.layout.is_empty() {
                String::new()
            } else {
                format!("  rows: {:?}", room.layout)
            };
            let flag = if room.usable_capacity() == 0 { "  ⚠️ ineligible" } else { "" };
            out.push_str(&format!("  • {:<10} {:>4}{rows}{flag}\n", room.id, room.capacity));
        }
    }

    out
}
