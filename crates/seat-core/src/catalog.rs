//! Room catalog: named blocks of rooms, read-only during allocation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreResult;
use crate::table;

/// A physical room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    /// Seat count. Zero or negative marks the room ineligible.
    pub capacity: i64,
    /// Seats per row, front to back. Informational only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layout: Vec<u32>,
}

impl Room {
    pub fn new(id: impl Into<String>, capacity: i64) -> Self {
        Self {
            id: id.into(),
            capacity,
            layout: Vec::new(),
        }
    }

    pub fn with_layout(mut self, layout: Vec<u32>) -> Self {
        self.layout = layout;
        self
    }

    /// Capacity the allocator may use; non-positive capacities count as zero.
    pub fn usable_capacity(&self) -> u32 {
        u32::try_from(self.capacity.max(0)).unwrap_or(u32::MAX)
    }
}

/// A named cluster of co-located rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl Block {
    pub fn new(name: impl Into<String>, rooms: Vec<Room>) -> Self {
        Self {
            name: name.into(),
            rooms,
        }
    }

    pub fn capacity(&self) -> u64 {
        self.rooms.iter().map(|r| u64::from(r.usable_capacity())).sum()
    }
}

/// Ordered list of blocks. Each room belongs to exactly one block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCatalog {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl RoomCatalog {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// True when no block holds any room.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.rooms.is_empty())
    }

    /// Every room with the block it belongs to, in catalog order.
    pub fn rooms(&self) -> impl Iterator<Item = (&Block, &Room)> {
        self.blocks
            .iter()
            .flat_map(|b| b.rooms.iter().map(move |r| (b, r)))
    }

    pub fn room_count(&self) -> usize {
        self.blocks.iter().map(|b| b.rooms.len()).sum()
    }

    pub fn total_capacity(&self) -> u64 {
        self.blocks.iter().map(Block::capacity).sum()
    }

    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a catalog from disk. `.toml` and `.json` files are parsed as
    /// documents; anything else is read as a comma-separated room table.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let catalog = match ext.as_deref() {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => table::parse_room_table(&content)?,
        };

        debug!(
            path = %path.display(),
            blocks = catalog.blocks.len(),
            rooms = catalog.room_count(),
            "loaded room catalog"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RoomCatalog {
        RoomCatalog::new(vec![
            Block::new("A", vec![Room::new("A101", 40), Room::new("A102", 30)]),
            Block::new("B", vec![Room::new("B201", -5)]),
        ])
    }

    #[test]
    fn non_positive_capacity_is_unusable() {
        assert_eq!(Room::new("X", -5).usable_capacity(), 0);
        assert_eq!(Room::new("X", 0).usable_capacity(), 0);
        assert_eq!(Room::new("X", 12).usable_capacity(), 12);
    }

    #[test]
    fn totals_ignore_ineligible_rooms() {
        let catalog = sample();
        assert_eq!(catalog.room_count(), 3);
        assert_eq!(catalog.total_capacity(), 70);
    }

    #[test]
    fn empty_blocks_make_an_empty_catalog() {
        let catalog = RoomCatalog::new(vec![Block::new("A", vec![])]);
        assert!(catalog.is_empty());
        assert!(!sample().is_empty());
    }

    #[test]
    fn parses_toml_document() {
        let toml_str = r#"
[[blocks]]
name = "Main"

[[blocks.rooms]]
id = "M1"
capacity = 48
layout = [8, 8, 8, 8, 8, 8]
"#;
        let catalog = RoomCatalog::from_toml_str(toml_str).unwrap();
        assert_eq!(catalog.blocks[0].name, "Main");
        assert_eq!(catalog.blocks[0].rooms[0].layout.len(), 6);
    }

    #[test]
    fn load_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("rooms.json");
        std::fs::write(
            &json_path,
            r#"{"blocks":[{"name":"J","rooms":[{"id":"J1","capacity":20}]}]}"#,
        )
        .unwrap();
        assert_eq!(RoomCatalog::load(&json_path).unwrap().total_capacity(), 20);

        let csv_path = dir.path().join("rooms.csv");
        std::fs::write(&csv_path, "BLOCK,ROOM NO,Total Count\nK,K1,25\n").unwrap();
        assert_eq!(RoomCatalog::load(&csv_path).unwrap().blocks[0].name, "K");
    }
}
