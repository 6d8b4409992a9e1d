//! seat.toml configuration parser.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::{Block, RoomCatalog};
use crate::error::{CoreError, CoreResult};
use crate::types::{GroupInput, Strategy};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatConfig {
    pub allocation: AllocationConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub groups: Vec<GroupInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationConfig {
    pub strategy: Strategy,
    /// Falls back to the strategy preset when absent.
    pub min_chunk: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Room table or catalog document, relative to the config file.
    pub path: Option<String>,
    /// Room ids per block, in unlock order. Best-fit only.
    pub block_order: Option<Vec<Vec<String>>>,
    pub blocks: Option<Vec<Block>>,
}

impl SeatConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SeatConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Effective threshold for `strategy`, honouring an explicit setting.
    pub fn min_chunk_for(&self, strategy: Strategy) -> i64 {
        self.allocation
            .min_chunk
            .unwrap_or_else(|| i64::from(strategy.preset_min_chunk()))
    }

    /// Resolve the room catalog: inline blocks win over `path`, which is
    /// taken relative to `base_dir`.
    pub fn load_catalog(&self, base_dir: &Path) -> CoreResult<RoomCatalog> {
        if let Some(blocks) = &self.catalog.blocks {
            return Ok(RoomCatalog::new(blocks.clone()));
        }
        match &self.catalog.path {
            Some(path) => RoomCatalog::load(&base_dir.join(path)),
            None => Err(CoreError::NoCatalog),
        }
    }

    /// Scaffold a minimal seat.toml pointing at a room table.
    pub fn scaffold(catalog_path: &str) -> Self {
        SeatConfig {
            allocation: AllocationConfig {
                strategy: Strategy::BestFit,
                min_chunk: Some(i64::from(Strategy::BestFit.preset_min_chunk())),
            },
            catalog: CatalogConfig {
                path: Some(catalog_path.to_string()),
                block_order: None,
                blocks: None,
            },
            groups: vec![
                GroupInput::new("CSE", "A", 60),
                GroupInput::new("CSE", "B", 55),
                GroupInput::new("ECE", "A", 48),
            ],
        }
    }
}
