pub mod catalog;
pub mod config;
pub mod error;
pub mod table;
pub mod types;

pub use catalog::{Block, Room, RoomCatalog};
pub use config::SeatConfig;
pub use error::{CoreError, CoreResult};
pub use types::*;
