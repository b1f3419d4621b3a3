//! Query modules for the loadout store.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and returns typed models.

pub mod equipments;
pub mod loadouts;

pub use equipments::EquipmentQuery;
pub use loadouts::{parse_id, LoadoutQuery};
