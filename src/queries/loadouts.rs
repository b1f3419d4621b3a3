//! Loadout CRUD against the `loadouts` table.
//!
//! Writes carry `RETURNING *` so every operation hands back the row as the
//! store now holds it. A write that matches no row surfaces as
//! [`ArmoryError::NotFound`]; a name collision as [`ArmoryError::DuplicateName`].

use crate::connection::Connection;
use crate::error::{ArmoryError, Result};
use crate::models::{Loadout, LoadoutUpdate, NewLoadout};
use crate::sql_builder::{int, real, text, SqlBuilder};

/// Parse a path-style loadout id.
///
/// An id that is not an integer can never match a row, so it reads as
/// not found rather than as a bad request.
pub fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| not_found(raw))
}

fn not_found(id: impl std::fmt::Display) -> ArmoryError {
    ArmoryError::NotFound(format!("loadout {}", id))
}

// ---------------------------------------------------------------------------
// LoadoutQuery
// ---------------------------------------------------------------------------

/// Query interface for saved loadouts.
pub struct LoadoutQuery<'a> {
    conn: &'a Connection,
}

impl<'a> LoadoutQuery<'a> {
    /// Create a new `LoadoutQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All saved loadouts, oldest first.
    pub fn list(&self) -> Result<Vec<Loadout>> {
        let (sql, params) = SqlBuilder::new("loadouts").order_by(&["id ASC"]).build();
        self.conn.execute_into(&sql, &params)
    }

    pub fn get(&self, id: i64) -> Result<Loadout> {
        let (sql, params) = SqlBuilder::new("loadouts")
            .where_eq("id", int(id))
            .limit(1)
            .build();
        self.conn
            .execute_first(&sql, &params)?
            .ok_or_else(|| not_found(id))
    }

    /// Insert a loadout; the store assigns its id.
    pub fn create(&self, new: &NewLoadout) -> Result<Loadout> {
        let (sql, params) = SqlBuilder::insert_into("loadouts")
            .value("name", text(&new.name))
            .value("primaryweapon", text(&new.primary_weapon))
            .value("subweapon", text(&new.sub_weapon))
            .value("gadget1", text(&new.gadget1))
            .value("gadget2", text(&new.gadget2))
            .value("price", real(new.price))
            .returning(&["*"])
            .build();

        let created: Option<Loadout> = self
            .conn
            .execute_first(&sql, &params)
            .map_err(|e| e.into_duplicate_name(&new.name))?;
        let created = created.ok_or_else(|| {
            ArmoryError::InvalidArgument("insert returned no row".to_string())
        })?;
        tracing::debug!(id = created.id, name = %created.name, "created loadout");
        Ok(created)
    }

    /// Replace every mutable field of an existing loadout.
    pub fn update(&self, id: i64, update: &LoadoutUpdate) -> Result<Loadout> {
        let (sql, params) = SqlBuilder::update("loadouts")
            .set("name", text(&update.name))
            .set("primaryweapon", text(&update.primary_weapon))
            .set("subweapon", text(&update.sub_weapon))
            .set("gadget1", text(&update.gadget1))
            .set("gadget2", text(&update.gadget2))
            .set("price", real(update.price))
            .where_eq("id", int(id))
            .returning(&["*"])
            .build();

        let updated: Option<Loadout> = self
            .conn
            .execute_first(&sql, &params)
            .map_err(|e| e.into_duplicate_name(&update.name))?;
        let updated = updated.ok_or_else(|| not_found(id))?;
        tracing::debug!(id, name = %updated.name, "updated loadout");
        Ok(updated)
    }

    /// Hard-delete a loadout, returning the row as it was.
    pub fn delete(&self, id: i64) -> Result<Loadout> {
        let (sql, params) = SqlBuilder::delete_from("loadouts")
            .where_eq("id", int(id))
            .returning(&["*"])
            .build();

        let deleted: Option<Loadout> = self.conn.execute_first(&sql, &params)?;
        let deleted = deleted.ok_or_else(|| not_found(id))?;
        tracing::debug!(id, "deleted loadout");
        Ok(deleted)
    }
}
