//! Equipment catalog queries against the `equipments` table.

use crate::connection::Connection;
use crate::error::Result;
use crate::models::Equipment;
use crate::sql_builder::{real, text, SqlBuilder};

const COLUMNS: [&str; 4] = ["name", "image", "item_type", "price"];

// ---------------------------------------------------------------------------
// EquipmentQuery
// ---------------------------------------------------------------------------

/// Read access to the equipment catalog, plus the operator-side import used
/// to seed it.
pub struct EquipmentQuery<'a> {
    conn: &'a Connection,
}

impl<'a> EquipmentQuery<'a> {
    /// Create a new `EquipmentQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Every catalog entry, ordered by name.
    pub fn list(&self) -> Result<Vec<Equipment>> {
        let (sql, params) = SqlBuilder::new("equipments")
            .select(&COLUMNS)
            .order_by(&["name ASC"])
            .build();
        self.conn.execute_into(&sql, &params)
    }

    /// Look up a single entry by its exact name.
    pub fn get(&self, name: &str) -> Result<Option<Equipment>> {
        let (sql, params) = SqlBuilder::new("equipments")
            .select(&COLUMNS)
            .where_eq("name", text(name))
            .limit(1)
            .build();
        self.conn.execute_first(&sql, &params)
    }

    /// Number of catalog entries.
    pub fn count(&self) -> Result<usize> {
        let (sql, params) = SqlBuilder::new("equipments")
            .select(&["COUNT(*) AS n"])
            .build();
        let n = self
            .conn
            .execute_scalar(&sql, &params)?
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        Ok(usize::try_from(n).unwrap_or(usize::MAX))
    }

    /// Insert catalog entries, replacing existing ones with the same name.
    ///
    /// Runs in a single transaction: either every entry lands or none do.
    pub fn import(&self, items: &[Equipment]) -> Result<usize> {
        self.conn.in_transaction(|conn| {
            for item in items {
                let (sql, params) = SqlBuilder::insert_into("equipments")
                    .or_replace()
                    .value("name", text(&item.name))
                    .value("image", text(&item.image))
                    .value("item_type", text(item.item_type.as_str()))
                    .value("price", real(Some(item.price)))
                    .build();
                conn.execute_statement(&sql, &params)?;
            }
            Ok(items.len())
        })?;
        tracing::info!(count = items.len(), "imported equipment catalog");
        Ok(items.len())
    }
}
