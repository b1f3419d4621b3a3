//! SQL builder with parameterized query construction.
//!
//! All user-supplied values go through DuckDB's parameter binding (`?` placeholders),
//! never through string interpolation. Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use armory::sql_builder::{text, SqlBuilder};
//! let (sql, params) = SqlBuilder::new("equipments")
//!     .where_eq("item_type", text("gadget"))
//!     .order_by(&["name ASC"])
//!     .build();
//! assert_eq!(params.len(), 1);
//! ```

use crate::connection::SqlParam;

/// Bind a string value.
pub fn text(value: &str) -> SqlParam {
    SqlParam::Text(value.to_string())
}

/// Bind an integer value.
pub fn int(value: i64) -> SqlParam {
    SqlParam::BigInt(value)
}

/// Bind an optional floating point value; `None` binds SQL `NULL`.
pub fn real(value: Option<f64>) -> SqlParam {
    match value {
        Some(v) => SqlParam::Double(v),
        None => SqlParam::Null,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Select,
    Insert { or_replace: bool },
    Update,
    Delete,
}

/// Builds parameterized SQL statements safely.
///
/// Covers `SELECT`, `INSERT`, `UPDATE` and `DELETE`, each optionally with a
/// `RETURNING` clause. Parameters are emitted in placeholder order: inserted
/// values or `SET` assignments first, then `WHERE` conditions.
pub struct SqlBuilder {
    verb: Verb,
    table: String,
    select_cols: Vec<String>,
    assignments: Vec<String>,
    assignment_params: Vec<SqlParam>,
    where_clauses: Vec<String>,
    where_params: Vec<SqlParam>,
    order_by_cols: Vec<String>,
    limit_val: Option<usize>,
    returning_cols: Vec<String>,
}

impl SqlBuilder {
    fn with_verb(verb: Verb, table: &str) -> Self {
        Self {
            verb,
            table: table.to_string(),
            select_cols: vec!["*".to_string()],
            assignments: Vec::new(),
            assignment_params: Vec::new(),
            where_clauses: Vec::new(),
            where_params: Vec::new(),
            order_by_cols: Vec::new(),
            limit_val: None,
            returning_cols: Vec::new(),
        }
    }

    /// Create a `SELECT` builder targeting the given table.
    pub fn new(table: &str) -> Self {
        Self::with_verb(Verb::Select, table)
    }

    /// Create an `INSERT INTO` builder.
    pub fn insert_into(table: &str) -> Self {
        Self::with_verb(Verb::Insert { or_replace: false }, table)
    }

    /// Create an `UPDATE` builder.
    pub fn update(table: &str) -> Self {
        Self::with_verb(Verb::Update, table)
    }

    /// Create a `DELETE FROM` builder.
    pub fn delete_from(table: &str) -> Self {
        Self::with_verb(Verb::Delete, table)
    }

    /// Turn an insert into `INSERT OR REPLACE`, overwriting rows that collide
    /// on the primary key.
    pub fn or_replace(&mut self) -> &mut Self {
        if let Verb::Insert { .. } = self.verb {
            self.verb = Verb::Insert { or_replace: true };
        }
        self
    }

    /// Set the columns to select (replaces the default `*`).
    pub fn select(&mut self, cols: &[&str]) -> &mut Self {
        self.select_cols = cols.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Add a column value to an `INSERT`.
    pub fn value(&mut self, column: &str, param: SqlParam) -> &mut Self {
        self.assignments.push(column.to_string());
        self.assignment_params.push(param);
        self
    }

    /// Add a `{column} = ?` assignment to an `UPDATE`.
    pub fn set(&mut self, column: &str, param: SqlParam) -> &mut Self {
        self.assignments.push(format!("{} = ?", column));
        self.assignment_params.push(param);
        self
    }

    /// Add an equality condition: `{column} = ?`.
    pub fn where_eq(&mut self, column: &str, param: SqlParam) -> &mut Self {
        self.where_clauses.push(format!("{} = ?", column));
        self.where_params.push(param);
        self
    }

    /// Add an IN condition with parameterized values.
    ///
    /// Empty values list produces `FALSE`.
    pub fn where_in(&mut self, column: &str, params: Vec<SqlParam>) -> &mut Self {
        if params.is_empty() {
            self.where_clauses.push("FALSE".to_string());
            return self;
        }
        let placeholders: Vec<&str> = params.iter().map(|_| "?").collect();
        self.where_clauses
            .push(format!("{} IN ({})", column, placeholders.join(", ")));
        self.where_params.extend(params);
        self
    }

    /// Add ORDER BY clauses (e.g. `"name ASC"`, `"price DESC"`).
    pub fn order_by(&mut self, clauses: &[&str]) -> &mut Self {
        self.order_by_cols
            .extend(clauses.iter().map(|c| c.to_string()));
        self
    }

    /// Set the maximum number of rows to return.
    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit_val = Some(n);
        self
    }

    /// Add a `RETURNING` clause to a write statement.
    pub fn returning(&mut self, cols: &[&str]) -> &mut Self {
        self.returning_cols = cols.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Build the final SQL string and parameter list.
    pub fn build(&self) -> (String, Vec<SqlParam>) {
        let mut parts = Vec::new();

        match self.verb {
            Verb::Select => {
                parts.push(format!("SELECT {}", self.select_cols.join(", ")));
                parts.push(format!("FROM {}", self.table));
            }
            Verb::Insert { or_replace } => {
                let head = if or_replace {
                    "INSERT OR REPLACE INTO"
                } else {
                    "INSERT INTO"
                };
                let placeholders: Vec<&str> = self.assignments.iter().map(|_| "?").collect();
                parts.push(format!(
                    "{} {} ({}) VALUES ({})",
                    head,
                    self.table,
                    self.assignments.join(", "),
                    placeholders.join(", ")
                ));
            }
            Verb::Update => {
                parts.push(format!(
                    "UPDATE {} SET {}",
                    self.table,
                    self.assignments.join(", ")
                ));
            }
            Verb::Delete => {
                parts.push(format!("DELETE FROM {}", self.table));
            }
        }

        if !self.where_clauses.is_empty() {
            parts.push(format!("WHERE {}", self.where_clauses.join(" AND ")));
        }

        if !self.order_by_cols.is_empty() {
            parts.push(format!("ORDER BY {}", self.order_by_cols.join(", ")));
        }

        if let Some(n) = self.limit_val {
            parts.push(format!("LIMIT {}", n));
        }

        if !self.returning_cols.is_empty() && self.verb != Verb::Select {
            parts.push(format!("RETURNING {}", self.returning_cols.join(", ")));
        }

        let mut params = self.assignment_params.clone();
        params.extend(self.where_params.iter().cloned());
        (parts.join("\n"), params)
    }
}
