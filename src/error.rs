/// Failure of a store operation.
#[derive(Debug, thiserror::Error)]
pub enum ArmoryError {
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Another loadout already holds this name.
    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ArmoryError {
    /// Reclassify a store failure caused by a unique-key violation.
    ///
    /// DuckDB reports these as constraint errors mentioning a duplicate key;
    /// every other error passes through unchanged.
    pub fn into_duplicate_name(self, name: &str) -> Self {
        match self {
            ArmoryError::DuckDb(ref e) if is_duplicate_key(e) => {
                ArmoryError::DuplicateName(name.to_string())
            }
            other => other,
        }
    }
}

fn is_duplicate_key(e: &duckdb::Error) -> bool {
    let msg = e.to_string();
    msg.contains("Duplicate key") || msg.contains("violates unique constraint")
}

pub type Result<T> = std::result::Result<T, ArmoryError>;
