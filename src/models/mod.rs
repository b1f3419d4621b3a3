pub mod equipment;
pub mod loadout;

pub use equipment::*;
pub use loadout::*;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ErrorBody: `{"error": "..."}` payload on every failed request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
