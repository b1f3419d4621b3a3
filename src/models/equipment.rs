use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// ItemType: which slot pool a catalog entry belongs to
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemType {
    PrimaryWeapon,
    SubWeapon,
    Gadget,
}

impl ItemType {
    pub const ALL: [ItemType; 3] = [ItemType::PrimaryWeapon, ItemType::SubWeapon, ItemType::Gadget];

    /// The wire and column representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::PrimaryWeapon => "primaryWeapon",
            ItemType::SubWeapon => "subWeapon",
            ItemType::Gadget => "gadget",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemType::PrimaryWeapon => "Primary Weapon",
            ItemType::SubWeapon => "Secondary Weapon",
            ItemType::Gadget => "Gadgets",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Equipment: one catalog entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    pub image: String,
    pub item_type: ItemType,
    #[serde(deserialize_with = "lenient_price")]
    pub price: f64,
}

/// Accept prices encoded as JSON numbers or numeric strings.
///
/// Anything unparseable reads as `0.0`, so one bad row never hides the rest
/// of the catalog.
fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}
