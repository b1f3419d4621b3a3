use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Slot: one of the four selection positions in a loadout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Primary,
    Sub,
    Gadget1,
    Gadget2,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Primary, Slot::Sub, Slot::Gadget1, Slot::Gadget2];

    pub fn label(&self) -> &'static str {
        match self {
            Slot::Primary => "Primary",
            Slot::Sub => "Sub",
            Slot::Gadget1 => "Gadget 1",
            Slot::Gadget2 => "Gadget 2",
        }
    }

    /// The other gadget slot, for the two gadget slots.
    pub fn paired_gadget(&self) -> Option<Slot> {
        match self {
            Slot::Gadget1 => Some(Slot::Gadget2),
            Slot::Gadget2 => Some(Slot::Gadget1),
            _ => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Loadout: a stored row of the `loadouts` table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    pub id: i64,
    pub name: String,
    pub primaryweapon: String,
    pub subweapon: String,
    pub gadget1: String,
    pub gadget2: String,
    /// Total captured by the client at save time. `None` when the creating
    /// request omitted it.
    pub price: Option<f64>,
}

impl Loadout {
    /// The equipment name stored in a slot.
    pub fn slot(&self, slot: Slot) -> &str {
        match slot {
            Slot::Primary => &self.primaryweapon,
            Slot::Sub => &self.subweapon,
            Slot::Gadget1 => &self.gadget1,
            Slot::Gadget2 => &self.gadget2,
        }
    }
}

// ---------------------------------------------------------------------------
// NewLoadout: body of `POST /loadouts`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoadout {
    pub name: String,
    pub primary_weapon: String,
    pub sub_weapon: String,
    pub gadget1: String,
    pub gadget2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

// ---------------------------------------------------------------------------
// LoadoutUpdate: body of `PATCH /loadout/{id}`
// ---------------------------------------------------------------------------

/// Full replacement of a loadout's mutable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadoutUpdate {
    pub name: String,
    pub primary_weapon: String,
    pub sub_weapon: String,
    pub gadget1: String,
    pub gadget2: String,
    #[serde(default)]
    pub price: Option<f64>,
}

impl From<NewLoadout> for LoadoutUpdate {
    fn from(n: NewLoadout) -> Self {
        Self {
            name: n.name,
            primary_weapon: n.primary_weapon,
            sub_weapon: n.sub_weapon,
            gadget1: n.gadget1,
            gadget2: n.gadget2,
            price: n.price,
        }
    }
}
