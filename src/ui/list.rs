//! The saved-loadouts list view.

use crate::client::ArmoryClient;
use crate::models::Loadout;

pub const FETCH_FAILED: &str = "Failed to fetch loadouts. Please try again.";

/// One card of the list view.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadoutCard {
    pub id: i64,
    pub title: String,
    pub price: Option<f64>,
    pub primary: String,
    pub sub: String,
    pub gadgets: [String; 2],
    pub detail_path: String,
}

impl From<&Loadout> for LoadoutCard {
    fn from(l: &Loadout) -> Self {
        Self {
            id: l.id,
            title: format!("{}'s Loadout", l.name),
            price: l.price,
            primary: l.primaryweapon.clone(),
            sub: l.subweapon.clone(),
            gadgets: [l.gadget1.clone(), l.gadget2.clone()],
            detail_path: format!("/loadout/{}", l.id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadoutList {
    loadouts: Vec<Loadout>,
}

impl LoadoutList {
    /// Fetch every saved loadout. Failure yields the message to show in
    /// place of the list.
    pub async fn fetch(client: &ArmoryClient) -> Result<Self, String> {
        match client.loadouts().await {
            Ok(loadouts) => Ok(Self { loadouts }),
            Err(e) => {
                tracing::warn!(error = %e, "fetching loadouts failed");
                Err(FETCH_FAILED.to_string())
            }
        }
    }

    pub fn new(loadouts: Vec<Loadout>) -> Self {
        Self { loadouts }
    }

    pub fn cards(&self) -> Vec<LoadoutCard> {
        self.loadouts.iter().map(LoadoutCard::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.loadouts.is_empty()
    }
}
