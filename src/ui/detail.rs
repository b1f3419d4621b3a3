//! Detail view of one saved loadout, with the edit and delete actions it
//! offers.

use crate::client::{ArmoryClient, ClientResult};
use crate::models::{Equipment, Loadout, Slot};
use crate::ui::assets::{detail_image_path, ImageSource};
use crate::ui::builder::LoadoutBuilder;
use crate::ui::catalog::Catalog;
use crate::ui::Navigation;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this loadout?";
pub const DELETED: &str = "Loadout deleted successfully.";
pub const DELETE_FAILED: &str = "Deletion failed.";

/// One rendered slot of the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailItem {
    pub slot: Slot,
    pub name: String,
    pub image: ImageSource,
    /// Today's catalog price, `None` if the item left the catalog.
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent.
    Cancelled,
    Deleted { alert: String, next: Navigation },
    /// The request failed; stay on the page and show `alert`.
    Failed { alert: String },
}

#[derive(Debug, Clone)]
pub struct LoadoutDetail {
    loadout: Loadout,
    catalog: Catalog,
}

impl LoadoutDetail {
    /// Fetch the loadout and the catalog in parallel.
    pub async fn fetch(client: &ArmoryClient, id: i64) -> ClientResult<Self> {
        let (loadout, items) = tokio::try_join!(client.loadout(id), client.equipments())?;
        Ok(Self::new(loadout, items))
    }

    pub fn new(loadout: Loadout, items: Vec<Equipment>) -> Self {
        Self {
            loadout,
            catalog: Catalog::new(items),
        }
    }

    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    pub fn title(&self) -> String {
        format!("{}'s Loadout", self.loadout.name)
    }

    /// The four slots in display order.
    pub fn items(&self) -> Vec<DetailItem> {
        Slot::ALL
            .iter()
            .map(|&slot| {
                let name = self.loadout.slot(slot);
                DetailItem {
                    slot,
                    name: name.to_string(),
                    image: ImageSource::new(detail_image_path(name), name),
                    price: self.catalog.price_of(name),
                }
            })
            .collect()
    }

    /// Total at today's catalog prices. Items no longer in the catalog count
    /// as zero. The price saved with the loadout is ignored here.
    pub fn current_price(&self) -> f64 {
        Slot::ALL
            .iter()
            .filter_map(|&slot| self.catalog.price_of(self.loadout.slot(slot)))
            .sum()
    }

    /// The total captured when the loadout was last saved.
    pub fn stored_price(&self) -> Option<f64> {
        self.loadout.price
    }

    /// An edit form pre-filled from this loadout, reusing the fetched
    /// catalog.
    pub fn edit(&self) -> LoadoutBuilder {
        let mut builder = LoadoutBuilder::for_edit(self.loadout.id);
        builder.ready(self.catalog.clone());
        builder.prefill(&self.loadout);
        builder
    }

    /// Delete the loadout once `confirm` agrees.
    ///
    /// `confirm` receives the prompt text; returning `false` cancels without
    /// sending anything.
    pub async fn delete(
        &self,
        client: &ArmoryClient,
        confirm: impl FnOnce(&str) -> bool,
    ) -> DeleteOutcome {
        if !confirm(DELETE_PROMPT) {
            return DeleteOutcome::Cancelled;
        }
        match client.delete_loadout(self.loadout.id).await {
            Ok(_) => DeleteOutcome::Deleted {
                alert: DELETED.to_string(),
                next: Navigation::List,
            },
            Err(e) => {
                tracing::warn!(error = %e, id = self.loadout.id, "deleting loadout failed");
                DeleteOutcome::Failed {
                    alert: e.server_message().unwrap_or(DELETE_FAILED).to_string(),
                }
            }
        }
    }
}
