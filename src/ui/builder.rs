//! State of the loadout builder form, shared by the create and edit views.
//!
//! Lifecycle: `Loading → Ready → (select)* → Submitting → Ready`. A
//! successful submit hands back where to navigate; a failed one leaves a
//! message and returns to `Ready`.

use crate::client::{ArmoryClient, ClientError, ClientResult};
use crate::models::{Loadout, LoadoutUpdate, NewLoadout, Slot};
use crate::ui::catalog::{Catalog, SelectedItem};
use crate::ui::Navigation;

pub const MISSING_FIELDS: &str = "Please name your loadout and select an item for each slot.";
pub const UPDATED: &str = "Loadout updated successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit { id: i64 },
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Selections {
    primary: Option<SelectedItem>,
    sub: Option<SelectedItem>,
    gadget1: Option<SelectedItem>,
    gadget2: Option<SelectedItem>,
}

impl Selections {
    fn get(&self, slot: Slot) -> Option<&SelectedItem> {
        self.slot_ref(slot).as_ref()
    }

    fn slot_ref(&self, slot: Slot) -> &Option<SelectedItem> {
        match slot {
            Slot::Primary => &self.primary,
            Slot::Sub => &self.sub,
            Slot::Gadget1 => &self.gadget1,
            Slot::Gadget2 => &self.gadget2,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<SelectedItem> {
        match slot {
            Slot::Primary => &mut self.primary,
            Slot::Sub => &mut self.sub,
            Slot::Gadget1 => &mut self.gadget1,
            Slot::Gadget2 => &mut self.gadget2,
        }
    }
}

/// A fully filled form, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub name: String,
    pub primary: String,
    pub sub: String,
    pub gadget1: String,
    pub gadget2: String,
    pub price: f64,
}

impl From<Draft> for NewLoadout {
    fn from(d: Draft) -> Self {
        Self {
            name: d.name,
            primary_weapon: d.primary,
            sub_weapon: d.sub,
            gadget1: d.gadget1,
            gadget2: d.gadget2,
            price: Some(d.price),
        }
    }
}

impl From<Draft> for LoadoutUpdate {
    fn from(d: Draft) -> Self {
        NewLoadout::from(d).into()
    }
}

#[derive(Debug, Clone)]
pub struct LoadoutBuilder {
    mode: Mode,
    phase: Phase,
    catalog: Catalog,
    name: String,
    selections: Selections,
    message: Option<String>,
}

impl Default for LoadoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadoutBuilder {
    /// An empty form for creating a loadout, waiting for the catalog.
    pub fn new() -> Self {
        Self::with_mode(Mode::Create)
    }

    /// A form for editing loadout `id`, waiting for the catalog and the
    /// loadout itself.
    pub fn for_edit(id: i64) -> Self {
        Self::with_mode(Mode::Edit { id })
    }

    fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            phase: Phase::Loading,
            catalog: Catalog::default(),
            name: String::new(),
            selections: Selections::default(),
            message: None,
        }
    }

    /// Fetch what the form needs and move to `Ready`.
    ///
    /// Create mode fetches the catalog; edit mode fetches the catalog and
    /// the loadout together and pre-fills from it. Failure leaves a message
    /// and an empty form.
    pub async fn load(&mut self, client: &ArmoryClient) {
        match self.mode {
            Mode::Create => match client.equipments().await {
                Ok(items) => self.ready(Catalog::new(items)),
                Err(e) => {
                    tracing::warn!(error = %e, "loading equipments failed");
                    self.message = Some(format!("Error occurred while loading equipments: {e}"));
                    self.phase = Phase::Ready;
                }
            },
            Mode::Edit { id } => {
                let fetched = tokio::try_join!(client.equipments(), client.loadout(id));
                match fetched {
                    Ok((items, loadout)) => {
                        self.ready(Catalog::new(items));
                        self.prefill(&loadout);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, id, "loading loadout for edit failed");
                        self.message = Some(match e.server_message() {
                            Some(msg) => format!("Error: {msg}"),
                            None => "Failed to load necessary data.".to_string(),
                        });
                        self.phase = Phase::Ready;
                    }
                }
            }
        }
    }

    /// Install a fetched catalog.
    pub fn ready(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.phase = Phase::Ready;
    }

    /// Fill every field from a stored loadout, pricing items from the
    /// current catalog.
    pub fn prefill(&mut self, loadout: &Loadout) {
        self.name = loadout.name.clone();
        for slot in Slot::ALL {
            *self.selections.slot_mut(slot) = Some(self.catalog.resolve(loadout.slot(slot)));
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Message to show under the form, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn selection(&self, slot: Slot) -> Option<&SelectedItem> {
        self.selections.get(slot)
    }

    pub fn is_selected(&self, slot: Slot, name: &str) -> bool {
        self.selection(slot).is_some_and(|s| s.name == name)
    }

    /// Whether `name` is held by the other gadget slot. Rendering hint only:
    /// selecting it anyway moves it over.
    pub fn is_disabled(&self, slot: Slot, name: &str) -> bool {
        slot.paired_gadget()
            .is_some_and(|other| self.is_selected(other, name))
    }

    /// Pick a catalog item for a slot by name.
    ///
    /// Returns `false` (and changes nothing) if the slot's pool has no such
    /// item.
    pub fn select(&mut self, slot: Slot, name: &str) -> bool {
        let Some(item) = self.catalog.find_for(slot, name) else {
            return false;
        };
        let item = SelectedItem::from(item);
        self.select_item(slot, item);
        true
    }

    /// Put an item into a slot. Taking the item the other gadget slot holds
    /// clears that slot.
    pub fn select_item(&mut self, slot: Slot, item: SelectedItem) {
        if let Some(other) = slot.paired_gadget() {
            if self.is_selected(other, &item.name) {
                *self.selections.slot_mut(other) = None;
            }
        }
        *self.selections.slot_mut(slot) = Some(item);
    }

    pub fn clear(&mut self, slot: Slot) {
        *self.selections.slot_mut(slot) = None;
    }

    /// Sum of the selected prices; empty slots count as zero.
    pub fn total_price(&self) -> f64 {
        Slot::ALL
            .iter()
            .filter_map(|slot| self.selection(*slot))
            .map(|item| item.price)
            .sum()
    }

    /// Check the form locally. Fails without touching the network when the
    /// name or any slot is empty.
    pub fn draft(&self) -> ClientResult<Draft> {
        let name = self.name.trim();
        let pick = |slot| self.selection(slot).map(|s: &SelectedItem| s.name.clone());
        match (
            name.is_empty(),
            pick(Slot::Primary),
            pick(Slot::Sub),
            pick(Slot::Gadget1),
            pick(Slot::Gadget2),
        ) {
            (false, Some(primary), Some(sub), Some(gadget1), Some(gadget2)) => Ok(Draft {
                name: name.to_string(),
                primary,
                sub,
                gadget1,
                gadget2,
                price: self.total_price(),
            }),
            _ => Err(ClientError::Validation(MISSING_FIELDS.to_string())),
        }
    }

    /// Validate and send the form: create in create mode, update in edit
    /// mode.
    ///
    /// Returns where to go next on success. On failure the message is set
    /// and the form stays as it was.
    pub async fn submit(&mut self, client: &ArmoryClient) -> Option<Navigation> {
        self.message = None;

        let draft = match self.draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.message = Some(e.user_message("save loadout"));
                return None;
            }
        };

        self.phase = Phase::Submitting;
        let (result, action) = match self.mode {
            Mode::Create => (
                client
                    .create_loadout(&NewLoadout::from(draft))
                    .await
                    .map(|_| Navigation::List),
                "save loadout",
            ),
            Mode::Edit { id } => (
                client
                    .update_loadout(id, &LoadoutUpdate::from(draft))
                    .await
                    .map(|_| Navigation::Detail(id)),
                "update loadout",
            ),
        };
        self.phase = Phase::Ready;

        match result {
            Ok(next) => {
                if let Mode::Edit { .. } = self.mode {
                    self.message = Some(UPDATED.to_string());
                }
                Some(next)
            }
            Err(e) => {
                tracing::warn!(error = %e, "submitting loadout failed");
                self.message = Some(e.user_message(action));
                None
            }
        }
    }
}
