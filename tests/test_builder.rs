mod common;

use armory::models::{ItemType, Loadout, Slot};
use armory::ui::builder::{MISSING_FIELDS, UPDATED};
use armory::ui::{Catalog, LoadoutBuilder, Mode, Navigation, Phase};
use armory::{ArmoryClient, ClientError};

fn ready_builder() -> LoadoutBuilder {
    let mut builder = LoadoutBuilder::new();
    builder.ready(Catalog::new(common::sample_catalog()));
    builder
}

// ---------------------------------------------------------------------------
// Catalog partitioning
// ---------------------------------------------------------------------------

#[test]
fn catalog_partitions_by_item_type() {
    let catalog = Catalog::new(common::sample_catalog());
    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog.pool(ItemType::PrimaryWeapon).len(), 2);
    assert_eq!(catalog.pool(ItemType::SubWeapon).len(), 2);
    assert_eq!(catalog.pool(ItemType::Gadget).len(), 3);
    assert_eq!(catalog.pool_for(Slot::Gadget2).len(), 3);
}

#[test]
fn catalog_keeps_fetch_order_within_pool() {
    let catalog = Catalog::new(common::sample_catalog());
    let gadgets: Vec<&str> = catalog
        .pool(ItemType::Gadget)
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(gadgets, vec!["Smoke", "Frag Grenade", "Claymore"]);
}

#[test]
fn resolve_unknown_name_prices_zero() {
    let catalog = Catalog::new(common::sample_catalog());
    let item = catalog.resolve("Railgun");
    assert_eq!(item.name, "Railgun");
    assert_eq!(item.price, 0.0);
    assert_eq!(catalog.price_of("Pistol"), Some(5.50));
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[test]
fn starts_loading_then_ready() {
    let builder = LoadoutBuilder::new();
    assert_eq!(builder.phase(), Phase::Loading);
    assert_eq!(builder.mode(), Mode::Create);
    assert!(builder.catalog().is_empty());

    let builder = ready_builder();
    assert_eq!(builder.phase(), Phase::Ready);
}

#[test]
fn total_counts_empty_slots_as_zero() {
    let mut builder = ready_builder();
    assert_eq!(builder.total_price(), 0.0);

    assert!(builder.select(Slot::Primary, "Assault Rifle"));
    assert!(builder.select(Slot::Sub, "Pistol"));
    assert!(builder.select(Slot::Gadget1, "Smoke"));
    assert_eq!(builder.total_price(), 17.50);
}

#[test]
fn select_rejects_items_outside_the_slot_pool() {
    let mut builder = ready_builder();
    assert!(!builder.select(Slot::Primary, "Pistol"));
    assert!(!builder.select(Slot::Gadget1, "Railgun"));
    assert!(builder.selection(Slot::Primary).is_none());
    assert!(builder.selection(Slot::Gadget1).is_none());
}

#[test]
fn reselecting_replaces_the_slot() {
    let mut builder = ready_builder();
    builder.select(Slot::Primary, "Assault Rifle");
    builder.select(Slot::Primary, "Shotgun");
    assert!(builder.is_selected(Slot::Primary, "Shotgun"));
    assert_eq!(builder.total_price(), 9.00);
}

#[test]
fn same_gadget_moves_between_slots() {
    let mut builder = ready_builder();
    builder.select(Slot::Gadget1, "Smoke");
    assert!(builder.is_disabled(Slot::Gadget2, "Smoke"));
    assert!(!builder.is_disabled(Slot::Gadget2, "Claymore"));
    assert!(!builder.is_disabled(Slot::Gadget1, "Smoke"));

    builder.select(Slot::Gadget2, "Smoke");
    assert!(builder.selection(Slot::Gadget1).is_none());
    assert!(builder.is_selected(Slot::Gadget2, "Smoke"));
    assert_eq!(builder.total_price(), 2.00);
}

#[test]
fn different_gadgets_coexist() {
    let mut builder = ready_builder();
    builder.select(Slot::Gadget1, "Smoke");
    builder.select(Slot::Gadget2, "Claymore");
    assert!(builder.is_selected(Slot::Gadget1, "Smoke"));
    assert!(builder.is_selected(Slot::Gadget2, "Claymore"));
}

#[test]
fn clear_empties_a_slot() {
    let mut builder = ready_builder();
    builder.select(Slot::Sub, "Pistol");
    builder.clear(Slot::Sub);
    assert!(builder.selection(Slot::Sub).is_none());
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn fill(builder: &mut LoadoutBuilder, name: &str) {
    builder.set_name(name);
    builder.select(Slot::Primary, "Assault Rifle");
    builder.select(Slot::Sub, "Pistol");
    builder.select(Slot::Gadget1, "Smoke");
    builder.select(Slot::Gadget2, "Frag Grenade");
}

#[test]
fn draft_requires_name_and_every_slot() {
    let mut builder = ready_builder();
    fill(&mut builder, "   ");
    let err = builder.draft().unwrap_err();
    assert!(matches!(err, ClientError::Validation(ref m) if m == MISSING_FIELDS));

    let mut builder = ready_builder();
    fill(&mut builder, "Alpha");
    builder.clear(Slot::Gadget2);
    assert!(builder.draft().is_err());
}

#[test]
fn draft_trims_name_and_carries_total() {
    let mut builder = ready_builder();
    fill(&mut builder, "  Alpha ");
    let draft = builder.draft().unwrap();
    assert_eq!(draft.name, "Alpha");
    assert_eq!(draft.gadget2, "Frag Grenade");
    assert_eq!(draft.price, 20.50);
}

#[tokio::test]
async fn invalid_submit_sends_nothing() {
    // Nothing listens here; a request would surface as a network error.
    let client = ArmoryClient::new("http://127.0.0.1:9");
    let mut builder = ready_builder();
    builder.select(Slot::Primary, "Assault Rifle");

    assert_eq!(builder.submit(&client).await, None);
    assert_eq!(builder.message(), Some(MISSING_FIELDS));
    assert_eq!(builder.phase(), Phase::Ready);
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_submits_and_navigates_to_list() {
    let (client, store) = common::spawn_server().await;
    let mut builder = LoadoutBuilder::new();
    builder.load(&client).await;
    assert_eq!(builder.phase(), Phase::Ready);
    assert_eq!(builder.catalog().len(), 7);

    fill(&mut builder, "Alpha");
    assert_eq!(builder.submit(&client).await, Some(Navigation::List));
    assert_eq!(builder.message(), None);

    let saved = store.run(|a| a.loadouts().list()).await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name, "Alpha");
    assert_eq!(saved[0].price, Some(20.50));
}

#[tokio::test]
async fn duplicate_submit_shows_server_message() {
    let (client, _) = common::spawn_server().await;
    client
        .create_loadout(&common::new_loadout("Alpha"))
        .await
        .unwrap();

    let mut builder = LoadoutBuilder::new();
    builder.load(&client).await;
    fill(&mut builder, "Alpha");

    assert_eq!(builder.submit(&client).await, None);
    assert_eq!(
        builder.message(),
        Some("Error: Loadout with this name already exists.")
    );
    assert_eq!(builder.name(), "Alpha");
    assert!(builder.is_selected(Slot::Gadget2, "Frag Grenade"));
}

#[tokio::test]
async fn edit_prefills_and_navigates_to_detail() {
    let (client, _) = common::spawn_server().await;
    let created = client
        .create_loadout(&common::new_loadout("Alpha"))
        .await
        .unwrap();

    let mut builder = LoadoutBuilder::for_edit(created.id);
    builder.load(&client).await;
    assert_eq!(builder.mode(), Mode::Edit { id: created.id });
    assert_eq!(builder.name(), "Alpha");
    assert!(builder.is_selected(Slot::Sub, "Pistol"));
    assert_eq!(builder.total_price(), 20.50);

    builder.select(Slot::Gadget2, "Claymore");
    assert_eq!(
        builder.submit(&client).await,
        Some(Navigation::Detail(created.id))
    );
    assert_eq!(builder.message(), Some(UPDATED));

    let stored = client.loadout(created.id).await.unwrap();
    assert_eq!(stored.gadget2, "Claymore");
    assert_eq!(stored.price, Some(21.50));
}

#[tokio::test]
async fn edit_of_missing_loadout_reports_error() {
    let (client, _) = common::spawn_server().await;
    let mut builder = LoadoutBuilder::for_edit(404);
    builder.load(&client).await;

    assert_eq!(builder.phase(), Phase::Ready);
    assert_eq!(builder.message(), Some("Error: Loadout not found"));
    assert_eq!(builder.name(), "");
}

#[test]
fn prefill_prices_removed_items_at_zero() {
    let mut builder = ready_builder();
    let stored = Loadout {
        id: 1,
        name: "Legacy".to_string(),
        primaryweapon: "Railgun".to_string(),
        subweapon: "Pistol".to_string(),
        gadget1: "Smoke".to_string(),
        gadget2: "Claymore".to_string(),
        price: Some(99.0),
    };
    builder.prefill(&stored);
    assert!(builder.is_selected(Slot::Primary, "Railgun"));
    assert_eq!(builder.total_price(), 11.50);
}
