mod common;

use armory::models::{Loadout, Slot};
use armory::ui::assets::{
    catalog_image_path, detail_image_path, placeholder_image_url, ImageSource,
};
use armory::ui::detail::{DELETED, DELETE_PROMPT};
use armory::ui::list::FETCH_FAILED;
use armory::ui::{format_price, DeleteOutcome, LoadoutDetail, LoadoutList, Navigation};
use armory::ArmoryClient;

fn stored(id: i64, name: &str) -> Loadout {
    Loadout {
        id,
        name: name.to_string(),
        primaryweapon: "Assault Rifle".to_string(),
        subweapon: "Pistol".to_string(),
        gadget1: "Smoke".to_string(),
        gadget2: "Frag Grenade".to_string(),
        price: Some(20.50),
    }
}

// ---------------------------------------------------------------------------
// Formatting and navigation
// ---------------------------------------------------------------------------

#[test]
fn prices_render_with_two_decimals() {
    assert_eq!(format_price(17.5), "$17.50");
    assert_eq!(format_price(0.0), "$0.00");
    assert_eq!(format_price(8.75), "$8.75");
}

#[test]
fn navigation_paths() {
    assert_eq!(Navigation::List.path(), "/loadouts");
    assert_eq!(Navigation::Detail(3).path(), "/loadout/3");
}

// ---------------------------------------------------------------------------
// Image paths
// ---------------------------------------------------------------------------

#[test]
fn catalog_images_use_the_image_field() {
    assert_eq!(catalog_image_path("AssaultRifle.webp"), "/assets/AssaultRifle.webp");
}

#[test]
fn detail_images_derive_from_the_name() {
    assert_eq!(detail_image_path("Assault Rifle"), "/assets/AssaultRifle.webp");
    assert_eq!(detail_image_path("Big Frag Grenade"), "/assets/BigFragGrenade.webp");
    assert_eq!(detail_image_path("SMG"), "/assets/SMG.webp");
}

#[test]
fn placeholder_encodes_the_name() {
    assert_eq!(
        placeholder_image_url("Frag Grenade"),
        "https://placehold.co/150x100/2d3748/ffffff?text=Frag%20Grenade"
    );
    let image = ImageSource::new(detail_image_path("Smoke"), "Smoke");
    assert!(image.fallback.ends_with("?text=Smoke"));
}

// ---------------------------------------------------------------------------
// List view
// ---------------------------------------------------------------------------

#[test]
fn cards_mirror_stored_loadouts() {
    let list = LoadoutList::new(vec![stored(1, "Alpha"), stored(2, "Bravo")]);
    assert!(!list.is_empty());

    let cards = list.cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].title, "Alpha's Loadout");
    assert_eq!(cards[0].price, Some(20.50));
    assert_eq!(cards[0].gadgets, ["Smoke".to_string(), "Frag Grenade".to_string()]);
    assert_eq!(cards[1].detail_path, "/loadout/2");
}

#[tokio::test]
async fn list_fetch_failure_has_fixed_message() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ArmoryClient::new(format!("http://{addr}"));
    let err = LoadoutList::fetch(&client).await.unwrap_err();
    assert_eq!(err, FETCH_FAILED);
}

#[tokio::test]
async fn list_fetch_reads_the_server() {
    let (client, _) = common::spawn_server().await;
    assert!(LoadoutList::fetch(&client).await.unwrap().is_empty());

    client.create_loadout(&common::new_loadout("Alpha")).await.unwrap();
    let list = LoadoutList::fetch(&client).await.unwrap();
    assert_eq!(list.cards()[0].title, "Alpha's Loadout");
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

#[test]
fn detail_items_in_slot_order() {
    let detail = LoadoutDetail::new(stored(1, "Alpha"), common::sample_catalog());
    assert_eq!(detail.title(), "Alpha's Loadout");

    let items = detail.items();
    let slots: Vec<Slot> = items.iter().map(|i| i.slot).collect();
    assert_eq!(slots, Slot::ALL.to_vec());
    assert_eq!(items[0].name, "Assault Rifle");
    assert_eq!(items[0].image.src, "/assets/AssaultRifle.webp");
    assert_eq!(items[3].image.src, "/assets/FragGrenade.webp");
    assert_eq!(items[1].price, Some(5.50));
}

#[test]
fn current_price_follows_the_catalog() {
    let mut catalog = common::sample_catalog();
    for item in catalog.iter_mut() {
        if item.name == "Smoke" {
            item.price = 3.00;
        }
    }
    let detail = LoadoutDetail::new(stored(1, "Alpha"), catalog);
    assert_eq!(detail.current_price(), 21.50);
    assert_eq!(detail.stored_price(), Some(20.50));
}

#[test]
fn removed_items_count_as_zero() {
    let catalog: Vec<_> = common::sample_catalog()
        .into_iter()
        .filter(|i| i.name != "Assault Rifle")
        .collect();
    let detail = LoadoutDetail::new(stored(1, "Alpha"), catalog);
    assert_eq!(detail.current_price(), 10.50);
    assert_eq!(detail.items()[0].price, None);
}

#[test]
fn edit_is_prefilled_from_the_detail() {
    let detail = LoadoutDetail::new(stored(5, "Alpha"), common::sample_catalog());
    let builder = detail.edit();
    assert_eq!(builder.name(), "Alpha");
    assert!(builder.is_selected(Slot::Gadget1, "Smoke"));
    assert_eq!(builder.total_price(), 20.50);
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let (client, store) = common::spawn_server().await;
    let created = client.create_loadout(&common::new_loadout("Alpha")).await.unwrap();
    let detail = LoadoutDetail::fetch(&client, created.id).await.unwrap();

    let mut asked = None;
    let outcome = detail
        .delete(&client, |prompt| {
            asked = Some(prompt.to_string());
            false
        })
        .await;
    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(asked.as_deref(), Some(DELETE_PROMPT));
    assert_eq!(store.run(|a| a.loadouts().list()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn confirmed_delete_returns_to_list() {
    let (client, store) = common::spawn_server().await;
    let created = client.create_loadout(&common::new_loadout("Alpha")).await.unwrap();
    let detail = LoadoutDetail::fetch(&client, created.id).await.unwrap();

    let outcome = detail.delete(&client, |_| true).await;
    assert_eq!(
        outcome,
        DeleteOutcome::Deleted {
            alert: DELETED.to_string(),
            next: Navigation::List,
        }
    );
    assert!(store.run(|a| a.loadouts().list()).await.unwrap().is_empty());

    let again = detail.delete(&client, |_| true).await;
    assert_eq!(
        again,
        DeleteOutcome::Failed {
            alert: "Loadout not found".to_string()
        }
    );
}

#[tokio::test]
async fn fetch_of_missing_loadout_fails() {
    let (client, _) = common::spawn_server().await;
    let err = LoadoutDetail::fetch(&client, 42).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.user_message("load loadout"), "Error: Loadout not found");
}

#[test]
fn default_client_targets_local_server() {
    assert_eq!(ArmoryClient::default().base_url(), "http://localhost:3001");
    assert_eq!(
        ArmoryClient::new("http://example.test/").base_url(),
        "http://example.test"
    );
}
