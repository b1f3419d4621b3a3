mod common;

use std::io::Write;

use armory::models::{Equipment, ItemType};
use armory::{Armory, ArmoryError};

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[test]
fn list_returns_whole_catalog_by_name() {
    let armory = common::setup_sample_db();
    let items = armory.equipments().list().unwrap();

    assert_eq!(items.len(), 7);
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn list_round_trips_fields() {
    let armory = common::setup_sample_db();
    let items = armory.equipments().list().unwrap();
    let pistol = items.iter().find(|i| i.name == "Pistol").unwrap();

    assert_eq!(pistol.image, "Pistol.webp");
    assert_eq!(pistol.item_type, ItemType::SubWeapon);
    assert_eq!(pistol.price, 5.50);
}

#[test]
fn empty_store_lists_nothing() {
    let armory = Armory::builder().in_memory().build().unwrap();
    assert!(armory.equipments().list().unwrap().is_empty());
    assert_eq!(armory.equipments().count().unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[test]
fn get_by_exact_name() {
    let armory = common::setup_sample_db();
    let smoke = armory.equipments().get("Smoke").unwrap().unwrap();
    assert_eq!(smoke.item_type, ItemType::Gadget);
    assert_eq!(smoke.price, 2.00);

    assert!(armory.equipments().get("smoke").unwrap().is_none());
    assert!(armory.equipments().get("Railgun").unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

#[test]
fn import_replaces_existing_names() {
    let armory = common::setup_sample_db();
    let repriced = common::item("Smoke", ItemType::Gadget, 2.75);

    let n = armory.equipments().import(&[repriced]).unwrap();
    assert_eq!(n, 1);
    assert_eq!(armory.equipments().count().unwrap(), 7);
    assert_eq!(armory.equipments().get("Smoke").unwrap().unwrap().price, 2.75);
}

#[test]
fn import_is_all_or_nothing() {
    let armory = Armory::builder().in_memory().build().unwrap();
    let batch = vec![
        common::item("Assault Rifle", ItemType::PrimaryWeapon, 10.0),
        common::item("Broken", ItemType::Gadget, -1.0),
    ];

    assert!(armory.equipments().import(&batch).is_err());
    assert_eq!(armory.equipments().count().unwrap(), 0);
}

#[test]
fn import_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"[
            {{"name": "SMG", "image": "SMG.webp", "item_type": "primaryWeapon", "price": 8.75}},
            {{"name": "Flashbang", "image": "Flashbang.webp", "item_type": "gadget", "price": "2.50"}}
        ]"#
    )
    .unwrap();

    let armory = Armory::builder()
        .in_memory()
        .catalog(&path)
        .build()
        .unwrap();
    assert_eq!(armory.equipments().count().unwrap(), 2);
    assert_eq!(
        armory.equipments().get("Flashbang").unwrap().unwrap().price,
        2.50
    );
}

#[test]
fn import_catalog_file_missing_is_io_error() {
    let armory = Armory::builder().in_memory().build().unwrap();
    let err = armory
        .import_catalog_file(std::path::Path::new("/nonexistent/catalog.json"))
        .unwrap_err();
    assert!(matches!(err, ArmoryError::Io(_)));
}

#[test]
fn bundled_catalog_seeds() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/catalog.json");
    let armory = Armory::builder().in_memory().build().unwrap();

    let n = armory.import_catalog_file(&path).unwrap();
    assert_eq!(n, 11);
    let gadgets: Vec<Equipment> = armory
        .equipments()
        .list()
        .unwrap()
        .into_iter()
        .filter(|i| i.item_type == ItemType::Gadget)
        .collect();
    assert_eq!(gadgets.len(), 4);
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[test]
fn price_accepts_numeric_strings() {
    let item: Equipment = serde_json::from_str(
        r#"{"name": "Smoke", "image": "Smoke.webp", "item_type": "gadget", "price": " 2.00 "}"#,
    )
    .unwrap();
    assert_eq!(item.price, 2.0);
}

#[test]
fn unparseable_price_reads_as_zero() {
    let item: Equipment = serde_json::from_str(
        r#"{"name": "Smoke", "image": "Smoke.webp", "item_type": "gadget", "price": "free"}"#,
    )
    .unwrap();
    assert_eq!(item.price, 0.0);
}

#[test]
fn item_type_uses_camel_case() {
    let json = serde_json::to_value(common::item("Pistol", ItemType::SubWeapon, 5.5)).unwrap();
    assert_eq!(json["item_type"], "subWeapon");
}
