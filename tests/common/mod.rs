//! Shared test fixtures for the armory integration tests.
//!
//! Provides `setup_sample_db()`, an in-memory store seeded with a small
//! catalog, and `spawn_server()`, which serves that store on an ephemeral
//! port and returns a client pointed at it.

#![allow(dead_code)]

use armory::models::{Equipment, ItemType, NewLoadout};
use armory::{server, Armory, ArmoryClient, AsyncArmory};

pub fn item(name: &str, item_type: ItemType, price: f64) -> Equipment {
    Equipment {
        name: name.to_string(),
        image: format!("{}.webp", name.replace(' ', "")),
        item_type,
        price,
    }
}

/// Two primaries, two subs, three gadgets.
pub fn sample_catalog() -> Vec<Equipment> {
    vec![
        item("Assault Rifle", ItemType::PrimaryWeapon, 10.00),
        item("Shotgun", ItemType::PrimaryWeapon, 9.00),
        item("Pistol", ItemType::SubWeapon, 5.50),
        item("Revolver", ItemType::SubWeapon, 7.00),
        item("Smoke", ItemType::Gadget, 2.00),
        item("Frag Grenade", ItemType::Gadget, 3.00),
        item("Claymore", ItemType::Gadget, 4.00),
    ]
}

/// In-memory store holding `sample_catalog()` and no loadouts.
pub fn setup_sample_db() -> Armory {
    let armory = Armory::builder().in_memory().build().unwrap();
    armory.equipments().import(&sample_catalog()).unwrap();
    armory
}

/// A valid create request built from the sample catalog.
pub fn new_loadout(name: &str) -> NewLoadout {
    NewLoadout {
        name: name.to_string(),
        primary_weapon: "Assault Rifle".to_string(),
        sub_weapon: "Pistol".to_string(),
        gadget1: "Smoke".to_string(),
        gadget2: "Frag Grenade".to_string(),
        price: Some(20.50),
    }
}

/// Serve `setup_sample_db()` on 127.0.0.1 with an OS-assigned port.
///
/// Returns a client for the server and the store behind it, so tests can
/// inspect state directly.
pub async fn spawn_server() -> (ArmoryClient, AsyncArmory) {
    let store = AsyncArmory::new(setup_sample_db());
    let app = server::router(store.clone(), None);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (ArmoryClient::new(format!("http://{addr}")), store)
}
