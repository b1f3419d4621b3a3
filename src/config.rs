use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3001";
pub const DATABASE_FILE: &str = "armory.duckdb";

/// URL prefix the server mounts the assets directory under.
pub const ASSETS_MOUNT: &str = "/assets";
pub const DETAIL_IMAGE_EXTENSION: &str = "webp";
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://placehold.co/150x100/2d3748/ffffff";

/// Schema bootstrap, run on every open. Idempotent.
///
/// Slot columns on `loadouts` are plain text copies of equipment names, not
/// foreign keys.
pub const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS equipments (
    name VARCHAR PRIMARY KEY,
    image VARCHAR NOT NULL,
    item_type VARCHAR NOT NULL CHECK (item_type IN ('primaryWeapon', 'subWeapon', 'gadget')),
    price DOUBLE NOT NULL CHECK (price >= 0)
);
CREATE SEQUENCE IF NOT EXISTS loadouts_id_seq START 1;
CREATE TABLE IF NOT EXISTS loadouts (
    id INTEGER PRIMARY KEY DEFAULT nextval('loadouts_id_seq'),
    name VARCHAR NOT NULL UNIQUE,
    primaryweapon VARCHAR NOT NULL,
    subweapon VARCHAR NOT NULL,
    gadget1 VARCHAR NOT NULL,
    gadget2 VARCHAR NOT NULL,
    price DOUBLE
);";

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("armory")
    } else {
        PathBuf::from(".armory-data")
    }
}

pub fn default_database_path() -> PathBuf {
    default_data_dir().join(DATABASE_FILE)
}
