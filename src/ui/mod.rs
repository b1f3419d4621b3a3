//! Per-view client state.
//!
//! Each view owns its state explicitly; nothing is shared between views
//! except what they fetch from the server.

pub mod assets;
pub mod builder;
pub mod catalog;
pub mod detail;
pub mod list;

pub use builder::{LoadoutBuilder, Mode, Phase};
pub use catalog::{Catalog, SelectedItem};
pub use detail::{DeleteOutcome, LoadoutDetail};
pub use list::{LoadoutCard, LoadoutList};

/// Where a view sends the user after a successful action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    List,
    Detail(i64),
}

impl Navigation {
    pub fn path(&self) -> String {
        match self {
            Navigation::List => "/loadouts".to_string(),
            Navigation::Detail(id) => format!("/loadout/{id}"),
        }
    }
}

/// Prices render with two decimals: `$17.50`.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
