#[macro_use]
extern crate rust_i18n;

pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod startup;
pub mod utils;

pub use components::grouping::{group_events, Event, EventGrouper, Group, GroupMember};
pub use config::GroupingConfig;

// Initialize i18n
i18n!("locales", fallback = "en");
