//! Event grouping: clusters calendar events into cards of the same production.
//!
//! Titles are split into an event-type label ("Rehearsal") and a base name
//! ("Gala Night"), scored pairwise by word overlap, and grouped in start-time
//! order. A group is split whenever an unrelated event falls between two of
//! its members.

mod buckets;
mod cards;
mod engine;
pub mod models;
mod normalize;
mod similarity;

pub use buckets::MonthBucket;
pub use cards::{render_cards, render_month_buckets};
pub use engine::{group_events, EventGrouper};
pub use models::{Event, Group, GroupMember};
pub use normalize::TitleNormalizer;
pub use similarity::SimilarityScorer;
