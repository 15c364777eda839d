// Export components
pub mod grouping;

// Re-export the grouping engine
pub use grouping::{group_events, Event, EventGrouper, Group, GroupMember, MonthBucket};
