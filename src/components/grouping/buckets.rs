use super::engine::EventGrouper;
use super::models::{Event, Group};
use chrono::Datelike;
use chrono_tz::Tz;
use std::collections::BTreeMap;
use tracing::debug;

/// Groups for the events starting in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MonthBucket {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
    pub groups: Vec<Group>,
}

impl EventGrouper {
    /// Split events by the month they start in (in `timezone`) and group each
    /// month on its own. Buckets are returned in chronological order and
    /// months without events are left out.
    pub fn group_by_month(&self, events: &[Event], timezone: &Tz) -> Vec<MonthBucket> {
        let mut months: BTreeMap<(i32, u32), Vec<Event>> = BTreeMap::new();

        for event in events {
            let local = event.start_time.with_timezone(timezone);
            months
                .entry((local.year(), local.month()))
                .or_default()
                .push(event.clone());
        }

        debug!("Bucketed {} events into {} months", events.len(), months.len());

        months
            .into_iter()
            .map(|((year, month), events)| MonthBucket {
                year,
                month,
                groups: self.group(&events),
            })
            .collect()
    }
}
