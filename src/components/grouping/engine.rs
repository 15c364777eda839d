use super::models::{Event, Group, GroupMember};
use super::normalize::TitleNormalizer;
use super::similarity::SimilarityScorer;
use crate::config::GroupingConfig;
use chrono::{DateTime, Utc};
use tracing::{debug, trace};

/// Event with its derived group key and role label
#[derive(Debug)]
struct AnnotatedEvent<'a> {
    event: &'a Event,
    base_title: &'a str,
    type_label: &'a str,
}

impl AnnotatedEvent<'_> {
    fn member(&self) -> GroupMember {
        GroupMember {
            label: self.type_label.to_string(),
            event: self.event.clone(),
        }
    }
}

/// Partitions calendar events into groups of the same recurring activity
#[derive(Debug, Clone)]
pub struct EventGrouper {
    scorer: SimilarityScorer,
    threshold: f64,
}

impl Default for EventGrouper {
    fn default() -> Self {
        Self::new(&GroupingConfig::default())
    }
}

impl EventGrouper {
    pub fn new(config: &GroupingConfig) -> Self {
        Self {
            scorer: SimilarityScorer::new(TitleNormalizer::new(config)),
            threshold: config.similarity_threshold(),
        }
    }

    pub fn normalizer(&self) -> &TitleNormalizer {
        self.scorer.normalizer()
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn is_similar(&self, a: &str, b: &str) -> bool {
        self.scorer.similarity(a, b) >= self.threshold
    }

    /// Group events by title similarity and chronological adjacency.
    ///
    /// Every input event ends up in exactly one group. Members are ordered by
    /// start time and groups by the start time of their first member. Events
    /// with equal start times keep their input order.
    pub fn group(&self, events: &[Event]) -> Vec<Group> {
        let mut sorted: Vec<&Event> = events.iter().collect();
        sorted.sort_by_key(|event| event.start_time);

        let normalizer = self.normalizer();
        let annotated: Vec<AnnotatedEvent> = sorted
            .into_iter()
            .map(|event| AnnotatedEvent {
                event,
                base_title: normalizer.strip_event_type(&event.title),
                type_label: normalizer.find_event_type(&event.title),
            })
            .collect();

        let mut processed = vec![false; annotated.len()];
        let mut groups: Vec<Group> = Vec::new();

        for (index, current) in annotated.iter().enumerate() {
            if processed[index] {
                continue;
            }

            let mut similar: Vec<usize> = (0..annotated.len())
                .filter(|&other| other != index && !processed[other])
                .filter(|&other| self.is_similar(&current.event.title, &annotated[other].event.title))
                .collect();

            let mut group = Group::new(&current.event.id, current.base_title);
            group.members.push(current.member());
            processed[index] = true;

            if similar.is_empty() {
                groups.push(group);
                continue;
            }

            similar.sort_by_key(|&other| annotated[other].event.start_time);
            let mut last_time = current.event.start_time;

            for other in similar {
                let candidate = &annotated[other];
                let next_time = candidate.event.start_time;

                if self.has_intervening_event(&annotated, &processed, current, last_time, next_time) {
                    trace!(
                        "Splitting '{}' before event {}",
                        current.base_title,
                        candidate.event.id
                    );
                    let next_group = Group::new(&candidate.event.id, current.base_title);
                    groups.push(std::mem::replace(&mut group, next_group));
                }

                group.members.push(candidate.member());
                processed[other] = true;
                last_time = next_time;
            }

            groups.push(group);
        }

        groups.sort_by_key(|group| group.start_time());

        debug!("Grouped {} events into {} groups", events.len(), groups.len());
        groups
    }

    /// Whether an unprocessed event unrelated to `current` starts strictly
    /// between `after` and `before`
    fn has_intervening_event(
        &self,
        annotated: &[AnnotatedEvent],
        processed: &[bool],
        current: &AnnotatedEvent,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    ) -> bool {
        annotated.iter().enumerate().any(|(index, other)| {
            let start = other.event.start_time;
            !processed[index]
                && start > after
                && start < before
                && !self.is_similar(&other.event.title, &current.event.title)
        })
    }
}

/// Group events with the default keyword table and threshold
pub fn group_events(events: &[Event]) -> Vec<Group> {
    EventGrouper::default().group(events)
}
