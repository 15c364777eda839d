use chrono::{DateTime, Utc};

/// Calendar event as supplied by the importer
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Event {
    /// Create an event without location or description
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_time,
            end_time,
            location: None,
            description: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An event placed in a group, tagged with its role label
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GroupMember {
    pub label: String,
    pub event: Event,
}

/// A cluster of events belonging to the same production
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Group {
    /// Id of the earliest event placed in the group
    pub id: String,
    pub group_name: String,
    /// Members in ascending start time
    pub members: Vec<GroupMember>,
}

impl Group {
    pub(crate) fn new(id: &str, group_name: &str) -> Self {
        Self {
            id: id.to_string(),
            group_name: group_name.to_string(),
            members: Vec::new(),
        }
    }

    /// Start time of the first member
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.members.first().map(|m| m.event.start_time)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
