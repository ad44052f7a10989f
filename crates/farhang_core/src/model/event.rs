//! Cultural event listing model.

use serde::{Deserialize, Serialize};

/// Event kind. Wire values are the Persian labels shown in filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventType {
    #[default]
    All,
    #[serde(rename = "کنسرت")]
    Concert,
    #[serde(rename = "نمایشگاه")]
    Exhibition,
    #[serde(rename = "تئاتر")]
    Theater,
}

impl EventType {
    /// Every event type in tab order.
    pub const ALL: [EventType; 4] = [
        EventType::All,
        EventType::Concert,
        EventType::Exhibition,
        EventType::Theater,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Concert => "کنسرت",
            Self::Exhibition => "نمایشگاه",
            Self::Theater => "تئاتر",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLocation {
    pub name: String,
    pub map_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub event_type: EventType,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Local start time, Persian digits (e.g. `"۲۰:۰۰"`).
    pub time: String,
    pub location: EventLocation,
    pub image_url: String,
    pub description: String,
    pub ticket_url: String,
}

/// Returns events of the given type, preserving input order.
///
/// `EventType::All` returns the whole listing.
pub fn filter_events(events: &[Event], event_type: EventType) -> Vec<Event> {
    if event_type == EventType::All {
        return events.to_vec();
    }
    events
        .iter()
        .filter(|event| event.event_type == event_type)
        .cloned()
        .collect()
}
