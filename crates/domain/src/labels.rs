use crate::shared::recurrence::ScheduleType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Localization key of a display text. Translating it is up to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelKey(String);

impl LabelKey {
    pub fn new<T: Into<String>>(key: T) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LabelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lookup from `ScheduleType` to the label shown next to an event.
/// Built once and consulted when events are loaded.
#[derive(Debug, Clone)]
pub struct ScheduleLabels {
    labels: HashMap<ScheduleType, LabelKey>,
}

impl ScheduleLabels {
    pub fn new() -> Self {
        let labels = vec![
            (ScheduleType::Recurring, "events.schedule.recurring"),
            (ScheduleType::Daily, "events.schedule.daily"),
            (ScheduleType::Weekly, "events.schedule.weekly"),
            (ScheduleType::Specific, "events.schedule.specific"),
            (ScheduleType::Unknown, "events.schedule.unknown"),
        ]
        .into_iter()
        .map(|(schedule_type, key)| (schedule_type, LabelKey::new(key)))
        .collect();

        Self { labels }
    }

    pub fn with_label(mut self, schedule_type: ScheduleType, key: LabelKey) -> Self {
        self.labels.insert(schedule_type, key);
        self
    }

    pub fn label(&self, schedule_type: ScheduleType) -> LabelKey {
        self.labels
            .get(&schedule_type)
            .or_else(|| self.labels.get(&ScheduleType::Unknown))
            .cloned()
            .unwrap_or_else(|| LabelKey::new("events.schedule.unknown"))
    }
}

impl Default for ScheduleLabels {
    fn default() -> Self {
        Self::new()
    }
}
