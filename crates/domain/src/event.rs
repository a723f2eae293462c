use crate::{
    countdown::Countdown,
    labels::{LabelKey, ScheduleLabels},
    resolver::{resolve_next_occurrence, upcoming_occurrences},
    shared::entity::{Entity, ID},
    shared::recurrence::{RecurrenceDescriptor, ScheduleType},
};
use chrono_tz::Tz;

/// A recurring in game event, e.g. Blood Castle or Castle Siege
#[derive(Debug, Clone)]
pub struct GameEvent {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub recurrence: RecurrenceDescriptor,
    /// Disabled events are hidden from the event board
    pub enabled: bool,
    /// Resolved from `recurrence` when the event is created
    pub schedule_label: LabelKey,
}

impl Entity for GameEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl GameEvent {
    pub fn new<T: Into<String>>(
        name: T,
        recurrence: RecurrenceDescriptor,
        labels: &ScheduleLabels,
    ) -> Self {
        let schedule_label = labels.label(recurrence.schedule_type());
        Self {
            id: Default::default(),
            name: name.into(),
            description: Default::default(),
            recurrence,
            enabled: true,
            schedule_label,
        }
    }

    pub fn schedule_type(&self) -> ScheduleType {
        self.recurrence.schedule_type()
    }

    pub fn next_occurrence(&self, now_ts: i64, tz: &Tz) -> i64 {
        resolve_next_occurrence(&self.recurrence, now_ts, tz)
    }

    pub fn upcoming_occurrences(&self, now_ts: i64, tz: &Tz, count: usize) -> Vec<i64> {
        upcoming_occurrences(&self.recurrence, now_ts, tz, count)
    }

    pub fn countdown(&self, now_ts: i64, tz: &Tz) -> Countdown {
        Countdown::between(self.next_occurrence(now_ts, tz), now_ts)
    }
}
