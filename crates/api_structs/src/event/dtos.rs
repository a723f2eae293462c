use mu_events_domain::{Countdown, GameEvent, LabelKey, RecurrenceDescriptor, ScheduleType, ID};
use serde::{Deserialize, Serialize};

/// A `GameEvent` together with when it next happens, as seen at one instant
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventCountdownDTO {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub schedule_type: ScheduleType,
    pub schedule_label: LabelKey,
    pub recurrence: RecurrenceDescriptor,
    pub next_occurrence_ts: i64,
    pub countdown: String,
    pub seconds_remaining: i64,
}

impl EventCountdownDTO {
    pub fn new(
        event: GameEvent,
        next_occurrence_ts: i64,
        now_ts: i64,
        happening_now: &str,
    ) -> Self {
        let countdown = Countdown::between(next_occurrence_ts, now_ts);
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            schedule_type: event.recurrence.schedule_type(),
            schedule_label: event.schedule_label,
            recurrence: event.recurrence,
            next_occurrence_ts,
            countdown: countdown.format(happening_now),
            seconds_remaining: countdown.seconds_remaining(),
        }
    }
}
