mod countdown;
mod date;
mod event;
mod labels;
mod resolver;
mod shared;

pub use countdown::{format_countdown, Countdown};
pub use event::GameEvent;
pub use labels::{LabelKey, ScheduleLabels};
pub use resolver::{
    resolve_next_occurrence, upcoming_occurrences, FALLBACK_DELAY_MILLIS,
    MAX_UPCOMING_OCCURRENCES,
};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::recurrence::{
    InvalidRecurrenceError, RecurrenceDescriptor, ScheduleType, TimeOfDay,
};

pub use chrono::{DateTime, Utc};
pub use chrono_tz::Tz;
