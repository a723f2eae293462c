use chrono::prelude::*;
use mu_events_domain::{GameEvent, RecurrenceDescriptor, ScheduleLabels, TimeOfDay};

pub fn utc_ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
        .timestamp_millis()
}

pub fn time(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

pub fn game_event(name: &str, recurrence: RecurrenceDescriptor) -> GameEvent {
    GameEvent::new(name, recurrence, &ScheduleLabels::new())
}

pub fn recurring_event(name: &str, interval_hours: u32, interval_minutes: u32) -> GameEvent {
    game_event(
        name,
        RecurrenceDescriptor::Recurring {
            interval_hours,
            interval_minutes,
        },
    )
}

pub fn daily_event(name: &str, times: &[&str]) -> GameEvent {
    game_event(
        name,
        RecurrenceDescriptor::Daily {
            daily_times: times.iter().map(|t| time(t)).collect(),
        },
    )
}

pub fn weekly_event(name: &str, weekly_day: u8, weekly_time: &str) -> GameEvent {
    game_event(
        name,
        RecurrenceDescriptor::Weekly {
            weekly_day: Some(weekly_day),
            weekly_time: Some(time(weekly_time)),
        },
    )
}
