use crate::{
    date::{datetime_in, local_instant, start_of_day},
    shared::recurrence::{RecurrenceDescriptor, TimeOfDay},
};
use chrono::{prelude::*, Duration};
use chrono_tz::Tz;

/// Delay used for descriptors that can not be resolved
pub const FALLBACK_DELAY_MILLIS: i64 = 1000 * 60 * 60;

/// Upper bound on how many occurrences `upcoming_occurrences` resolves
pub const MAX_UPCOMING_OCCURRENCES: usize = 50;

const MINUTE_MILLIS: i64 = 1000 * 60;

fn fallback(now_ts: i64) -> i64 {
    now_ts + FALLBACK_DELAY_MILLIS
}

/// Computes the next time the event described by `descriptor` happens after
/// `now_ts`, with calendar days taken in the timezone `tz`.
///
/// The returned timestamp is strictly after `now_ts` for every repeating
/// descriptor. A `Specific` descriptor is returned as is, also when it has
/// already passed, so callers can tell an event that is happening from one
/// that is upcoming. Degenerate descriptors resolve to one hour from now.
pub fn resolve_next_occurrence(descriptor: &RecurrenceDescriptor, now_ts: i64, tz: &Tz) -> i64 {
    let resolved = match descriptor {
        RecurrenceDescriptor::Recurring {
            interval_hours,
            interval_minutes,
        } => next_recurring(*interval_hours, *interval_minutes, now_ts, tz),
        RecurrenceDescriptor::Daily { daily_times } => next_daily(daily_times, now_ts, tz),
        RecurrenceDescriptor::Weekly {
            weekly_day: Some(weekly_day),
            weekly_time: Some(weekly_time),
        } => next_weekly(*weekly_day, weekly_time, now_ts, tz),
        RecurrenceDescriptor::Specific {
            specific_instant: Some(instant),
        } => Some(instant.timestamp_millis()),
        _ => None,
    };

    resolved.unwrap_or_else(|| fallback(now_ts))
}

/// Resolves up to `count` consecutive occurrences starting after `now_ts`.
/// Descriptors that do not repeat yield a single occurrence.
pub fn upcoming_occurrences(
    descriptor: &RecurrenceDescriptor,
    now_ts: i64,
    tz: &Tz,
    count: usize,
) -> Vec<i64> {
    let count = count.min(MAX_UPCOMING_OCCURRENCES);
    let mut occurrences = Vec::with_capacity(count);
    let mut cursor = now_ts;
    for _ in 0..count {
        let next = resolve_next_occurrence(descriptor, cursor, tz);
        occurrences.push(next);
        if !descriptor.is_repeating() || next <= cursor {
            break;
        }
        cursor = next;
    }
    occurrences
}

fn next_recurring(hours: u32, minutes: u32, now_ts: i64, tz: &Tz) -> Option<i64> {
    let cycle = (i64::from(hours) * 60 + i64::from(minutes)) * MINUTE_MILLIS;
    // Misconfigured, rejected when loading events
    if cycle <= 0 {
        return None;
    }
    let now = datetime_in(now_ts, tz)?;
    let anchor = start_of_day(&now)?.timestamp_millis();

    // Same as adding whole cycles to the anchor until passing now
    let cycles = (now_ts - anchor).div_euclid(cycle) + 1;
    Some(anchor + cycles * cycle)
}

fn next_daily(times: &[TimeOfDay], now_ts: i64, tz: &Tz) -> Option<i64> {
    let first = times.first()?;
    let today = datetime_in(now_ts, tz)?.date_naive();

    for time in times {
        if let Some(candidate) = local_instant(tz, today, time) {
            let candidate = candidate.timestamp_millis();
            if candidate > now_ts {
                return Some(candidate);
            }
        }
    }

    let tomorrow = today.succ_opt()?;
    local_instant(tz, tomorrow, first).map(|dt| dt.timestamp_millis())
}

fn next_weekly(weekday: u8, time: &TimeOfDay, now_ts: i64, tz: &Tz) -> Option<i64> {
    if weekday > 6 {
        return None;
    }
    let now = datetime_in(now_ts, tz)?;
    let today = now.date_naive();
    let current = i64::from(now.weekday().num_days_from_sunday());
    let days_until = (i64::from(weekday) - current).rem_euclid(7);

    let candidate = local_instant(tz, today + Duration::days(days_until), time)?;
    let candidate = candidate.timestamp_millis();
    if candidate > now_ts {
        return Some(candidate);
    }

    local_instant(tz, today + Duration::days(days_until + 7), time)
        .map(|dt| dt.timestamp_millis())
}
