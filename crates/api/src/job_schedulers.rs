use actix_web::rt::time::{interval, sleep};
use chrono_tz::Tz;
use mu_events_domain::{GameEvent, ID};
use mu_events_infra::MuEventsContext;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

/// Millis until the next multiple of `interval_millis`
pub fn get_start_delay(now_ts: i64, interval_millis: i64) -> i64 {
    interval_millis - now_ts.rem_euclid(interval_millis)
}

/// Keeps the occurrences resolved on the previous tick to find the events
/// that started since then.
#[derive(Debug, Default)]
pub struct EventStartTracker {
    last_tick_ts: Option<i64>,
    upcoming: HashMap<ID, i64>,
}

impl EventStartTracker {
    pub fn new() -> Self {
        Default::default()
    }

    /// Re-resolves `events` at `now_ts` and returns those whose previously
    /// resolved occurrence is in `(last tick, now_ts]`
    pub fn tick<'a>(
        &mut self,
        events: &'a [GameEvent],
        now_ts: i64,
        tz: &Tz,
    ) -> Vec<&'a GameEvent> {
        let mut started = Vec::new();
        let mut upcoming = HashMap::with_capacity(events.len());

        for event in events {
            if let (Some(last_tick_ts), Some(previous)) =
                (self.last_tick_ts, self.upcoming.get(&event.id))
            {
                if *previous > last_tick_ts && *previous <= now_ts {
                    started.push(event);
                }
            }
            upcoming.insert(event.id.clone(), event.next_occurrence(now_ts, tz));
        }

        self.upcoming = upcoming;
        self.last_tick_ts = Some(now_ts);
        started
    }
}

pub fn start_countdown_ticker(ctx: MuEventsContext) {
    actix_web::rt::spawn(async move {
        let interval_millis = ctx.config.countdown_tick_interval_millis.max(1);
        let now = ctx.sys.get_timestamp_millis();
        let delay = get_start_delay(now, interval_millis as i64);
        sleep(Duration::from_millis(delay as u64)).await;

        let mut ticker = interval(Duration::from_millis(interval_millis));
        let mut tracker = EventStartTracker::new();
        loop {
            ticker.tick().await;
            let events = ctx.repos.event_repo.find_enabled().await;
            let now = ctx.sys.get_timestamp_millis();
            let started = tracker.tick(&events, now, &ctx.config.timezone);
            for event in started {
                info!(event_id = %event.id, "Event: {} started", event.name);
            }
            debug!("Countdown tick at {} for {} events", now, events.len());
        }
    });
}
