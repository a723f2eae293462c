mod get_event;
mod get_event_occurrences;
mod get_events;

use actix_web::web;
use get_event::get_event_controller;
use get_event_occurrences::get_event_occurrences_controller;
use get_events::get_events_controller;
use mu_events_api_structs::dtos::EventCountdownDTO;
use mu_events_domain::GameEvent;
use mu_events_infra::MuEventsContext;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::get().to(get_events_controller));
    cfg.route("/events/{event_id}", web::get().to(get_event_controller));
    cfg.route(
        "/events/{event_id}/occurrences",
        web::get().to(get_event_occurrences_controller),
    );
}

/// A `GameEvent` resolved against the clock at `now_ts`
#[derive(Debug, Clone)]
pub struct ResolvedEvent {
    pub event: GameEvent,
    pub next_occurrence_ts: i64,
    pub now_ts: i64,
}

impl ResolvedEvent {
    pub fn new(event: GameEvent, now_ts: i64, ctx: &MuEventsContext) -> Self {
        let next_occurrence_ts = event.next_occurrence(now_ts, &ctx.config.timezone);
        Self {
            event,
            next_occurrence_ts,
            now_ts,
        }
    }

    pub fn into_dto(self, happening_now: &str) -> EventCountdownDTO {
        EventCountdownDTO::new(
            self.event,
            self.next_occurrence_ts,
            self.now_ts,
            happening_now,
        )
    }
}
