use super::ResolvedEvent;
use crate::{
    error::MuEventsError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use mu_events_api_structs::get_events::*;
use mu_events_infra::MuEventsContext;

pub async fn get_events_controller(
    ctx: web::Data<MuEventsContext>,
) -> Result<HttpResponse, MuEventsError> {
    let usecase = GetEventsUseCase {};

    let happening_now = &ctx.config.happening_now_text;
    execute(usecase, &ctx)
        .await
        .map(|events| {
            let events = events
                .into_iter()
                .map(|e| e.into_dto(happening_now))
                .collect();
            HttpResponse::Ok().json(APIResponse::new(events))
        })
        .map_err(|e| match e {})
}

#[derive(Debug)]
pub struct GetEventsUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventsUseCase {
    type Response = Vec<ResolvedEvent>;

    type Errors = UseCaseErrors;

    /// Enabled events, soonest first
    async fn execute(&mut self, ctx: &MuEventsContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        let mut events = ctx
            .repos
            .event_repo
            .find_enabled()
            .await
            .into_iter()
            .map(|event| ResolvedEvent::new(event, now, ctx))
            .collect::<Vec<_>>();

        events.sort_by(|e1, e2| {
            e1.next_occurrence_ts
                .cmp(&e2.next_occurrence_ts)
                .then_with(|| e1.event.name.cmp(&e2.event.name))
        });

        Ok(events)
    }
}
