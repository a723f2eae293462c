use super::ResolvedEvent;
use crate::{
    error::MuEventsError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use mu_events_api_structs::get_event_occurrences::*;
use mu_events_domain::{ID, MAX_UPCOMING_OCCURRENCES};
use mu_events_infra::MuEventsContext;

const DEFAULT_OCCURRENCES_COUNT: usize = 5;

fn handle_error(e: UseCaseErrors) -> MuEventsError {
    match e {
        UseCaseErrors::NotFound(event_id) => MuEventsError::NotFound(format!(
            "The event with id: {}, was not found.",
            event_id
        )),
        UseCaseErrors::InvalidCount(count) => MuEventsError::BadClientData(format!(
            "The requested count: {} must be between 1 and {}.",
            count, MAX_UPCOMING_OCCURRENCES
        )),
    }
}

pub async fn get_event_occurrences_controller(
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<MuEventsContext>,
) -> Result<HttpResponse, MuEventsError> {
    let usecase = GetEventOccurrencesUseCase {
        event_id: path_params.event_id.clone(),
        count: query_params.count.unwrap_or(DEFAULT_OCCURRENCES_COUNT),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let event = res.event.into_dto(&ctx.config.happening_now_text);
            HttpResponse::Ok().json(APIResponse::new(event, res.occurrences))
        })
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetEventOccurrencesUseCase {
    pub event_id: ID,
    pub count: usize,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub event: ResolvedEvent,
    pub occurrences: Vec<i64>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    InvalidCount(usize),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventOccurrencesUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &MuEventsContext) -> Result<Self::Response, Self::Errors> {
        if self.count == 0 || self.count > MAX_UPCOMING_OCCURRENCES {
            return Err(UseCaseErrors::InvalidCount(self.count));
        }

        let now = ctx.sys.get_timestamp_millis();
        let event = match ctx.repos.event_repo.find(&self.event_id).await {
            Some(event) if event.enabled => event,
            _ => return Err(UseCaseErrors::NotFound(self.event_id.clone())),
        };

        let occurrences = event.upcoming_occurrences(now, &ctx.config.timezone, self.count);
        Ok(UseCaseResponse {
            event: ResolvedEvent::new(event, now, ctx),
            occurrences,
        })
    }
}
