use super::ResolvedEvent;
use crate::{
    error::MuEventsError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use mu_events_api_structs::get_event::*;
use mu_events_domain::ID;
use mu_events_infra::MuEventsContext;

fn handle_error(e: UseCaseErrors) -> MuEventsError {
    match e {
        UseCaseErrors::NotFound(event_id) => MuEventsError::NotFound(format!(
            "The event with id: {}, was not found.",
            event_id
        )),
    }
}

pub async fn get_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<MuEventsContext>,
) -> Result<HttpResponse, MuEventsError> {
    let usecase = GetEventUseCase {
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| {
            let event = event.into_dto(&ctx.config.happening_now_text);
            HttpResponse::Ok().json(APIResponse::new(event))
        })
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetEventUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventUseCase {
    type Response = ResolvedEvent;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &MuEventsContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        match ctx.repos.event_repo.find(&self.event_id).await {
            Some(event) if event.enabled => Ok(ResolvedEvent::new(event, now, ctx)),
            _ => Err(UseCaseErrors::NotFound(self.event_id.clone())),
        }
    }
}
