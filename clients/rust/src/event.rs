use crate::{APIResponse, BaseClient, ID};
use mu_events_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct EventClient {
    base: Arc<BaseClient>,
}

pub struct GetEventOccurrencesInput {
    pub event_id: ID,
    pub count: Option<usize>,
}

impl EventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self) -> APIResponse<get_events::APIResponse> {
        self.base.get("events".into(), StatusCode::OK).await
    }

    pub async fn get(&self, event_id: ID) -> APIResponse<get_event::APIResponse> {
        self.base
            .get(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn get_occurrences(
        &self,
        input: GetEventOccurrencesInput,
    ) -> APIResponse<get_event_occurrences::APIResponse> {
        let path = match input.count {
            Some(count) => format!("events/{}/occurrences?count={}", input.event_id, count),
            None => format!("events/{}/occurrences", input.event_id),
        };
        self.base.get(path, StatusCode::OK).await
    }
}
