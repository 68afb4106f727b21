//! Enterprise console operations: card templates and their event logs.

use crate::dispatcher::RequestDispatcher;
use crate::error::AccessGridError;
use crate::request::{json_body, ApiRequest};
use model::{CreateTemplateParams, EventLogFilters, EventLogPage, Template, UpdateTemplateParams};
use std::sync::Arc;

const TEMPLATES_PATH: &str = "/v1/console/card-templates";

/// Card template administration.
#[derive(Debug, Clone)]
pub struct Console {
    dispatcher: Arc<RequestDispatcher>,
}

impl Console {
    /// Create the resource client on top of a shared dispatcher.
    pub fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Create a card template.
    ///
    /// POST /v1/console/card-templates
    pub async fn create_template(
        &self,
        params: &CreateTemplateParams,
    ) -> Result<Template, AccessGridError> {
        let request = ApiRequest::post(TEMPLATES_PATH).with_body(json_body(params)?);

        let template: Template = self.dispatcher.dispatch_as(request).await?;
        tracing::info!(template_id = %template.id, name = %params.name, "Template created");

        Ok(template)
    }

    /// Update a card template.
    ///
    /// PUT /v1/console/card-templates/{template_id}
    pub async fn update_template(
        &self,
        params: &UpdateTemplateParams,
    ) -> Result<Template, AccessGridError> {
        let request =
            ApiRequest::put(template_path(&params.template_id)).with_body(json_body(params)?);

        let template: Template = self.dispatcher.dispatch_as(request).await?;
        tracing::info!(template_id = %params.template_id, "Template updated");

        Ok(template)
    }

    /// Read a card template.
    ///
    /// GET /v1/console/card-templates/{template_id}
    pub async fn read_template(&self, template_id: &str) -> Result<Template, AccessGridError> {
        self.dispatcher
            .dispatch_as(ApiRequest::get(template_path(template_id)))
            .await
    }

    /// Fetch the event log of a card template.
    ///
    /// GET /v1/console/card-templates/{template_id}/logs?filters[...]=...
    pub async fn get_event_logs(
        &self,
        template_id: &str,
        filters: &EventLogFilters,
    ) -> Result<EventLogPage, AccessGridError> {
        let request = filters.to_query_pairs().into_iter().fold(
            ApiRequest::get(format!("{}/logs", template_path(template_id))),
            |request, (key, value)| request.with_query(key, value),
        );

        let page: EventLogPage = self.dispatcher.dispatch_as(request).await?;

        tracing::debug!(
            template_id = %template_id,
            events = page.logs.len(),
            "Fetched event logs"
        );

        Ok(page)
    }
}

fn template_path(template_id: &str) -> String {
    format!("{TEMPLATES_PATH}/{template_id}")
}
