//! NFC key-card operations.

use crate::dispatcher::RequestDispatcher;
use crate::error::AccessGridError;
use crate::request::{json_body, ApiRequest};
use model::{Card, CardList, ListCardsParams, ProvisionCardParams, UpdateCardParams};
use std::sync::Arc;

const KEY_CARDS_PATH: &str = "/v1/key-cards";

/// Key-card provisioning and lifecycle management.
#[derive(Debug, Clone)]
pub struct AccessCards {
    dispatcher: Arc<RequestDispatcher>,
}

impl AccessCards {
    /// Create the resource client on top of a shared dispatcher.
    pub fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self { dispatcher }
    }

    // ========================================================================
    // Provisioning
    // ========================================================================

    /// Provision a new key card.
    ///
    /// POST /v1/key-cards
    pub async fn provision(&self, params: &ProvisionCardParams) -> Result<Card, AccessGridError> {
        let request = ApiRequest::post(KEY_CARDS_PATH).with_body(json_body(params)?);

        let card: Card = self.dispatcher.dispatch_as(request).await?;

        tracing::info!(
            card_id = %card.id,
            template_id = %params.card_template_id,
            "Key card provisioned"
        );

        Ok(card)
    }

    /// Alias for [`provision`](Self::provision).
    pub async fn issue(&self, params: &ProvisionCardParams) -> Result<Card, AccessGridError> {
        self.provision(params).await
    }

    /// Fetch a single key card.
    ///
    /// GET /v1/key-cards/{card_id}
    pub async fn get(&self, card_id: &str) -> Result<Card, AccessGridError> {
        self.dispatcher
            .dispatch_as(ApiRequest::get(card_path(card_id)))
            .await
    }

    /// Update a key card's holder details.
    ///
    /// PATCH /v1/key-cards/{card_id}
    pub async fn update(&self, params: &UpdateCardParams) -> Result<Card, AccessGridError> {
        let request = ApiRequest::patch(card_path(&params.card_id)).with_body(json_body(params)?);

        let card: Card = self.dispatcher.dispatch_as(request).await?;
        tracing::info!(card_id = %params.card_id, "Key card updated");

        Ok(card)
    }

    /// List key cards issued from a template.
    ///
    /// GET /v1/key-cards?template_id=...&state=...
    pub async fn list(&self, params: &ListCardsParams) -> Result<Vec<Card>, AccessGridError> {
        let mut request =
            ApiRequest::get(KEY_CARDS_PATH).with_query("template_id", params.template_id.as_str());

        if let Some(state) = params.state {
            request = request.with_query("state", state.as_str());
        }

        let list: CardList = self.dispatcher.dispatch_as(request).await?;

        tracing::debug!(
            template_id = %params.template_id,
            count = list.keys.len(),
            "Listed key cards"
        );

        Ok(list.keys)
    }

    // ========================================================================
    // State transitions
    // ========================================================================

    /// Suspend a key card.
    ///
    /// POST /v1/key-cards/{card_id}/suspend
    pub async fn suspend(&self, card_id: &str) -> Result<Card, AccessGridError> {
        self.transition(card_id, "suspend").await
    }

    /// Resume a suspended key card.
    ///
    /// POST /v1/key-cards/{card_id}/resume
    pub async fn resume(&self, card_id: &str) -> Result<Card, AccessGridError> {
        self.transition(card_id, "resume").await
    }

    /// Unlink a key card from its device.
    ///
    /// POST /v1/key-cards/{card_id}/unlink
    pub async fn unlink(&self, card_id: &str) -> Result<Card, AccessGridError> {
        self.transition(card_id, "unlink").await
    }

    /// Permanently delete a key card.
    ///
    /// POST /v1/key-cards/{card_id}/delete
    pub async fn delete(&self, card_id: &str) -> Result<Card, AccessGridError> {
        self.transition(card_id, "delete").await
    }

    async fn transition(&self, card_id: &str, action: &str) -> Result<Card, AccessGridError> {
        let path = format!("{}/{action}", card_path(card_id));
        let card: Card = self.dispatcher.dispatch_as(ApiRequest::post(path)).await?;

        tracing::info!(
            card_id = %card_id,
            action = action,
            state = ?card.state,
            "Key card state changed"
        );

        Ok(card)
    }
}

fn card_path(card_id: &str) -> String {
    format!("{KEY_CARDS_PATH}/{card_id}")
}
