use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::billing::models::{AuthResponse, AuthSession, DebitNoteRequest, ReceiptRequest};
use crate::billing::ChargeService;
use crate::error::{AppError, AppResult};

/// HTTP client for the remote billing API. Wraps the base endpoint and
/// sends form-encoded POSTs, which is what the API's handlers parse.
pub struct BillingClient {
    http: Client,
    base_url: String,
}

impl BillingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// One authentication handshake. The returned session authorizes every
    /// subsequent call via `Authorization: Bearer <token>`.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<AuthSession> {
        let endpoint = format!("{}/authenticate", self.base_url);
        info!("Authenticating against {}", endpoint);

        let response = self
            .http
            .post(&endpoint)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(AppError::Auth(format!(
                "/authenticate returned status {}",
                status
            )));
        }

        let user: AuthResponse = response.json().await?;
        info!("✓ Authenticated as {} (user id {})", user.username, user.id);

        Ok(AuthSession {
            token: user.token,
            user_id: user.id,
        })
    }

    async fn post_form<T>(&self, session: &AuthSession, path: &str, form: &T) -> AppResult<()>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = format!("{}{}", self.base_url, path);
        info!("Sending POST request to {}", endpoint);

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&session.token)
            .form(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(AppError::RemoteCall {
                endpoint: path.to_string(),
                status,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl ChargeService for BillingClient {
    async fn post_debit_note(
        &self,
        session: &AuthSession,
        request: &DebitNoteRequest,
    ) -> AppResult<()> {
        self.post_form(session, "/contract/debitnote", request).await
    }

    async fn post_receipt(
        &self,
        session: &AuthSession,
        request: &ReceiptRequest,
    ) -> AppResult<()> {
        self.post_form(session, "/contract/receipt", request).await
    }
}
