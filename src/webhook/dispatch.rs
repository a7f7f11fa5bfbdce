//! Ticket request dispatcher.

use http::HeaderValue;
use http::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::payload::TicketRequest;

use super::{DispatchError, HttpClient, HttpRequest, HttpResponse};

/// Sends ticket requests to the raffle service endpoint.
///
/// Serializes a [`TicketRequest`] and POSTs it as JSON with bearer
/// authentication. Retries are deliberately absent: the caller interprets
/// the single response (or transport failure) into user feedback and the
/// raffle service deduplicates re-validations on its side.
///
/// # Type Parameters
///
/// - `C`: The HTTP client implementation
#[derive(Debug)]
pub struct TicketDispatcher<C> {
    client: C,
    url: url::Url,
    api_key: String,
}

impl<C> TicketDispatcher<C> {
    /// Creates a dispatcher for the given endpoint and credential.
    #[must_use]
    pub const fn new(client: C, url: url::Url, api_key: String) -> Self {
        Self {
            client,
            url,
            api_key,
        }
    }

    /// Returns the configured endpoint URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }
}

impl<C: HttpClient> TicketDispatcher<C> {
    /// Builds the HTTP request for the given payload.
    fn build_request(&self, payload: &TicketRequest) -> Result<HttpRequest, DispatchError> {
        let body = serde_json::to_vec(payload)?;

        let bearer = format!("Bearer {}", self.api_key);
        let auth = HeaderValue::from_str(&bearer).map_err(|_| DispatchError::Credential)?;

        Ok(HttpRequest::post(self.url.clone(), body)
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_header(AUTHORIZATION, auth))
    }

    /// Sends a ticket request and returns the raw response.
    ///
    /// Non-2xx statuses are NOT errors here; they carry meaning (duplicate,
    /// disabled, bad key) and are interpreted by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if the payload cannot be serialized, the
    /// API key is not a valid header value, or the transport fails.
    pub async fn dispatch(&self, payload: &TicketRequest) -> Result<HttpResponse, DispatchError> {
        let request = self.build_request(payload)?;

        tracing::debug!(
            url = %self.url,
            reference = %payload.reference,
            "Posting ticket request"
        );

        let response = self.client.request(request).await?;

        tracing::debug!(
            status = %response.status,
            body = response.body_text().unwrap_or("<non-utf8 body>"),
            "Raffle service answered"
        );

        Ok(response)
    }
}
