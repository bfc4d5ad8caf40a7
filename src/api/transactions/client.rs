use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use super::models::{ApiError, ErrorResponse, NewTransaction, Transaction, TransactionId};
use tracing::{debug, warn};

/// REST client for the transaction store
#[derive(Debug, Clone)]
pub struct TransactionsClient {
    http_client: HttpClient,
    base_url: String,
}

impl TransactionsClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5000/api";

    /// Create a client with a custom base URL, e.g. `http://host:5000/api`
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transactions_url(&self) -> String {
        format!("{}/transactions", self.base_url)
    }

    fn transaction_url(&self, id: TransactionId) -> String {
        format!("{}/transactions/{}", self.base_url, id)
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Pull the message out of a `{"error": "..."}` body, falling back to the raw text
    fn error_message(body_text: String) -> String {
        match serde_json::from_str::<ErrorResponse>(&body_text) {
            Ok(ErrorResponse { error: Some(msg), .. }) => msg,
            Ok(ErrorResponse { message: Some(msg), .. }) => msg,
            _ => body_text,
        }
    }

    /// Map a non-success response to an [`ApiError`]
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();
        let message = Self::error_message(body_text);

        match status_code {
            400 => ApiError::BadRequest(message),
            404 => ApiError::NotFound(message),
            500..=599 => {
                warn!("Store error {}: {}", status_code, message);
                ApiError::ServerError(status_code, message)
            }
            _ => ApiError::HttpError(status_code, message),
        }
    }

    /// GET /transactions
    ///
    /// Lists every stored transaction in the order the store returns them
    /// (newest first for the reference store).
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let url = self.transactions_url();
        debug!("GET {}", url);

        let response = self.http_client
            .get(&url)
            .headers(Self::create_headers())
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<Vec<Transaction>>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// POST /transactions
    ///
    /// Creates a transaction. The store assigns `id` and `date` and echoes the
    /// stored record back.
    pub async fn create_transaction(&self, body: &NewTransaction) -> Result<Transaction, ApiError> {
        let url = self.transactions_url();
        debug!("POST {} ({} {:.2})", url, body.kind, body.amount);

        let response = self.http_client
            .post(&url)
            .headers(Self::create_headers())
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<Transaction>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// DELETE /transactions/{id}
    ///
    /// Any success status counts as confirmation; the body is not read.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<(), ApiError> {
        let url = self.transaction_url(id);
        debug!("DELETE {}", url);

        let response = self.http_client
            .delete(&url)
            .headers(Self::create_headers())
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        Ok(())
    }
}
