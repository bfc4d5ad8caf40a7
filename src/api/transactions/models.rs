use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store-assigned transaction identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub i64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .trim_start_matches('#')
            .parse::<i64>()
            .map(TransactionId)
            .map_err(|_| format!("Invalid transaction id: {}", s))
    }
}

/// Direction of a transaction. Credit adds to the balance, debit subtracts from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    #[default]
    Debit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Credit => "credit",
            TransactionType::Debit => "debit",
        }
    }

    /// Sign shown in front of the amount
    pub fn sign(&self) -> char {
        match self {
            TransactionType::Credit => '+',
            TransactionType::Debit => '-',
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    /// Accepts the wire names as well as the form labels ("income"/"expense")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credit" | "income" => Ok(TransactionType::Credit),
            "debit" | "expense" => Ok(TransactionType::Debit),
            other => Err(format!(
                "Type must be credit or debit (got `{}`)",
                other
            )),
        }
    }
}

/// A transaction as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub text: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: NaiveDateTime,
}

impl Transaction {
    /// Amount with the direction folded in, used when summing a balance
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Credit => self.amount,
            TransactionType::Debit => -self.amount,
        }
    }
}

/// Request body for POST /transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub text: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl NewTransaction {
    /// Build a request from raw form input.
    ///
    /// Returns `None` when the description is blank or the amount is not a
    /// finite, non-negative number. Callers treat `None` as "nothing to submit".
    pub fn from_form(text: &str, amount: &str, kind: TransactionType) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let amount = amount.trim().parse::<f64>().ok()?;
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }

        Some(Self {
            text: text.to_string(),
            amount,
            kind,
        })
    }
}

/// Error body returned by the store, e.g. `{"error": "Transaction not found"}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
}

/// Failure of a remote store operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// 404 Not Found
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Other non-success statuses
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Response body could not be parsed
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}
