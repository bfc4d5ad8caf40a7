use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};

use crate::api::transactions::{Transaction, TransactionId, TransactionType};

#[derive(Default)]
struct ServerState {
    transactions: Mutex<Vec<Transaction>>,
    next_id: AtomicI64,
    fail: AtomicBool,
}

/// Handle to a REST store running on a random local port
pub(crate) struct StoreServer {
    addr: SocketAddr,
    state: Arc<ServerState>,
}

impl StoreServer {
    pub(crate) fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Make every request answer with 500
    pub(crate) fn fail_requests(&self, fail: bool) {
        self.state.fail.store(fail, Ordering::SeqCst);
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn list_transactions(State(state): State<Arc<ServerState>>) -> Response {
    if state.fail.load(Ordering::SeqCst) {
        return error_body(StatusCode::INTERNAL_SERVER_ERROR, "database is locked");
    }

    let mut transactions = state.transactions.lock().unwrap().clone();
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
    Json(transactions).into_response()
}

async fn create_transaction(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<Value>,
) -> Response {
    if state.fail.load(Ordering::SeqCst) {
        return error_body(StatusCode::INTERNAL_SERVER_ERROR, "database is locked");
    }

    let text = body.get("text").and_then(Value::as_str).unwrap_or_default();
    let amount = body.get("amount").and_then(Value::as_f64);
    let kind = body
        .get("type")
        .and_then(Value::as_str)
        .and_then(|s| match s {
            "credit" => Some(TransactionType::Credit),
            "debit" => Some(TransactionType::Debit),
            _ => None,
        });

    let (Some(amount), Some(kind)) = (amount, kind) else {
        return error_body(StatusCode::BAD_REQUEST, "Type must be credit or debit");
    };
    if text.is_empty() {
        return error_body(
            StatusCode::BAD_REQUEST,
            "Missing required fields (text, amount, type)",
        );
    }

    let id = state.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    let date = NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid date")
        + Duration::seconds(id);

    let created = Transaction {
        id: TransactionId(id),
        text: text.to_string(),
        amount,
        kind,
        date,
    };
    state.transactions.lock().unwrap().push(created.clone());

    (StatusCode::CREATED, Json(created)).into_response()
}

async fn delete_transaction(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<i64>,
) -> Response {
    if state.fail.load(Ordering::SeqCst) {
        return error_body(StatusCode::INTERNAL_SERVER_ERROR, "database is locked");
    }

    let mut transactions = state.transactions.lock().unwrap();
    let before = transactions.len();
    transactions.retain(|tx| tx.id != TransactionId(id));
    if transactions.len() == before {
        return error_body(StatusCode::NOT_FOUND, "Transaction not found");
    }

    Json(json!({ "message": "Transaction deleted successfully" })).into_response()
}

/// Start a store that speaks the same REST contract as the real backend
pub(crate) async fn spawn_store_server() -> StoreServer {
    let state = Arc::new(ServerState::default());

    let app = Router::new()
        .route(
            "/api/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route("/api/transactions/{id}", delete(delete_transaction))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind store server");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Store server failed");
    });

    StoreServer { addr, state }
}
