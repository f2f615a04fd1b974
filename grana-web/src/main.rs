//! Servidor web Axum do assistente financeiro: chat em linguagem natural
//! sobre o interpretador de lançamentos, com razão em memória.

mod chat;
mod ledger;

use std::sync::{Arc, Mutex};

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use grana_core::{corpus::demo_phrases, TransactionParser};
use ledger::MemoryLedger;

/// Estado compartilhado: interpretador (imutável, thread-safe) e razão.
struct AppState {
    parser: TransactionParser,
    ledger: Mutex<MemoryLedger>,
}

#[derive(Deserialize)]
struct MensagemRequest {
    texto: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let state = Arc::new(AppState {
        parser: TransactionParser::new(),
        ledger: Mutex::new(MemoryLedger::new()),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/mensagem", post(mensagem_handler))
        .route("/exemplos", get(exemplos_handler))
        .route("/saldo", get(saldo_handler))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    info!("💬 Assistente financeiro em http://localhost:3000");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Página principal do chat
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

/// Recebe uma mensagem do usuário e responde (consulta ou lançamento)
async fn mensagem_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MensagemRequest>,
) -> impl IntoResponse {
    if req.texto.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Mensagem vazia"})),
        )
            .into_response();
    }

    info!("Mensagem recebida: {} chars", req.texto.len());

    let mut ledger = state.ledger.lock().unwrap();
    let reply = chat::respond(
        &state.parser,
        &mut ledger,
        &req.texto,
        Local::now().date_naive(),
    );
    Json(reply).into_response()
}

/// Frases de demonstração para a UI
async fn exemplos_handler() -> impl IntoResponse {
    let frases: Vec<serde_json::Value> = demo_phrases()
        .iter()
        .map(|(categoria, frase)| {
            serde_json::json!({
                "categoria": categoria,
                "frase": frase
            })
        })
        .collect();
    Json(frases)
}

/// Saldos por banco, faturas e total consolidado
async fn saldo_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let ledger = state.ledger.lock().unwrap();
    Json(serde_json::json!({
        "bancos": ledger.bank_balances(),
        "faturas": ledger.credit_card_bills(),
        "total": ledger.total_balance(),
    }))
}
