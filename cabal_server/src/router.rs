use std::{env, sync::Arc};

use axum::{
    Router,
    routing::{delete, get, post},
};
use cabal_core::{ai::AI, market::Market, watchlist::Watchlist};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::{
    docs::{dto::ApiDoc, handler::api_docs},
    info::handler::info,
    state::ServerState,
    summary::handler::generate_summary,
    wallets::handler::{add_wallet, list_wallets, remove_wallet},
};

pub async fn router() -> Router {
    let openai_api_key =
        env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY environment variable not set");
    let db_path = env::var("CABAL_DB_PATH").unwrap_or("cabal_db".to_string());

    let db = sled::open(&db_path).expect("Failed to open sled DB");
    let watchlist = Watchlist::new(&db).expect("Failed to open wallet watchlist tree");
    let ai = AI::new(openai_api_key).expect("Failed to create OpenAI client");
    let market = Market::new();

    let state = Arc::new(ServerState::from((ai, market, watchlist)));

    let doc = ApiDoc::openapi();

    Router::new()
        .merge(Redoc::with_url("/redoc", doc))
        .route("/", get(info))
        .route("/docs", get(api_docs))
        .route("/wallets", get(list_wallets).post(add_wallet))
        .route("/wallets/{address}", delete(remove_wallet))
        .route("/summary", post(generate_summary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
