use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use cabal_core::helpers::dto::DigestPayload;
use cabal_core::market::DEFAULT_POPULAR_TOKEN_LIMIT;

use crate::{
    error::ErrorServer,
    state::ServerState,
    summary::dto::{SummaryData, SummaryRequest, SummaryResponse},
};

#[utoipa::path(
    post,
    path = "/summary",
    request_body = SummaryRequest,
    description = "Generate an AI digest of recent activity for the tracked wallets",
    responses(
        (status = 200, description = "Success", body = SummaryResponse),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Internal Server Error"),
    )
)]
#[axum::debug_handler]
pub async fn generate_summary(
    State(server_state): State<Arc<ServerState>>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, ErrorServer> {
    let wallets = match request.wallets {
        Some(wallets) if !wallets.is_empty() => wallets,
        _ => server_state.watchlist().all(),
    };

    if wallets.is_empty() {
        return Err(ErrorServer::new(
            StatusCode::BAD_REQUEST,
            "No wallets to summarize. Add a wallet first.",
        ));
    }

    log::info!(
        "Generating summary for {} wallets on chain {} over {}h",
        wallets.len(),
        request.chain,
        request.interval_hours
    );

    let payload = server_state
        .market()
        .collect_digest(
            &wallets,
            &request.chain,
            request.interval_hours,
            DEFAULT_POPULAR_TOKEN_LIMIT,
        )
        .await
        .map_err(|e| {
            log::error!("Digest pipeline failed: {}", e);
            ErrorServer::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    let summary = server_state.ai().generate_summary(&payload).await.map_err(|e| {
        log::error!("Summary generation failed: {}", e);
        ErrorServer::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    let DigestPayload {
        popular_tokens,
        user_token_purchases,
        ..
    } = payload;

    Ok(Json(SummaryResponse {
        data: SummaryData {
            summary,
            popular_tokens,
            user_token_purchases,
        },
        message: "Response generated successfully".to_string(),
    }))
}
