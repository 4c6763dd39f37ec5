use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use cabal_core::watchlist::AddOutcome;

use crate::{
    error::ErrorServer,
    state::ServerState,
    wallets::dto::{AddWalletRequest, AddWalletResponse, RemoveWalletResponse, WalletListResponse},
};

#[utoipa::path(
    get,
    path = "/wallets",
    description = "List tracked wallets",
    responses(
        (status = 200, description = "Success", body = WalletListResponse),
    )
)]
pub async fn list_wallets(
    State(server_state): State<Arc<ServerState>>,
) -> Json<WalletListResponse> {
    Json(WalletListResponse {
        wallets: server_state.watchlist().all(),
    })
}

#[utoipa::path(
    post,
    path = "/wallets",
    request_body = AddWalletRequest,
    description = "Track a wallet address",
    responses(
        (status = 200, description = "Success", body = AddWalletResponse),
        (status = 400, description = "Bad Request"),
    )
)]
#[axum::debug_handler]
pub async fn add_wallet(
    State(server_state): State<Arc<ServerState>>,
    Json(request): Json<AddWalletRequest>,
) -> Result<Json<AddWalletResponse>, ErrorServer> {
    let address = request.address.trim();

    if address.is_empty() {
        return Err(ErrorServer::new(
            StatusCode::BAD_REQUEST,
            "Please enter a valid wallet address.",
        ));
    }

    let outcome = server_state
        .watchlist()
        .add(address)
        .map_err(|e| ErrorServer::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let response = match outcome {
        AddOutcome::Added => AddWalletResponse {
            added: true,
            message: "Your new wallet has been added successfully.".to_string(),
        },
        AddOutcome::AlreadyTracked => {
            log::warn!("Wallet {} is already tracked", address);
            AddWalletResponse {
                added: false,
                message: "This wallet address is already in your list.".to_string(),
            }
        }
    };

    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/wallets/{address}",
    description = "Stop tracking a wallet address",
    params(
        ("address" = String, Path, description = "Wallet address to remove"),
    ),
    responses(
        (status = 200, description = "Success", body = RemoveWalletResponse),
        (status = 404, description = "Not Found"),
    )
)]
#[axum::debug_handler]
pub async fn remove_wallet(
    State(server_state): State<Arc<ServerState>>,
    Path(address): Path<String>,
) -> Result<Json<RemoveWalletResponse>, ErrorServer> {
    let removed = server_state
        .watchlist()
        .remove(&address)
        .map_err(|e| ErrorServer::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if !removed {
        return Err(ErrorServer::new(
            StatusCode::NOT_FOUND,
            "This wallet address is not in your list.",
        ));
    }

    Ok(Json(RemoveWalletResponse {
        message: "The wallet has been removed from your list.".to_string(),
    }))
}
