use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddWalletRequest {
    pub address: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WalletListResponse {
    pub wallets: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddWalletResponse {
    pub added: bool,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RemoveWalletResponse {
    pub message: String,
}
