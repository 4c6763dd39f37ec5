use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Mapping from token/contract identifier to current USD price.
pub type TokenPrices = HashMap<String, f64>;

/// One on-chain transfer event attributed to a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    pub from: String,
    pub to: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
}

/// All transactions fetched for one wallet in a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WalletActivity {
    pub wallet: String,
    pub transactions: Vec<Transaction>,
}

/// Market snapshot of one token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenInfo {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub price_change_percentage_24h: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A detected purchase of a popular token by a tracked wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenPurchase {
    pub token: String,
    pub price: f64,
}

/// Aggregated pipeline output handed to the prompt builder.
#[derive(Debug, Clone, Serialize)]
pub struct DigestPayload {
    pub wallet_activity: Vec<WalletActivity>,
    pub popular_tokens: Vec<TokenInfo>,
    pub token_prices: TokenPrices,
    pub user_token_purchases: HashMap<String, Vec<TokenPurchase>>,
}
