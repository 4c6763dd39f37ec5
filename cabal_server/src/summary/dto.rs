use std::collections::HashMap;

use cabal_core::ai::dto::ActivitySummary;
use cabal_core::helpers::dto::{TokenInfo, TokenPurchase};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SummaryRequest {
    /// Wallets to summarize; falls back to the stored watchlist when absent.
    #[serde(default)]
    pub wallets: Option<Vec<String>>,
    #[serde(default = "default_chain")]
    pub chain: String,
    #[serde(default = "default_interval_hours")]
    pub interval_hours: u64,
}

fn default_chain() -> String {
    "ethereum".to_string()
}

fn default_interval_hours() -> u64 {
    cabal_core::market::DEFAULT_INTERVAL_HOURS
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryData {
    pub summary: ActivitySummary,
    pub popular_tokens: Vec<TokenInfo>,
    pub user_token_purchases: HashMap<String, Vec<TokenPurchase>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub data: SummaryData,
    pub message: String,
}
