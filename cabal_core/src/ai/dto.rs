use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A token the model flagged as notably outperforming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Outperformer {
    pub token: String,
    pub performance: String,
}

/// Model-written digest of one wallet's recent activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WalletSummary {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ens: Option<String>,
    pub activity: String,
    pub is_for_you: bool,
}

/// Structured summary returned by the model, one per request. Ephemeral,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivitySummary {
    pub outperformers: Vec<Outperformer>,
    pub wallet_activity: Vec<WalletSummary>,
    pub market_insights: Vec<String>,
    pub tvl_insights: String,
    #[serde(default)]
    pub user_token_purchases: String,
}
