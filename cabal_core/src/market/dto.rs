use serde::Deserialize;
use std::collections::HashMap;

use crate::helpers::dto::{TokenInfo, Transaction};

#[derive(Debug, Deserialize)]
pub struct BlockResponse {
    pub height: u64,
}

/// Block-explorer txlist envelope. `result` is an array on success but a
/// plain string on explorer-side errors, so it stays untyped until the
/// status field has been checked.
#[derive(Debug, Deserialize)]
pub struct TxListResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct ExplorerTx {
    pub from: String,
    pub to: String,
    pub value: String,
    #[serde(rename = "tokenSymbol", default)]
    pub token_symbol: Option<String>,
    #[serde(rename = "contractAddress", default)]
    pub contract_address: Option<String>,
}

impl From<ExplorerTx> for Transaction {
    fn from(tx: ExplorerTx) -> Self {
        let token_symbol = match tx.token_symbol.filter(|s| !s.is_empty()) {
            Some(symbol) => Some(symbol),
            None => Some("ETH".to_string()),
        };

        Transaction {
            from: tx.from,
            to: tx.to,
            value: tx.value,
            token_symbol,
            contract_address: tx.contract_address.filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PricesResponse {
    pub coins: HashMap<String, CoinPrice>,
}

#[derive(Debug, Deserialize)]
pub struct CoinPrice {
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct MarketToken {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub price_change_percentage_24h: f64,
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<MarketToken> for TokenInfo {
    fn from(token: MarketToken) -> Self {
        TokenInfo {
            id: token.id,
            symbol: token.symbol,
            name: token.name,
            price: token.current_price,
            price_change_percentage_24h: token.price_change_percentage_24h,
            contract_address: token.contract_address,
            image: token.image,
        }
    }
}
