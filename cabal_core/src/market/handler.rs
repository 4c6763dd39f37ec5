use std::collections::HashSet;
use std::env;
use std::time::Duration;

use anyhow::{anyhow, Result};
use chrono::Utc;
use reqwest::Client;

use crate::helpers::dto::{DigestPayload, TokenInfo, TokenPrices, Transaction, WalletActivity};
use crate::market::dto::{BlockResponse, ExplorerTx, MarketToken, PricesResponse, TxListResponse};
use crate::purchases::handler::detect_token_purchases;

const DEFAULT_DEFILLAMA_API_URL: &str = "https://coins.llama.fi";
const DEFAULT_COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";
const DEFAULT_ETHERSCAN_API_URL: &str = "https://api.etherscan.io/api";

/// Pause after each block lookup to stay under the indexer rate limit.
const BLOCK_LOOKUP_PAUSE: Duration = Duration::from_secs(1);

pub const DEFAULT_INTERVAL_HOURS: u64 = 24;
pub const DEFAULT_POPULAR_TOKEN_LIMIT: u32 = 5;

#[derive(Clone)]
pub struct Market {
    client: Client,
    defillama_url: String,
    coingecko_url: String,
    etherscan_url: String,
    etherscan_api_key: String,
}

impl Market {
    pub fn new() -> Self {
        let defillama_url = env::var("DEFILLAMA_API_URL")
            .unwrap_or_else(|_| DEFAULT_DEFILLAMA_API_URL.to_string());
        let coingecko_url = env::var("COINGECKO_API_URL")
            .unwrap_or_else(|_| DEFAULT_COINGECKO_API_URL.to_string());
        let etherscan_url = env::var("ETHERSCAN_API_URL")
            .unwrap_or_else(|_| DEFAULT_ETHERSCAN_API_URL.to_string());
        // A missing key is not validated here; the explorer rejects the
        // authenticated call upstream instead.
        let etherscan_api_key = env::var("ETHERSCAN_API_KEY").unwrap_or_default();

        Self::with_endpoints(defillama_url, coingecko_url, etherscan_url, etherscan_api_key)
    }

    pub fn with_endpoints(
        defillama_url: String,
        coingecko_url: String,
        etherscan_url: String,
        etherscan_api_key: String,
    ) -> Self {
        Self {
            client: Client::new(),
            defillama_url,
            coingecko_url,
            etherscan_url,
            etherscan_api_key,
        }
    }

    /// Nearest block at or before `timestamp` on `chain`, per the
    /// block-indexing service. No caching and no retry.
    pub async fn get_block_number_at_timestamp(&self, chain: &str, timestamp: i64) -> Result<u64> {
        let url = format!("{}/block/{}/{}", self.defillama_url, chain, timestamp);
        log::info!(
            "Fetching block number for chain {} at timestamp {}",
            chain,
            timestamp
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            log::error!("Block lookup for chain {} failed with status {}", chain, status);
            return Err(anyhow!("block lookup for {} returned status {}", chain, status));
        }

        let body = response.json::<BlockResponse>().await?;
        log::info!("Block number fetched successfully: {}", body.height);

        tokio::time::sleep(BLOCK_LOOKUP_PAUSE).await;

        Ok(body.height)
    }

    /// Recent activity for each wallet, one txlist query per wallet within
    /// the resolved block range. Per-wallet failures are logged and that
    /// wallet is omitted; only a failed block resolution aborts the fetch.
    pub async fn get_wallet_activity(
        &self,
        wallets: &[String],
        chain: &str,
        interval_hours: u64,
    ) -> Result<Vec<WalletActivity>> {
        log::info!(
            "Fetching wallet activity for {} wallets on chain {} for the last {} hours",
            wallets.len(),
            chain,
            interval_hours
        );

        let end_timestamp = Utc::now().timestamp() - 60;
        // interval_hours comes straight from the request; reject windows
        // that do not fit a UNIX timestamp instead of wrapping.
        let window_secs = i64::try_from(interval_hours.saturating_mul(60 * 60))
            .map_err(|_| anyhow!("interval of {} hours is out of range", interval_hours))?;
        let start_timestamp = end_timestamp
            .checked_sub(window_secs)
            .ok_or_else(|| anyhow!("interval of {} hours is out of range", interval_hours))?;

        let start_block = self.get_block_number_at_timestamp(chain, start_timestamp).await?;
        let end_block = self.get_block_number_at_timestamp(chain, end_timestamp).await?;

        let mut activities = Vec::new();

        for wallet in wallets {
            match self.fetch_transactions(wallet, start_block, end_block).await {
                Ok(Some(transactions)) => {
                    log::info!(
                        "Successfully fetched {} transactions for wallet {}",
                        transactions.len(),
                        wallet
                    );
                    activities.push(WalletActivity {
                        wallet: wallet.clone(),
                        transactions,
                    });
                }
                Ok(None) => log::warn!("No transactions found for wallet {}", wallet),
                Err(e) => log::error!("Error fetching transactions for wallet {}: {}", wallet, e),
            }
        }

        Ok(activities)
    }

    async fn fetch_transactions(
        &self,
        wallet: &str,
        start_block: u64,
        end_block: u64,
    ) -> Result<Option<Vec<Transaction>>> {
        let url = format!(
            "{}?module=account&action=txlist&address={}&startblock={}&endblock={}&sort=desc&apikey={}",
            self.etherscan_url, wallet, start_block, end_block, self.etherscan_api_key
        );
        log::info!("Fetching transactions for wallet {}", wallet);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(anyhow!("txlist for {} returned status {}", wallet, status));
        }

        let body = response.json::<TxListResponse>().await?;

        // status other than "1" means "no data" on this explorer, not an error
        if body.status != "1" {
            log::warn!("Explorer returned no data for wallet {}: {}", wallet, body.message);
            return Ok(None);
        }

        let txs: Vec<ExplorerTx> = serde_json::from_value(body.result)?;
        let transactions: Vec<Transaction> = txs.into_iter().map(Transaction::from).collect();

        if transactions.is_empty() {
            return Ok(None);
        }

        Ok(Some(transactions))
    }

    /// One batched price query against the price oracle. An empty identifier
    /// list short-circuits without a network call.
    pub async fn get_token_prices(&self, tokens: &[String]) -> Result<TokenPrices> {
        if tokens.is_empty() {
            log::warn!("No token addresses to price, skipping price lookup");
            return Ok(TokenPrices::new());
        }

        let url = format!("{}/prices/current/{}", self.defillama_url, tokens.join(","));
        log::info!("Fetching token prices for {} tokens", tokens.len());

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            log::error!("Price lookup failed with status {}", status);
            return Err(anyhow!("price lookup returned status {}", status));
        }

        let body = response.json::<PricesResponse>().await?;
        log::info!("Successfully fetched prices for {} tokens", body.coins.len());

        Ok(body
            .coins
            .into_iter()
            .map(|(id, coin)| (id, coin.price))
            .collect())
    }

    /// Top tokens by market cap from the market aggregator.
    pub async fn get_popular_tokens(&self, limit: u32) -> Result<Vec<TokenInfo>> {
        let url = format!(
            "{}/coins/markets?vs_currency=usd&order=market_cap_desc&per_page={}&page=1&sparkline=false&price_change_percentage=24h",
            self.coingecko_url, limit
        );
        log::info!("Fetching {} popular tokens", limit);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            log::error!("Popular token lookup failed with status {}", status);
            return Err(anyhow!("popular token lookup returned status {}", status));
        }

        let body = response.json::<Vec<MarketToken>>().await?;
        log::info!("Successfully fetched {} popular tokens", body.len());

        Ok(body.into_iter().map(TokenInfo::from).collect())
    }

    /// Distinct `to` addresses across all fetched transactions, first
    /// occurrence first.
    pub fn dedup_token_addresses(activities: &[WalletActivity]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut addresses = Vec::new();

        for activity in activities {
            for tx in &activity.transactions {
                if seen.insert(tx.to.clone()) {
                    addresses.push(tx.to.clone());
                }
            }
        }

        addresses
    }

    /// Sequential aggregation: wallet activity, popular tokens, deduplicated
    /// price lookup, then purchase correlation.
    pub async fn collect_digest(
        &self,
        wallets: &[String],
        chain: &str,
        interval_hours: u64,
        popular_limit: u32,
    ) -> Result<DigestPayload> {
        let wallet_activity = self.get_wallet_activity(wallets, chain, interval_hours).await?;
        let popular_tokens = self.get_popular_tokens(popular_limit).await?;

        let token_addresses = Self::dedup_token_addresses(&wallet_activity);
        let token_prices = self.get_token_prices(&token_addresses).await?;

        let user_token_purchases =
            detect_token_purchases(&wallet_activity, &popular_tokens, &token_prices);

        Ok(DigestPayload {
            wallet_activity,
            popular_tokens,
            token_prices,
            user_token_purchases,
        })
    }
}

impl Default for Market {
    fn default() -> Self {
        Self::new()
    }
}
