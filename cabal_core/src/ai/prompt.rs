use anyhow::Result;

use crate::helpers::dto::DigestPayload;

pub fn get_prompt() -> String {
    let prompt: &str = r#"You are Cabal, an on-chain analyst that digests wallet activity and market data for a reader tracking multiple wallets.

====================== VOICE ======================
• Concise, factual, and readable at a glance.
• Use emojis to represent actions (e.g., 📈 for price increases, 💱 for swaps, 🛒 for purchases).
• Treat the data as a watchlist of multiple wallets, never as the user's personal wallet.
• Never invent transactions, prices, or wallets that are not in the supplied data.

====================== OUTPUT ======================
Always respond by calling the generate_activity_summary tool exactly once with every field filled in:
• outperformers: tokens with notably positive recent performance, with a short performance note each.
• wallet_activity: one entry per wallet, describing significant transactions or patterns. Mark an entry as "For You" (is_for_you) when it involves significant transactions or interesting patterns. Include an ENS name only when one is evident from the data.
• market_insights: brief observations grounded in the supplied prices and popular tokens.
• tvl_insights: one sentence on TVL for top protocols and chains.
• user_token_purchases: which wallets bought popular tokens and at what prices."#;

    prompt.to_string()
}

/// Serialize the aggregated payload into the instruction sent alongside the
/// structured-output tool.
pub fn build_summary_prompt(payload: &DigestPayload) -> Result<String> {
    let wallet_activity = serde_json::to_string(&payload.wallet_activity)?;
    let token_prices = serde_json::to_string(&payload.token_prices)?;
    let popular_tokens = serde_json::to_string(&payload.popular_tokens)?;
    let user_token_purchases = serde_json::to_string(&payload.user_token_purchases)?;

    Ok(format!(
        "Summarize the following wallet activities, popular tokens, and user token purchases in a concise manner:\n\
         - Highlight outperforming tokens and their performance\n\
         - Provide detailed wallet activity summaries, including significant transactions or patterns\n\
         - Include brief market insights based on the data\n\
         - Mention TVL insights for top protocols and chains\n\
         - Summarize the user token purchases, highlighting which users bought popular tokens and at what prices\n\
         Here's the data to summarize:\n\
         Wallet Activity: {}\n\
         Token Prices: {}\n\
         Popular Tokens: {}\n\
         User Token Purchases: {}",
        wallet_activity, token_prices, popular_tokens, user_token_purchases
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::dto::{TokenInfo, TokenPrices, Transaction, WalletActivity};
    use std::collections::HashMap;

    #[test]
    fn test_prompt_contains_all_serialized_payloads() {
        let payload = DigestPayload {
            wallet_activity: vec![WalletActivity {
                wallet: "0xAA".to_string(),
                transactions: vec![Transaction {
                    from: "0x01".to_string(),
                    to: "0xAA".to_string(),
                    value: "42".to_string(),
                    token_symbol: Some("ETH".to_string()),
                    contract_address: None,
                }],
            }],
            popular_tokens: vec![TokenInfo {
                id: "bitcoin".to_string(),
                symbol: "btc".to_string(),
                name: "Bitcoin".to_string(),
                price: 97000.0,
                price_change_percentage_24h: 2.4,
                contract_address: None,
                image: None,
            }],
            token_prices: TokenPrices::from([("0xAA".to_string(), 1.0)]),
            user_token_purchases: HashMap::new(),
        };

        let prompt = build_summary_prompt(&payload).unwrap();

        assert!(prompt.contains(r#""wallet":"0xAA""#));
        assert!(prompt.contains(r#""id":"bitcoin""#));
        assert!(prompt.contains("Wallet Activity:"));
        assert!(prompt.contains("Token Prices:"));
        assert!(prompt.contains("Popular Tokens:"));
        assert!(prompt.contains("User Token Purchases:"));
    }
}
