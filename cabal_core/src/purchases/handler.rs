use std::collections::HashMap;

use crate::helpers::dto::{TokenInfo, TokenPrices, TokenPurchase, WalletActivity};

/// Detect which tracked wallets bought popular tokens and at what price.
///
/// A purchase is a transaction whose contract address matches a popular
/// token and whose `to` address is the owning wallet (case-insensitive).
/// The price comes from the oracle map keyed by contract address, falling
/// back to the token's market price when the oracle has no entry. Event
/// order per wallet follows transaction fetch order.
pub fn detect_token_purchases(
    activities: &[WalletActivity],
    popular_tokens: &[TokenInfo],
    prices: &TokenPrices,
) -> HashMap<String, Vec<TokenPurchase>> {
    let mut purchases: HashMap<String, Vec<TokenPurchase>> = HashMap::new();

    for activity in activities {
        for tx in &activity.transactions {
            let Some(contract_address) = tx.contract_address.as_deref() else {
                continue;
            };

            let Some(popular) = popular_tokens
                .iter()
                .find(|token| token.contract_address.as_deref() == Some(contract_address))
            else {
                continue;
            };

            if !tx.to.eq_ignore_ascii_case(&activity.wallet) {
                continue;
            }

            let price = prices
                .get(contract_address)
                .copied()
                .unwrap_or(popular.price);

            purchases
                .entry(activity.wallet.clone())
                .or_default()
                .push(TokenPurchase {
                    token: popular.symbol.clone(),
                    price,
                });
        }
    }

    purchases
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::dto::Transaction;

    fn popular_btc() -> TokenInfo {
        TokenInfo {
            id: "bitcoin".to_string(),
            symbol: "btc".to_string(),
            name: "Bitcoin".to_string(),
            price: 97000.0,
            price_change_percentage_24h: 2.4,
            contract_address: Some("0xbtc".to_string()),
            image: None,
        }
    }

    fn purchase_tx(to: &str, contract: Option<&str>) -> Transaction {
        Transaction {
            from: "0x01".to_string(),
            to: to.to_string(),
            value: "100".to_string(),
            token_symbol: Some("BTC".to_string()),
            contract_address: contract.map(str::to_string),
        }
    }

    fn activity(wallet: &str, transactions: Vec<Transaction>) -> WalletActivity {
        WalletActivity {
            wallet: wallet.to_string(),
            transactions,
        }
    }

    #[test]
    fn test_detects_purchase_case_insensitively() {
        let activities = vec![activity("0xAbCd", vec![purchase_tx("0xABCD", Some("0xbtc"))])];
        let prices = TokenPrices::from([("0xbtc".to_string(), 96500.0)]);

        let purchases = detect_token_purchases(&activities, &[popular_btc()], &prices);

        let events = purchases.get("0xAbCd").unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].token, "btc");
        assert_eq!(events[0].price, 96500.0);
    }

    #[test]
    fn test_falls_back_to_market_price() {
        let activities = vec![activity("0xabcd", vec![purchase_tx("0xabcd", Some("0xbtc"))])];

        let purchases = detect_token_purchases(&activities, &[popular_btc()], &TokenPrices::new());

        assert_eq!(purchases.get("0xabcd").unwrap()[0].price, 97000.0);
    }

    #[test]
    fn test_ignores_unmatched_transactions() {
        let activities = vec![activity(
            "0xabcd",
            vec![
                // no contract address
                purchase_tx("0xabcd", None),
                // contract not in the popular list
                purchase_tx("0xabcd", Some("0xother")),
                // transfer out, not a purchase
                purchase_tx("0xelsewhere", Some("0xbtc")),
            ],
        )];

        let purchases = detect_token_purchases(&activities, &[popular_btc()], &TokenPrices::new());

        assert!(purchases.is_empty());
    }

    #[test]
    fn test_pure_and_order_independent() {
        let a = activity("0xaa", vec![purchase_tx("0xaa", Some("0xbtc"))]);
        let b = activity(
            "0xbb",
            vec![
                purchase_tx("0xbb", Some("0xbtc")),
                purchase_tx("0xbb", Some("0xbtc")),
            ],
        );
        let prices = TokenPrices::from([("0xbtc".to_string(), 96500.0)]);
        let popular = vec![popular_btc()];

        let forward = detect_token_purchases(&[a.clone(), b.clone()], &popular, &prices);
        let again = detect_token_purchases(&[a.clone(), b.clone()], &popular, &prices);
        let reversed = detect_token_purchases(&[b, a], &popular, &prices);

        assert_eq!(forward, again);
        assert_eq!(forward.get("0xaa"), reversed.get("0xaa"));
        assert_eq!(forward.get("0xbb"), reversed.get("0xbb"));
        assert_eq!(forward.get("0xbb").unwrap().len(), 2);
    }
}
