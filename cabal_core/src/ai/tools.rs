use open_ai_rust_responses_by_sshift::types::Tool;
use serde_json::json;

pub const SUMMARY_TOOL_NAME: &str = "generate_activity_summary";

/// Structured-output tool the model fills in with the activity digest. The
/// parameter schema mirrors `crate::ai::dto::ActivitySummary`.
pub fn generate_activity_summary_tool() -> Tool {
    Tool::function(
        SUMMARY_TOOL_NAME,
        "Generate a structured summary of wallet activity and market insights. MUST be called exactly once per summary request.",
        json!({
            "type": "object",
            "properties": {
                "outperformers": {
                    "type": "array",
                    "description": "Tokens with notably positive recent price performance",
                    "items": {
                        "type": "object",
                        "properties": {
                            "token": {
                                "type": "string",
                                "description": "Token symbol or name"
                            },
                            "performance": {
                                "type": "string",
                                "description": "Short performance note, e.g. '+12% over 24h 📈'"
                            }
                        },
                        "required": ["token", "performance"]
                    }
                },
                "wallet_activity": {
                    "type": "array",
                    "description": "One digest entry per tracked wallet",
                    "items": {
                        "type": "object",
                        "properties": {
                            "address": {
                                "type": "string",
                                "description": "Wallet address the entry describes"
                            },
                            "ens": {
                                "type": "string",
                                "description": "ENS name for the wallet, when evident from the data"
                            },
                            "activity": {
                                "type": "string",
                                "description": "Summary of significant transactions or patterns"
                            },
                            "is_for_you": {
                                "type": "boolean",
                                "description": "True when the activity involves significant transactions or interesting patterns"
                            }
                        },
                        "required": ["address", "activity", "is_for_you"]
                    }
                },
                "market_insights": {
                    "type": "array",
                    "description": "Brief market observations grounded in the supplied data",
                    "items": {
                        "type": "string"
                    }
                },
                "tvl_insights": {
                    "type": "string",
                    "description": "One sentence on TVL for top protocols and chains"
                },
                "user_token_purchases": {
                    "type": "string",
                    "description": "Which wallets bought popular tokens and at what prices"
                }
            },
            "required": ["outperformers", "wallet_activity", "market_insights", "tvl_insights", "user_token_purchases"]
        }),
    )
}
