use anyhow::{anyhow, Result};
use open_ai_rust_responses_by_sshift::types::ToolChoice;
use open_ai_rust_responses_by_sshift::{Client as OAIClient, Model, Request, Response};

use crate::ai::dto::ActivitySummary;
use crate::ai::prompt::{build_summary_prompt, get_prompt};
use crate::ai::tools::{generate_activity_summary_tool, SUMMARY_TOOL_NAME};
use crate::helpers::dto::DigestPayload;

#[derive(Clone)]
pub struct AI {
    openai_client: OAIClient,
    system_prompt: String,
}

impl AI {
    pub fn new(openai_api_key: String) -> Result<Self> {
        let system_prompt = get_prompt();

        let openai_client = OAIClient::new(&openai_api_key)
            .map_err(|e| anyhow!("failed to create OpenAI client: {}", e))?;

        Ok(Self {
            openai_client,
            system_prompt,
        })
    }

    /// One model call per summary request: the aggregated payload goes out
    /// as a single prompt with the structured-output tool attached, and the
    /// tool call's arguments come back as the summary. A failed call or a
    /// response without the tool call is fatal for the request; there is no
    /// retry and no timeout beyond the client's own.
    pub async fn generate_summary(&self, payload: &DigestPayload) -> Result<ActivitySummary> {
        let prompt = build_summary_prompt(payload)?;

        log::info!(
            "Requesting activity summary from model ({} wallets, {} popular tokens)",
            payload.wallet_activity.len(),
            payload.popular_tokens.len()
        );

        let request = Request::builder()
            .model(Model::GPT4o)
            .instructions(self.system_prompt.clone())
            .input(prompt.as_str())
            .tools(vec![generate_activity_summary_tool()])
            .tool_choice(ToolChoice::auto())
            .max_output_tokens(1500)
            .temperature(0.5)
            .build();

        let response: Response = self.openai_client.responses.create(request).await?;

        let summary = parse_summary_response(&response)?;

        log::info!("Activity summary generated successfully");

        Ok(summary)
    }
}

fn parse_summary_response(response: &Response) -> Result<ActivitySummary> {
    let tool_calls = response.tool_calls();

    let summary_call = tool_calls
        .iter()
        .find(|tc| tc.name == SUMMARY_TOOL_NAME)
        .ok_or_else(|| anyhow!("model returned no {} call", SUMMARY_TOOL_NAME))?;

    parse_summary_arguments(&summary_call.arguments)
}

/// Decode the tool call's JSON arguments into the summary type.
pub fn parse_summary_arguments(arguments: &str) -> Result<ActivitySummary> {
    let summary: ActivitySummary = serde_json::from_str(arguments)
        .map_err(|e| anyhow!("model arguments did not match the summary schema: {}", e))?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary_arguments() {
        let arguments = r#"{
            "outperformers": [{"token": "BTC", "performance": "+4.2% over 24h 📈"}],
            "wallet_activity": [
                {"address": "0xAA", "activity": "Swapped 2 ETH for USDC 💱", "is_for_you": true},
                {"address": "0xBB", "ens": "vitalik.eth", "activity": "Quiet day", "is_for_you": false}
            ],
            "market_insights": ["Majors rallied while alts lagged"],
            "tvl_insights": "TVL on top chains grew modestly.",
            "user_token_purchases": "0xAA bought BTC near $97k 🛒"
        }"#;

        let summary = parse_summary_arguments(arguments).unwrap();

        assert_eq!(summary.outperformers.len(), 1);
        assert_eq!(summary.wallet_activity[1].ens.as_deref(), Some("vitalik.eth"));
        assert!(summary.wallet_activity[0].is_for_you);
        assert_eq!(summary.market_insights.len(), 1);
    }

    #[test]
    fn test_parse_rejects_malformed_arguments() {
        let result = parse_summary_arguments(r#"{"outperformers": "not-an-array"}"#);

        assert!(result.is_err());
    }
}
