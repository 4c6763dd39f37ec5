use crate::{info, summary, wallets};
use cabal_core::ai::dto::{ActivitySummary, Outperformer, WalletSummary};
use cabal_core::helpers::dto::{TokenInfo, TokenPurchase, Transaction, WalletActivity};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        info::handler::info,
        wallets::handler::list_wallets,
        wallets::handler::add_wallet,
        wallets::handler::remove_wallet,
        summary::handler::generate_summary,
    ),
    components(schemas(
        info::dto::Info,
        wallets::dto::AddWalletRequest,
        wallets::dto::AddWalletResponse,
        wallets::dto::RemoveWalletResponse,
        wallets::dto::WalletListResponse,
        summary::dto::SummaryRequest,
        summary::dto::SummaryData,
        summary::dto::SummaryResponse,
        ActivitySummary,
        Outperformer,
        WalletSummary,
        TokenInfo,
        TokenPurchase,
        Transaction,
        WalletActivity,
    ))
)]
pub struct ApiDoc;
