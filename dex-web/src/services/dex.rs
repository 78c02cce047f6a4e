//! Exchange client seam
//!
//! The trading panel talks to the chain through [`DexClient`] so the mock
//! used by this proof of concept can later be replaced by a real contract
//! client without touching the view. [`MockDex`] resolves fixed constants
//! and always succeeds.

use serde::{Deserialize, Serialize};

/// Result of a buy or sell call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeReceipt {
    pub success: bool,
    pub message: String,
}

/// Chain-facing operations the exchange panel needs.
#[allow(async_fn_in_trait)]
pub trait DexClient {
    /// Current token price in CCD.
    async fn token_price(&self) -> Result<f64, String>;

    /// Tokens held by the exchange contract.
    async fn contract_liquidity(&self) -> Result<u64, String>;

    async fn buy_tokens(&self, amount: f64) -> Result<TradeReceipt, String>;

    async fn sell_tokens(&self, amount: f64) -> Result<TradeReceipt, String>;
}

/// Stand-in client resolving fixed values, no chain interaction.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockDex;

pub const MOCK_TOKEN_PRICE_CCD: f64 = 0.1;
pub const MOCK_CONTRACT_LIQUIDITY: u64 = 1_000_000;

impl DexClient for MockDex {
    async fn token_price(&self) -> Result<f64, String> {
        Ok(MOCK_TOKEN_PRICE_CCD)
    }

    async fn contract_liquidity(&self) -> Result<u64, String> {
        Ok(MOCK_CONTRACT_LIQUIDITY)
    }

    async fn buy_tokens(&self, amount: f64) -> Result<TradeReceipt, String> {
        Ok(TradeReceipt {
            success: true,
            message: format!("Bought {} tokens", amount),
        })
    }

    async fn sell_tokens(&self, amount: f64) -> Result<TradeReceipt, String> {
        Ok(TradeReceipt {
            success: true,
            message: format!("Sold {} tokens", amount),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_resolves_fixed_market_data() {
        let dex = MockDex;
        assert_eq!(dex.token_price().await.unwrap(), 0.1);
        assert_eq!(dex.contract_liquidity().await.unwrap(), 1_000_000);
    }

    #[tokio::test]
    async fn mock_trades_always_succeed() {
        let dex = MockDex;

        let buy = dex.buy_tokens(50.0).await.unwrap();
        assert!(buy.success);
        assert_eq!(buy.message, "Bought 50 tokens");

        let sell = dex.sell_tokens(12.5).await.unwrap();
        assert!(sell.success);
        assert_eq!(sell.message, "Sold 12.5 tokens");
    }
}
