use alloy_primitives::U256;
use alloy_rpc_types::TransactionReceipt;
use async_trait::async_trait;

use harbor_contracts::{HarborNetworkBalances, HarborNetworkPenalties, HarborNetworkPrices};

use crate::types::{HarborError, MinipoolAddr};
use crate::Config;

use super::NetworkContractManager;

/// Oracle-side balance report for one reporting block.
#[derive(Debug, Clone, Copy)]
pub struct BalanceReport {
    pub block: U256,
    pub total_eth: U256,
    pub staking_eth: U256,
    pub seth_supply: U256,
}

/// Submissions made by oracle DAO members. Each submission is counted
/// on chain and takes effect once a quorum agrees on the same values.
#[async_trait]
pub trait NetworkOracleWriter: Send + Sync {
    async fn submit_balances(
        &self,
        report: BalanceReport,
    ) -> Result<TransactionReceipt, HarborError>;

    async fn submit_prices(
        &self,
        block: U256,
        hbr_price: U256,
    ) -> Result<TransactionReceipt, HarborError>;

    async fn submit_penalty(
        &self,
        minipool: MinipoolAddr,
        block: U256,
    ) -> Result<TransactionReceipt, HarborError>;
}

#[async_trait]
impl<T: Config> NetworkOracleWriter for NetworkContractManager<T> {
    async fn submit_balances(
        &self,
        report: BalanceReport,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!(
            "submitting balance report for block {}: total {}, staking {}",
            report.block,
            report.total_eth,
            report.staking_eth
        );

        let balances =
            HarborNetworkBalances::new(self.balances_addr, self.eth_client_http.clone());
        let receipt = balances
            .submitBalances(
                report.block,
                report.total_eth,
                report.staking_eth,
                report.seth_supply,
            )
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("balances submitted, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn submit_prices(
        &self,
        block: U256,
        hbr_price: U256,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!(
            "submitting HBR price {} for block {}",
            hbr_price,
            block
        );

        let prices = HarborNetworkPrices::new(self.prices_addr, self.eth_client_http.clone());
        let receipt = prices
            .submitPrices(block, hbr_price)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("prices submitted, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn submit_penalty(
        &self,
        minipool: MinipoolAddr,
        block: U256,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!(
            "submitting penalty vote for minipool {} at block {}",
            minipool,
            block
        );

        let penalties =
            HarborNetworkPenalties::new(self.penalties_addr, self.eth_client_http.clone());
        let receipt = penalties
            .submitPenalty(minipool, block)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("penalty submitted, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }
}
