use alloy_primitives::U256;
use alloy_rpc_types::TransactionReceipt;
use async_trait::async_trait;

use harbor_contracts::HarborDepositPool;

use crate::types::HarborError;
use crate::Config;

use super::DepositPoolContractManager;

#[async_trait]
pub trait DepositPoolWriter: Send + Sync {
    async fn deposit(&self, amount: U256) -> Result<TransactionReceipt, HarborError>;

    async fn assign_deposits(&self) -> Result<TransactionReceipt, HarborError>;

    async fn withdraw_excess_balance(
        &self,
        amount: U256,
    ) -> Result<TransactionReceipt, HarborError>;
}

#[async_trait]
impl<T: Config> DepositPoolWriter for DepositPoolContractManager<T> {
    async fn deposit(&self, amount: U256) -> Result<TransactionReceipt, HarborError> {
        log::info!("depositing {} wei into the deposit pool", amount);

        let deposit_pool =
            HarborDepositPool::new(self.deposit_pool_addr, self.eth_client_http.clone());
        let receipt = deposit_pool
            .deposit()
            .value(amount)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("deposit included, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn assign_deposits(&self) -> Result<TransactionReceipt, HarborError> {
        log::info!("assigning queued deposits to minipools");

        let deposit_pool =
            HarborDepositPool::new(self.deposit_pool_addr, self.eth_client_http.clone());
        let receipt = deposit_pool
            .assignDeposits()
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("deposits assigned, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn withdraw_excess_balance(
        &self,
        amount: U256,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!("withdrawing {} wei of excess pool balance", amount);

        let deposit_pool =
            HarborDepositPool::new(self.deposit_pool_addr, self.eth_client_http.clone());
        let receipt = deposit_pool
            .withdrawExcessBalance(amount)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("excess withdrawn, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }
}
