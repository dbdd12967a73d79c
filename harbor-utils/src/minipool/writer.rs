use alloy_primitives::{Bytes, B256};
use alloy_rpc_types::TransactionReceipt;
use async_trait::async_trait;

use harbor_contracts::HarborMinipool;

use crate::types::{HarborError, MinipoolAddr, ValidatorSignature};
use crate::Config;

use super::MinipoolContractManager;

#[async_trait]
pub trait MinipoolWriter: Send + Sync {
    /// Moves a prelaunch minipool to staking by forwarding the remaining
    /// deposit to the beacon deposit contract.
    async fn stake(
        &self,
        minipool: MinipoolAddr,
        validator_signature: ValidatorSignature,
        deposit_data_root: B256,
    ) -> Result<TransactionReceipt, HarborError>;

    async fn refund(&self, minipool: MinipoolAddr) -> Result<TransactionReceipt, HarborError>;

    async fn distribute_balance(
        &self,
        minipool: MinipoolAddr,
        rewards_only: bool,
    ) -> Result<TransactionReceipt, HarborError>;

    async fn dissolve(&self, minipool: MinipoolAddr) -> Result<TransactionReceipt, HarborError>;

    async fn close(&self, minipool: MinipoolAddr) -> Result<TransactionReceipt, HarborError>;

    async fn finalise(&self, minipool: MinipoolAddr) -> Result<TransactionReceipt, HarborError>;

    async fn vote_scrub(&self, minipool: MinipoolAddr)
        -> Result<TransactionReceipt, HarborError>;
}

#[async_trait]
impl<T: Config> MinipoolWriter for MinipoolContractManager<T> {
    async fn stake(
        &self,
        minipool: MinipoolAddr,
        validator_signature: ValidatorSignature,
        deposit_data_root: B256,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!("staking minipool {}", minipool);

        let delegate = HarborMinipool::new(minipool, self.eth_client_http.clone());
        let receipt = delegate
            .stake(
                Bytes::copy_from_slice(validator_signature.as_slice()),
                deposit_data_root,
            )
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!(
            "minipool {} staked, txHash: {}",
            minipool,
            receipt.transaction_hash
        );

        Ok(receipt)
    }

    async fn refund(&self, minipool: MinipoolAddr) -> Result<TransactionReceipt, HarborError> {
        log::info!("refunding node balance of minipool {}", minipool);

        let delegate = HarborMinipool::new(minipool, self.eth_client_http.clone());
        let receipt = delegate.refund().send().await?.get_receipt().await?;

        log::info!("refund complete, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn distribute_balance(
        &self,
        minipool: MinipoolAddr,
        rewards_only: bool,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!(
            "distributing balance of minipool {} (rewards only: {})",
            minipool,
            rewards_only
        );

        let delegate = HarborMinipool::new(minipool, self.eth_client_http.clone());
        let receipt = delegate
            .distributeBalance(rewards_only)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("balance distributed, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn dissolve(&self, minipool: MinipoolAddr) -> Result<TransactionReceipt, HarborError> {
        log::info!("dissolving minipool {}", minipool);

        let delegate = HarborMinipool::new(minipool, self.eth_client_http.clone());
        let receipt = delegate.dissolve().send().await?.get_receipt().await?;

        log::info!("minipool dissolved, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn close(&self, minipool: MinipoolAddr) -> Result<TransactionReceipt, HarborError> {
        log::info!("closing dissolved minipool {}", minipool);

        let delegate = HarborMinipool::new(minipool, self.eth_client_http.clone());
        let receipt = delegate.close().send().await?.get_receipt().await?;

        log::info!("minipool closed, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn finalise(&self, minipool: MinipoolAddr) -> Result<TransactionReceipt, HarborError> {
        log::info!("finalising minipool {}", minipool);

        let delegate = HarborMinipool::new(minipool, self.eth_client_http.clone());
        let receipt = delegate.finalise().send().await?.get_receipt().await?;

        log::info!("minipool finalised, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn vote_scrub(
        &self,
        minipool: MinipoolAddr,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!("voting to scrub minipool {}", minipool);

        let delegate = HarborMinipool::new(minipool, self.eth_client_http.clone());
        let receipt = delegate.voteScrub().send().await?.get_receipt().await?;

        log::info!("scrub vote recorded, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }
}
