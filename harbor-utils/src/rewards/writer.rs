use alloy_primitives::{B256, U256};
use alloy_rpc_types::TransactionReceipt;
use async_trait::async_trait;

use harbor_contracts::{HarborClaimDAO, HarborMerkleDistributor, HarborRewardsPool};

use crate::types::{HarborError, NodeAddr};
use crate::Config;

use super::RewardsContractManager;

/// One node's share of a reward interval, with the Merkle proof for it.
#[derive(Debug, Clone)]
pub struct RewardsClaim {
    pub reward_index: Vec<U256>,
    pub amount_hbr: Vec<U256>,
    pub amount_eth: Vec<U256>,
    pub merkle_proof: Vec<Vec<B256>>,
}

#[async_trait]
pub trait RewardsWriter: Send + Sync {
    async fn submit_reward_snapshot(
        &self,
        submission: HarborRewardsPool::RewardSubmission,
    ) -> Result<TransactionReceipt, HarborError>;

    async fn execute_reward_snapshot(
        &self,
        submission: HarborRewardsPool::RewardSubmission,
    ) -> Result<TransactionReceipt, HarborError>;

    async fn claim(
        &self,
        node: NodeAddr,
        rewards: RewardsClaim,
    ) -> Result<TransactionReceipt, HarborError>;

    /// Claims and restakes `stake_amount` of the claimed HBR in one
    /// transaction.
    async fn claim_and_stake(
        &self,
        node: NodeAddr,
        rewards: RewardsClaim,
        stake_amount: U256,
    ) -> Result<TransactionReceipt, HarborError>;

    async fn pay_out_treasury_contracts(&self) -> Result<TransactionReceipt, HarborError>;
}

#[async_trait]
impl<T: Config> RewardsWriter for RewardsContractManager<T> {
    async fn submit_reward_snapshot(
        &self,
        submission: HarborRewardsPool::RewardSubmission,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!(
            "submitting reward snapshot for interval {}",
            submission.rewardIndex
        );

        let rewards_pool =
            HarborRewardsPool::new(self.rewards_pool_addr, self.eth_client_http.clone());
        let receipt = rewards_pool
            .submitRewardSnapshot(submission)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("snapshot submitted, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn execute_reward_snapshot(
        &self,
        submission: HarborRewardsPool::RewardSubmission,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!(
            "executing reward snapshot for interval {}",
            submission.rewardIndex
        );

        let rewards_pool =
            HarborRewardsPool::new(self.rewards_pool_addr, self.eth_client_http.clone());
        let receipt = rewards_pool
            .executeRewardSnapshot(submission)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("snapshot executed, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn claim(
        &self,
        node: NodeAddr,
        rewards: RewardsClaim,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!(
            "claiming rewards for node {} over {} intervals",
            node,
            rewards.reward_index.len()
        );

        let distributor = HarborMerkleDistributor::new(
            self.merkle_distributor_addr,
            self.eth_client_http.clone(),
        );
        let receipt = distributor
            .claim(
                node,
                rewards.reward_index,
                rewards.amount_hbr,
                rewards.amount_eth,
                rewards.merkle_proof,
            )
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("rewards claimed, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn claim_and_stake(
        &self,
        node: NodeAddr,
        rewards: RewardsClaim,
        stake_amount: U256,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!(
            "claiming rewards for node {} and restaking {} HBR",
            node,
            stake_amount
        );

        let distributor = HarborMerkleDistributor::new(
            self.merkle_distributor_addr,
            self.eth_client_http.clone(),
        );
        let receipt = distributor
            .claimAndStake(
                node,
                rewards.reward_index,
                rewards.amount_hbr,
                rewards.amount_eth,
                rewards.merkle_proof,
                stake_amount,
            )
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!(
            "rewards claimed and restaked, txHash: {}",
            receipt.transaction_hash
        );

        Ok(receipt)
    }

    async fn pay_out_treasury_contracts(&self) -> Result<TransactionReceipt, HarborError> {
        log::info!("paying out recurring treasury contracts");

        let claim_dao = HarborClaimDAO::new(self.claim_dao_addr, self.eth_client_http.clone());
        let receipt = claim_dao
            .payOutContracts()
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("treasury payouts done, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }
}
