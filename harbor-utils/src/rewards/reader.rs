#![allow(async_fn_in_trait)]
use alloy_primitives::{B256, U256};

use harbor_contracts::{HarborClaimDAO, HarborMerkleDistributor, HarborRewardsPool};

use crate::types::{HarborError, NodeAddr};
use crate::Config;

use super::{RewardsContractManager, RewardsContractResult};

pub trait RewardsChainReaderTrait {
    async fn get_reward_index(&self) -> RewardsContractResult<U256>;

    async fn get_pending_hbr_rewards(&self) -> RewardsContractResult<U256>;

    async fn get_pending_eth_rewards(&self) -> RewardsContractResult<U256>;

    async fn get_claim_interval_time_start(&self) -> RewardsContractResult<U256>;

    async fn get_claim_interval_time(&self) -> RewardsContractResult<U256>;

    async fn get_claim_intervals_passed(&self) -> RewardsContractResult<U256>;

    async fn get_trusted_node_submitted(
        &self,
        trusted_node: NodeAddr,
        reward_index: U256,
    ) -> RewardsContractResult<bool>;

    async fn is_claimed(
        &self,
        reward_index: U256,
        node: NodeAddr,
    ) -> RewardsContractResult<bool>;

    async fn get_merkle_root(&self, reward_index: U256) -> RewardsContractResult<B256>;

    async fn get_treasury_balance(&self, recipient: NodeAddr) -> RewardsContractResult<U256>;
}

impl<T: Config> RewardsChainReaderTrait for RewardsContractManager<T> {
    async fn get_reward_index(&self) -> RewardsContractResult<U256> {
        let rewards_pool =
            HarborRewardsPool::new(self.rewards_pool_addr, self.eth_client_http.clone());
        rewards_pool
            .getRewardIndex()
            .call()
            .await
            .map(|index| index._0)
            .map_err(HarborError::from)
    }

    async fn get_pending_hbr_rewards(&self) -> RewardsContractResult<U256> {
        let rewards_pool =
            HarborRewardsPool::new(self.rewards_pool_addr, self.eth_client_http.clone());
        rewards_pool
            .getPendingHBRRewards()
            .call()
            .await
            .map(|pending| pending._0)
            .map_err(HarborError::from)
    }

    async fn get_pending_eth_rewards(&self) -> RewardsContractResult<U256> {
        let rewards_pool =
            HarborRewardsPool::new(self.rewards_pool_addr, self.eth_client_http.clone());
        rewards_pool
            .getPendingETHRewards()
            .call()
            .await
            .map(|pending| pending._0)
            .map_err(HarborError::from)
    }

    async fn get_claim_interval_time_start(&self) -> RewardsContractResult<U256> {
        let rewards_pool =
            HarborRewardsPool::new(self.rewards_pool_addr, self.eth_client_http.clone());
        rewards_pool
            .getClaimIntervalTimeStart()
            .call()
            .await
            .map(|start| start._0)
            .map_err(HarborError::from)
    }

    async fn get_claim_interval_time(&self) -> RewardsContractResult<U256> {
        let rewards_pool =
            HarborRewardsPool::new(self.rewards_pool_addr, self.eth_client_http.clone());
        rewards_pool
            .getClaimIntervalTime()
            .call()
            .await
            .map(|interval| interval._0)
            .map_err(HarborError::from)
    }

    async fn get_claim_intervals_passed(&self) -> RewardsContractResult<U256> {
        let rewards_pool =
            HarborRewardsPool::new(self.rewards_pool_addr, self.eth_client_http.clone());
        rewards_pool
            .getClaimIntervalsPassed()
            .call()
            .await
            .map(|passed| passed._0)
            .map_err(HarborError::from)
    }

    async fn get_trusted_node_submitted(
        &self,
        trusted_node: NodeAddr,
        reward_index: U256,
    ) -> RewardsContractResult<bool> {
        let rewards_pool =
            HarborRewardsPool::new(self.rewards_pool_addr, self.eth_client_http.clone());
        rewards_pool
            .getTrustedNodeSubmitted(trusted_node, reward_index)
            .call()
            .await
            .map(|submitted| submitted._0)
            .map_err(HarborError::from)
    }

    async fn is_claimed(
        &self,
        reward_index: U256,
        node: NodeAddr,
    ) -> RewardsContractResult<bool> {
        let distributor = HarborMerkleDistributor::new(
            self.merkle_distributor_addr,
            self.eth_client_http.clone(),
        );
        distributor
            .isClaimed(reward_index, node)
            .call()
            .await
            .map(|claimed| claimed._0)
            .map_err(HarborError::from)
    }

    async fn get_merkle_root(&self, reward_index: U256) -> RewardsContractResult<B256> {
        let distributor = HarborMerkleDistributor::new(
            self.merkle_distributor_addr,
            self.eth_client_http.clone(),
        );
        distributor
            .getMerkleRoot(reward_index)
            .call()
            .await
            .map(|root| root._0)
            .map_err(HarborError::from)
    }

    async fn get_treasury_balance(&self, recipient: NodeAddr) -> RewardsContractResult<U256> {
        let claim_dao = HarborClaimDAO::new(self.claim_dao_addr, self.eth_client_http.clone());
        claim_dao
            .getBalance(recipient)
            .call()
            .await
            .map(|balance| balance._0)
            .map_err(HarborError::from)
    }
}
