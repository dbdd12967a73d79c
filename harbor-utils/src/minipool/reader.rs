#![allow(async_fn_in_trait)]
use alloy_primitives::{Address, Bytes, I256, U256};

use harbor_contracts::{HarborMinipool, HarborMinipoolManager, HarborMinipoolQueue};

use crate::types::{HarborError, MinipoolAddr, MinipoolStatus, NodeAddr, ValidatorPubkey};
use crate::Config;

use super::{MinipoolContractManager, MinipoolContractResult};

/// Per-status registry counts, in lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinipoolCounts {
    pub initialised: u64,
    pub prelaunch: u64,
    pub staking: u64,
    pub withdrawable: u64,
    pub dissolved: u64,
}

pub trait MinipoolChainReaderTrait {
    async fn get_minipool_count(&self) -> MinipoolContractResult<U256>;

    async fn get_staking_minipool_count(&self) -> MinipoolContractResult<U256>;

    async fn get_minipool_counts(
        &self,
        offset: U256,
        limit: U256,
    ) -> MinipoolContractResult<MinipoolCounts>;

    async fn get_minipool_at(&self, index: U256) -> MinipoolContractResult<MinipoolAddr>;

    async fn get_minipool_exists(&self, minipool: MinipoolAddr) -> MinipoolContractResult<bool>;

    async fn get_minipool_by_pubkey(
        &self,
        pubkey: ValidatorPubkey,
    ) -> MinipoolContractResult<Option<MinipoolAddr>>;

    async fn get_minipool_pubkey(&self, minipool: MinipoolAddr)
        -> MinipoolContractResult<Bytes>;

    async fn get_node_minipools(&self, node: NodeAddr)
        -> MinipoolContractResult<Vec<MinipoolAddr>>;

    async fn get_minipool_status(
        &self,
        minipool: MinipoolAddr,
    ) -> MinipoolContractResult<MinipoolStatus>;

    async fn get_minipool_node_address(
        &self,
        minipool: MinipoolAddr,
    ) -> MinipoolContractResult<NodeAddr>;

    async fn get_minipool_node_refund_balance(
        &self,
        minipool: MinipoolAddr,
    ) -> MinipoolContractResult<U256>;

    async fn get_queue_total_length(&self) -> MinipoolContractResult<U256>;

    async fn get_queue_effective_capacity(&self) -> MinipoolContractResult<U256>;

    async fn get_queue_position(&self, minipool: MinipoolAddr) -> MinipoolContractResult<I256>;
}

impl<T: Config> MinipoolChainReaderTrait for MinipoolContractManager<T> {
    async fn get_minipool_count(&self) -> MinipoolContractResult<U256> {
        let manager =
            HarborMinipoolManager::new(self.minipool_manager_addr, self.eth_client_http.clone());
        manager
            .getMinipoolCount()
            .call()
            .await
            .map(|count| count._0)
            .map_err(HarborError::from)
    }

    async fn get_staking_minipool_count(&self) -> MinipoolContractResult<U256> {
        let manager =
            HarborMinipoolManager::new(self.minipool_manager_addr, self.eth_client_http.clone());
        manager
            .getStakingMinipoolCount()
            .call()
            .await
            .map(|count| count._0)
            .map_err(HarborError::from)
    }

    async fn get_minipool_counts(
        &self,
        offset: U256,
        limit: U256,
    ) -> MinipoolContractResult<MinipoolCounts> {
        let manager =
            HarborMinipoolManager::new(self.minipool_manager_addr, self.eth_client_http.clone());
        let counts = manager.getMinipoolCountPerStatus(offset, limit).call().await?;
        Ok(MinipoolCounts {
            initialised: u64::try_from(counts.initialisedCount).unwrap_or(u64::MAX),
            prelaunch: u64::try_from(counts.prelaunchCount).unwrap_or(u64::MAX),
            staking: u64::try_from(counts.stakingCount).unwrap_or(u64::MAX),
            withdrawable: u64::try_from(counts.withdrawableCount).unwrap_or(u64::MAX),
            dissolved: u64::try_from(counts.dissolvedCount).unwrap_or(u64::MAX),
        })
    }

    async fn get_minipool_at(&self, index: U256) -> MinipoolContractResult<MinipoolAddr> {
        let manager =
            HarborMinipoolManager::new(self.minipool_manager_addr, self.eth_client_http.clone());
        manager
            .getMinipoolAt(index)
            .call()
            .await
            .map(|minipool| minipool._0)
            .map_err(HarborError::from)
    }

    async fn get_minipool_exists(&self, minipool: MinipoolAddr) -> MinipoolContractResult<bool> {
        let manager =
            HarborMinipoolManager::new(self.minipool_manager_addr, self.eth_client_http.clone());
        manager
            .getMinipoolExists(minipool)
            .call()
            .await
            .map(|exists| exists._0)
            .map_err(HarborError::from)
    }

    async fn get_minipool_by_pubkey(
        &self,
        pubkey: ValidatorPubkey,
    ) -> MinipoolContractResult<Option<MinipoolAddr>> {
        let manager =
            HarborMinipoolManager::new(self.minipool_manager_addr, self.eth_client_http.clone());
        let minipool = manager
            .getMinipoolByPubkey(Bytes::copy_from_slice(pubkey.as_slice()))
            .call()
            .await
            .map(|minipool| minipool._0)?;
        if minipool == Address::ZERO {
            Ok(None)
        } else {
            Ok(Some(minipool))
        }
    }

    async fn get_minipool_pubkey(
        &self,
        minipool: MinipoolAddr,
    ) -> MinipoolContractResult<Bytes> {
        let manager =
            HarborMinipoolManager::new(self.minipool_manager_addr, self.eth_client_http.clone());
        manager
            .getMinipoolPubkey(minipool)
            .call()
            .await
            .map(|pubkey| pubkey._0)
            .map_err(HarborError::from)
    }

    async fn get_node_minipools(
        &self,
        node: NodeAddr,
    ) -> MinipoolContractResult<Vec<MinipoolAddr>> {
        let manager =
            HarborMinipoolManager::new(self.minipool_manager_addr, self.eth_client_http.clone());
        let count = manager
            .getNodeMinipoolCount(node)
            .call()
            .await
            .map(|count| count._0)?;

        let mut minipools = Vec::new();
        let mut index = U256::ZERO;
        while index < count {
            let minipool = manager
                .getNodeMinipoolAt(node, index)
                .call()
                .await
                .map(|minipool| minipool._0)?;
            minipools.push(minipool);
            index += U256::from(1u64);
        }
        Ok(minipools)
    }

    async fn get_minipool_status(
        &self,
        minipool: MinipoolAddr,
    ) -> MinipoolContractResult<MinipoolStatus> {
        let delegate = HarborMinipool::new(minipool, self.eth_client_http.clone());
        let raw = delegate
            .getStatus()
            .call()
            .await
            .map(|status| status._0)
            .map_err(HarborError::from)?;
        MinipoolStatus::from_raw(raw)
    }

    async fn get_minipool_node_address(
        &self,
        minipool: MinipoolAddr,
    ) -> MinipoolContractResult<NodeAddr> {
        let delegate = HarborMinipool::new(minipool, self.eth_client_http.clone());
        delegate
            .getNodeAddress()
            .call()
            .await
            .map(|node| node._0)
            .map_err(HarborError::from)
    }

    async fn get_minipool_node_refund_balance(
        &self,
        minipool: MinipoolAddr,
    ) -> MinipoolContractResult<U256> {
        let delegate = HarborMinipool::new(minipool, self.eth_client_http.clone());
        delegate
            .getNodeRefundBalance()
            .call()
            .await
            .map(|balance| balance._0)
            .map_err(HarborError::from)
    }

    async fn get_queue_total_length(&self) -> MinipoolContractResult<U256> {
        let queue =
            HarborMinipoolQueue::new(self.minipool_queue_addr, self.eth_client_http.clone());
        queue
            .getTotalLength()
            .call()
            .await
            .map(|length| length._0)
            .map_err(HarborError::from)
    }

    async fn get_queue_effective_capacity(&self) -> MinipoolContractResult<U256> {
        let queue =
            HarborMinipoolQueue::new(self.minipool_queue_addr, self.eth_client_http.clone());
        queue
            .getEffectiveCapacity()
            .call()
            .await
            .map(|capacity| capacity._0)
            .map_err(HarborError::from)
    }

    async fn get_queue_position(
        &self,
        minipool: MinipoolAddr,
    ) -> MinipoolContractResult<I256> {
        let queue =
            HarborMinipoolQueue::new(self.minipool_queue_addr, self.eth_client_http.clone());
        queue
            .getMinipoolPosition(minipool)
            .call()
            .await
            .map(|position| position._0)
            .map_err(HarborError::from)
    }
}
