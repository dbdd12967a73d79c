#![allow(async_fn_in_trait)]
use alloy_primitives::{Address, U256};

use harbor_contracts::{HarborNodeDeposit, HarborNodeManager, HarborNodeStaking};

use crate::types::{HarborError, NodeAddr, NodeDetails, StakeAmount};
use crate::Config;

use super::{NodeContractManager, NodeContractResult};

pub trait NodeChainReaderTrait {
    async fn get_node_count(&self) -> NodeContractResult<U256>;

    async fn get_node_at(&self, index: U256) -> NodeContractResult<NodeAddr>;

    async fn get_node_exists(&self, node: NodeAddr) -> NodeContractResult<bool>;

    async fn get_node_withdrawal_address(&self, node: NodeAddr) -> NodeContractResult<Address>;

    async fn get_node_timezone_location(&self, node: NodeAddr) -> NodeContractResult<String>;

    async fn get_node_details(&self, node: NodeAddr) -> NodeContractResult<NodeDetails>;

    async fn get_total_hbr_stake(&self) -> NodeContractResult<StakeAmount>;

    async fn get_node_hbr_stake(&self, node: NodeAddr) -> NodeContractResult<StakeAmount>;

    async fn get_node_effective_hbr_stake(&self, node: NodeAddr)
        -> NodeContractResult<StakeAmount>;

    async fn get_node_minimum_hbr_stake(&self, node: NodeAddr)
        -> NodeContractResult<StakeAmount>;

    async fn get_node_eth_matched(&self, node: NodeAddr) -> NodeContractResult<U256>;

    async fn get_node_deposit_credit(&self, node: NodeAddr) -> NodeContractResult<U256>;

    async fn is_valid_deposit_amount(&self, amount: U256) -> NodeContractResult<bool>;

    async fn get_deposit_amounts(&self) -> NodeContractResult<Vec<U256>>;

    async fn get_smoothing_pool_registration_state(
        &self,
        node: NodeAddr,
    ) -> NodeContractResult<bool>;
}

impl<T: Config> NodeChainReaderTrait for NodeContractManager<T> {
    async fn get_node_count(&self) -> NodeContractResult<U256> {
        let node_manager =
            HarborNodeManager::new(self.node_manager_addr, self.eth_client_http.clone());
        node_manager
            .getNodeCount()
            .call()
            .await
            .map(|count| count._0)
            .map_err(HarborError::from)
    }

    async fn get_node_at(&self, index: U256) -> NodeContractResult<NodeAddr> {
        let node_manager =
            HarborNodeManager::new(self.node_manager_addr, self.eth_client_http.clone());
        node_manager
            .getNodeAt(index)
            .call()
            .await
            .map(|node| node._0)
            .map_err(HarborError::from)
    }

    async fn get_node_exists(&self, node: NodeAddr) -> NodeContractResult<bool> {
        let node_manager =
            HarborNodeManager::new(self.node_manager_addr, self.eth_client_http.clone());
        node_manager
            .getNodeExists(node)
            .call()
            .await
            .map(|exists| exists._0)
            .map_err(HarborError::from)
    }

    async fn get_node_withdrawal_address(&self, node: NodeAddr) -> NodeContractResult<Address> {
        let node_manager =
            HarborNodeManager::new(self.node_manager_addr, self.eth_client_http.clone());
        node_manager
            .getNodeWithdrawalAddress(node)
            .call()
            .await
            .map(|address| address._0)
            .map_err(HarborError::from)
    }

    async fn get_node_timezone_location(&self, node: NodeAddr) -> NodeContractResult<String> {
        let node_manager =
            HarborNodeManager::new(self.node_manager_addr, self.eth_client_http.clone());
        node_manager
            .getNodeTimezoneLocation(node)
            .call()
            .await
            .map(|timezone| timezone._0)
            .map_err(HarborError::from)
    }

    async fn get_node_details(&self, node: NodeAddr) -> NodeContractResult<NodeDetails> {
        let node_manager =
            HarborNodeManager::new(self.node_manager_addr, self.eth_client_http.clone());
        node_manager
            .getNodeDetails(node)
            .call()
            .await
            .map(|details| NodeDetails::from(details._0))
            .map_err(HarborError::from)
    }

    async fn get_total_hbr_stake(&self) -> NodeContractResult<StakeAmount> {
        let node_staking =
            HarborNodeStaking::new(self.node_staking_addr, self.eth_client_http.clone());
        node_staking
            .getTotalHBRStake()
            .call()
            .await
            .map(|stake| stake._0)
            .map_err(HarborError::from)
    }

    async fn get_node_hbr_stake(&self, node: NodeAddr) -> NodeContractResult<StakeAmount> {
        let node_staking =
            HarborNodeStaking::new(self.node_staking_addr, self.eth_client_http.clone());
        node_staking
            .getNodeHBRStake(node)
            .call()
            .await
            .map(|stake| stake._0)
            .map_err(HarborError::from)
    }

    async fn get_node_effective_hbr_stake(
        &self,
        node: NodeAddr,
    ) -> NodeContractResult<StakeAmount> {
        let node_staking =
            HarborNodeStaking::new(self.node_staking_addr, self.eth_client_http.clone());
        node_staking
            .getNodeEffectiveHBRStake(node)
            .call()
            .await
            .map(|stake| stake._0)
            .map_err(HarborError::from)
    }

    async fn get_node_minimum_hbr_stake(
        &self,
        node: NodeAddr,
    ) -> NodeContractResult<StakeAmount> {
        let node_staking =
            HarborNodeStaking::new(self.node_staking_addr, self.eth_client_http.clone());
        node_staking
            .getNodeMinimumHBRStake(node)
            .call()
            .await
            .map(|stake| stake._0)
            .map_err(HarborError::from)
    }

    async fn get_node_eth_matched(&self, node: NodeAddr) -> NodeContractResult<U256> {
        let node_staking =
            HarborNodeStaking::new(self.node_staking_addr, self.eth_client_http.clone());
        node_staking
            .getNodeETHMatched(node)
            .call()
            .await
            .map(|matched| matched._0)
            .map_err(HarborError::from)
    }

    async fn get_node_deposit_credit(&self, node: NodeAddr) -> NodeContractResult<U256> {
        let node_deposit =
            HarborNodeDeposit::new(self.node_deposit_addr, self.eth_client_http.clone());
        node_deposit
            .getNodeDepositCredit(node)
            .call()
            .await
            .map(|credit| credit._0)
            .map_err(HarborError::from)
    }

    async fn is_valid_deposit_amount(&self, amount: U256) -> NodeContractResult<bool> {
        let node_deposit =
            HarborNodeDeposit::new(self.node_deposit_addr, self.eth_client_http.clone());
        node_deposit
            .isValidDepositAmount(amount)
            .call()
            .await
            .map(|valid| valid._0)
            .map_err(HarborError::from)
    }

    async fn get_deposit_amounts(&self) -> NodeContractResult<Vec<U256>> {
        let node_deposit =
            HarborNodeDeposit::new(self.node_deposit_addr, self.eth_client_http.clone());
        node_deposit
            .getDepositAmounts()
            .call()
            .await
            .map(|amounts| amounts._0)
            .map_err(HarborError::from)
    }

    async fn get_smoothing_pool_registration_state(
        &self,
        node: NodeAddr,
    ) -> NodeContractResult<bool> {
        let node_manager =
            HarborNodeManager::new(self.node_manager_addr, self.eth_client_http.clone());
        node_manager
            .getSmoothingPoolRegistrationState(node)
            .call()
            .await
            .map(|state| state._0)
            .map_err(HarborError::from)
    }
}
