use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_rpc_types::TransactionReceipt;
use async_trait::async_trait;

use harbor_contracts::{
    HarborNodeDeposit, HarborNodeManager, HarborNodeStaking, HarborStorage, HarborTokenHBR,
};

use crate::types::{HarborError, NodeAddr, ValidatorPubkey, ValidatorSignature};
use crate::Config;

use super::NodeContractManager;

/// Everything the node deposit contract needs to fund a new minipool.
#[derive(Debug, Clone)]
pub struct NodeDepositParams {
    pub bond_amount: U256,
    pub minimum_node_fee: U256,
    pub validator_pubkey: ValidatorPubkey,
    pub validator_signature: ValidatorSignature,
    pub deposit_data_root: B256,
    pub salt: U256,
    pub expected_minipool_address: Address,
}

#[async_trait]
pub trait NodeWriter: Send + Sync {
    async fn register_node(
        &self,
        timezone_location: &str,
    ) -> Result<TransactionReceipt, HarborError>;

    async fn set_timezone_location(
        &self,
        timezone_location: &str,
    ) -> Result<TransactionReceipt, HarborError>;

    async fn set_withdrawal_address(
        &self,
        node: NodeAddr,
        withdrawal_address: Address,
        confirm: bool,
    ) -> Result<TransactionReceipt, HarborError>;

    async fn set_smoothing_pool_registration_state(
        &self,
        state: bool,
    ) -> Result<TransactionReceipt, HarborError>;

    /// Approves the staking contract for `amount` HBR, then stakes it.
    async fn stake_hbr(&self, amount: U256) -> Result<TransactionReceipt, HarborError>;

    async fn withdraw_hbr(&self, amount: U256) -> Result<TransactionReceipt, HarborError>;

    async fn node_deposit(
        &self,
        params: NodeDepositParams,
    ) -> Result<TransactionReceipt, HarborError>;

    async fn node_deposit_with_credit(
        &self,
        params: NodeDepositParams,
    ) -> Result<TransactionReceipt, HarborError>;
}

#[async_trait]
impl<T: Config> NodeWriter for NodeContractManager<T> {
    async fn register_node(
        &self,
        timezone_location: &str,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!("registering node operator in timezone {}", timezone_location);

        let node_manager =
            HarborNodeManager::new(self.node_manager_addr, self.eth_client_http.clone());
        let receipt = node_manager
            .registerNode(timezone_location.to_owned())
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("node registered, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn set_timezone_location(
        &self,
        timezone_location: &str,
    ) -> Result<TransactionReceipt, HarborError> {
        let node_manager =
            HarborNodeManager::new(self.node_manager_addr, self.eth_client_http.clone());
        let receipt = node_manager
            .setTimezoneLocation(timezone_location.to_owned())
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("timezone updated, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn set_withdrawal_address(
        &self,
        node: NodeAddr,
        withdrawal_address: Address,
        confirm: bool,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!(
            "setting withdrawal address of node {} to {}",
            node,
            withdrawal_address
        );

        // Withdrawal addresses live on the storage contract so they
        // survive protocol upgrades.
        let storage = HarborStorage::new(self.storage_addr, self.eth_client_http.clone());
        let receipt = storage
            .setWithdrawalAddress(node, withdrawal_address, confirm)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!(
            "withdrawal address updated, txHash: {}",
            receipt.transaction_hash
        );

        Ok(receipt)
    }

    async fn set_smoothing_pool_registration_state(
        &self,
        state: bool,
    ) -> Result<TransactionReceipt, HarborError> {
        let node_manager =
            HarborNodeManager::new(self.node_manager_addr, self.eth_client_http.clone());
        let receipt = node_manager
            .setSmoothingPoolRegistrationState(state)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!(
            "smoothing pool registration set to {}, txHash: {}",
            state,
            receipt.transaction_hash
        );

        Ok(receipt)
    }

    async fn stake_hbr(&self, amount: U256) -> Result<TransactionReceipt, HarborError> {
        log::info!("approving {} HBR for the staking contract", amount);

        let token = HarborTokenHBR::new(self.token_hbr_addr, self.eth_client_http.clone());
        let receipt = token
            .approve(self.node_staking_addr, amount)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("approval included, txHash: {}", receipt.transaction_hash);

        let node_staking =
            HarborNodeStaking::new(self.node_staking_addr, self.eth_client_http.clone());
        let receipt = node_staking
            .stakeHBR(amount)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!(
            "successfully staked {} HBR, txHash: {}",
            amount,
            receipt.transaction_hash
        );

        Ok(receipt)
    }

    async fn withdraw_hbr(&self, amount: U256) -> Result<TransactionReceipt, HarborError> {
        log::info!("withdrawing {} HBR stake", amount);

        let node_staking =
            HarborNodeStaking::new(self.node_staking_addr, self.eth_client_http.clone());
        let receipt = node_staking
            .withdrawHBR(amount)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("stake withdrawn, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn node_deposit(
        &self,
        params: NodeDepositParams,
    ) -> Result<TransactionReceipt, HarborError> {
        let NodeDepositParams {
            bond_amount,
            minimum_node_fee,
            validator_pubkey,
            validator_signature,
            deposit_data_root,
            salt,
            expected_minipool_address,
        } = params;

        log::info!(
            "creating minipool with a {} wei bond, expected address {}",
            bond_amount,
            expected_minipool_address
        );

        let node_deposit =
            HarborNodeDeposit::new(self.node_deposit_addr, self.eth_client_http.clone());
        let receipt = node_deposit
            .deposit(
                bond_amount,
                minimum_node_fee,
                Bytes::copy_from_slice(validator_pubkey.as_slice()),
                Bytes::copy_from_slice(validator_signature.as_slice()),
                deposit_data_root,
                salt,
                expected_minipool_address,
            )
            .value(bond_amount)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("node deposit included, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn node_deposit_with_credit(
        &self,
        params: NodeDepositParams,
    ) -> Result<TransactionReceipt, HarborError> {
        let NodeDepositParams {
            bond_amount,
            minimum_node_fee,
            validator_pubkey,
            validator_signature,
            deposit_data_root,
            salt,
            expected_minipool_address,
        } = params;

        log::info!(
            "creating minipool from deposit credit with a {} wei bond",
            bond_amount
        );

        let node_deposit =
            HarborNodeDeposit::new(self.node_deposit_addr, self.eth_client_http.clone());
        let receipt = node_deposit
            .depositWithCredit(
                bond_amount,
                minimum_node_fee,
                Bytes::copy_from_slice(validator_pubkey.as_slice()),
                Bytes::copy_from_slice(validator_signature.as_slice()),
                deposit_data_root,
                salt,
                expected_minipool_address,
            )
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!(
            "credit-funded deposit included, txHash: {}",
            receipt.transaction_hash
        );

        Ok(receipt)
    }
}
