use alloy_primitives::Address;

use crate::registry::ContractRegistry;
use crate::types::HarborError;
use crate::utils::contract_names;
use crate::Config;

pub mod reader;
pub mod writer;

pub type NodeContractResult<T> = Result<T, HarborError>;

#[derive(Clone)]
pub struct NodeContractManager<T: Config> {
    storage_addr: Address,
    node_manager_addr: Address,
    node_staking_addr: Address,
    node_deposit_addr: Address,
    token_hbr_addr: Address,
    eth_client_http: T::PH,
    eth_client_ws: T::PW,
    signer: T::S,
}

impl<T: Config> NodeContractManager<T> {
    pub async fn build(
        registry: &ContractRegistry<T>,
        eth_client_http: T::PH,
        eth_client_ws: T::PW,
        signer: T::S,
    ) -> Result<Self, HarborError> {
        let node_manager_addr = registry.address_of(contract_names::NODE_MANAGER).await?;
        let node_staking_addr = registry.address_of(contract_names::NODE_STAKING).await?;
        let node_deposit_addr = registry.address_of(contract_names::NODE_DEPOSIT).await?;
        let token_hbr_addr = registry.address_of(contract_names::TOKEN_HBR).await?;

        Ok(NodeContractManager {
            storage_addr: registry.storage_address(),
            node_manager_addr,
            node_staking_addr,
            node_deposit_addr,
            token_hbr_addr,
            eth_client_http,
            eth_client_ws,
            signer,
        })
    }

    pub fn node_manager_address(&self) -> Address {
        self.node_manager_addr
    }

    pub fn node_staking_address(&self) -> Address {
        self.node_staking_addr
    }
}
