use alloy_primitives::Address;

use crate::registry::ContractRegistry;
use crate::types::HarborError;
use crate::utils::contract_names;
use crate::Config;

pub mod reader;
pub mod writer;

pub type DaoContractResult<T> = Result<T, HarborError>;

#[derive(Clone)]
pub struct DaoContractManager<T: Config> {
    node_trusted_addr: Address,
    proposal_addr: Address,
    protocol_settings_addr: Address,
    eth_client_http: T::PH,
    eth_client_ws: T::PW,
    signer: T::S,
}

impl<T: Config> DaoContractManager<T> {
    pub async fn build(
        registry: &ContractRegistry<T>,
        eth_client_http: T::PH,
        eth_client_ws: T::PW,
        signer: T::S,
    ) -> Result<Self, HarborError> {
        let node_trusted_addr = registry.address_of(contract_names::DAO_NODE_TRUSTED).await?;
        let proposal_addr = registry.address_of(contract_names::DAO_PROPOSAL).await?;
        let protocol_settings_addr = registry
            .address_of(contract_names::DAO_PROTOCOL_SETTINGS)
            .await?;

        Ok(DaoContractManager {
            node_trusted_addr,
            proposal_addr,
            protocol_settings_addr,
            eth_client_http,
            eth_client_ws,
            signer,
        })
    }
}
