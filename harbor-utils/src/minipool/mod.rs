use alloy_primitives::Address;

use crate::registry::ContractRegistry;
use crate::types::HarborError;
use crate::utils::contract_names;
use crate::Config;

pub mod reader;
pub mod subscriber;
pub mod writer;

pub type MinipoolContractResult<T> = Result<T, HarborError>;

#[derive(Clone)]
pub struct MinipoolContractManager<T: Config> {
    minipool_manager_addr: Address,
    minipool_queue_addr: Address,
    eth_client_http: T::PH,
    eth_client_ws: T::PW,
    signer: T::S,
}

impl<T: Config> MinipoolContractManager<T> {
    pub async fn build(
        registry: &ContractRegistry<T>,
        eth_client_http: T::PH,
        eth_client_ws: T::PW,
        signer: T::S,
    ) -> Result<Self, HarborError> {
        let minipool_manager_addr = registry.address_of(contract_names::MINIPOOL_MANAGER).await?;
        let minipool_queue_addr = registry.address_of(contract_names::MINIPOOL_QUEUE).await?;

        Ok(MinipoolContractManager {
            minipool_manager_addr,
            minipool_queue_addr,
            eth_client_http,
            eth_client_ws,
            signer,
        })
    }

    pub fn minipool_manager_address(&self) -> Address {
        self.minipool_manager_addr
    }

    pub fn minipool_queue_address(&self) -> Address {
        self.minipool_queue_addr
    }
}
