use alloy_primitives::Address;

use crate::registry::ContractRegistry;
use crate::types::HarborError;
use crate::utils::contract_names;
use crate::Config;

pub mod reader;
pub mod writer;

pub type NetworkContractResult<T> = Result<T, HarborError>;

#[derive(Clone)]
pub struct NetworkContractManager<T: Config> {
    balances_addr: Address,
    prices_addr: Address,
    fees_addr: Address,
    penalties_addr: Address,
    eth_client_http: T::PH,
    eth_client_ws: T::PW,
    signer: T::S,
}

impl<T: Config> NetworkContractManager<T> {
    pub async fn build(
        registry: &ContractRegistry<T>,
        eth_client_http: T::PH,
        eth_client_ws: T::PW,
        signer: T::S,
    ) -> Result<Self, HarborError> {
        let balances_addr = registry.address_of(contract_names::NETWORK_BALANCES).await?;
        let prices_addr = registry.address_of(contract_names::NETWORK_PRICES).await?;
        let fees_addr = registry.address_of(contract_names::NETWORK_FEES).await?;
        let penalties_addr = registry
            .address_of(contract_names::NETWORK_PENALTIES)
            .await?;

        Ok(NetworkContractManager {
            balances_addr,
            prices_addr,
            fees_addr,
            penalties_addr,
            eth_client_http,
            eth_client_ws,
            signer,
        })
    }
}
