use alloy_primitives::Address;

use crate::registry::ContractRegistry;
use crate::types::HarborError;
use crate::utils::contract_names;
use crate::Config;

pub mod reader;
pub mod writer;

pub type DepositPoolContractResult<T> = Result<T, HarborError>;

#[derive(Clone)]
pub struct DepositPoolContractManager<T: Config> {
    deposit_pool_addr: Address,
    protocol_settings_addr: Address,
    token_seth_addr: Address,
    vault_addr: Address,
    eth_client_http: T::PH,
    eth_client_ws: T::PW,
    signer: T::S,
}

impl<T: Config> DepositPoolContractManager<T> {
    pub async fn build(
        registry: &ContractRegistry<T>,
        eth_client_http: T::PH,
        eth_client_ws: T::PW,
        signer: T::S,
    ) -> Result<Self, HarborError> {
        let deposit_pool_addr = registry.address_of(contract_names::DEPOSIT_POOL).await?;
        let protocol_settings_addr = registry
            .address_of(contract_names::DAO_PROTOCOL_SETTINGS)
            .await?;
        let token_seth_addr = registry.address_of(contract_names::TOKEN_SETH).await?;
        let vault_addr = registry.address_of(contract_names::VAULT).await?;

        Ok(DepositPoolContractManager {
            deposit_pool_addr,
            protocol_settings_addr,
            token_seth_addr,
            vault_addr,
            eth_client_http,
            eth_client_ws,
            signer,
        })
    }

    pub fn deposit_pool_address(&self) -> Address {
        self.deposit_pool_addr
    }
}
