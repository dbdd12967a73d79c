use alloy_primitives::Address;

use crate::registry::ContractRegistry;
use crate::types::HarborError;
use crate::utils::contract_names;
use crate::Config;

pub mod reader;
pub mod writer;

pub type RewardsContractResult<T> = Result<T, HarborError>;

#[derive(Clone)]
pub struct RewardsContractManager<T: Config> {
    rewards_pool_addr: Address,
    merkle_distributor_addr: Address,
    claim_dao_addr: Address,
    eth_client_http: T::PH,
    eth_client_ws: T::PW,
    signer: T::S,
}

impl<T: Config> RewardsContractManager<T> {
    pub async fn build(
        registry: &ContractRegistry<T>,
        eth_client_http: T::PH,
        eth_client_ws: T::PW,
        signer: T::S,
    ) -> Result<Self, HarborError> {
        let rewards_pool_addr = registry.address_of(contract_names::REWARDS_POOL).await?;
        let merkle_distributor_addr = registry
            .address_of(contract_names::MERKLE_DISTRIBUTOR)
            .await?;
        let claim_dao_addr = registry.address_of(contract_names::CLAIM_DAO).await?;

        Ok(RewardsContractManager {
            rewards_pool_addr,
            merkle_distributor_addr,
            claim_dao_addr,
            eth_client_http,
            eth_client_ws,
            signer,
        })
    }
}
