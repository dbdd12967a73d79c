#![allow(async_fn_in_trait)]
use alloy_primitives::{I256, U256};

use harbor_contracts::{HarborDAOProtocolSettings, HarborDepositPool, HarborTokenSETH, HarborVault};

use crate::types::HarborError;
use crate::Config;

use super::{DepositPoolContractManager, DepositPoolContractResult};

pub trait DepositPoolChainReaderTrait {
    async fn get_balance(&self) -> DepositPoolContractResult<U256>;

    async fn get_node_balance(&self) -> DepositPoolContractResult<U256>;

    async fn get_user_balance(&self) -> DepositPoolContractResult<I256>;

    async fn get_excess_balance(&self) -> DepositPoolContractResult<U256>;

    async fn get_maximum_deposit_amount(&self) -> DepositPoolContractResult<U256>;

    async fn deposit_enabled(&self) -> DepositPoolContractResult<bool>;

    async fn assign_deposits_enabled(&self) -> DepositPoolContractResult<bool>;

    async fn get_minimum_deposit(&self) -> DepositPoolContractResult<U256>;

    async fn get_maximum_deposit_pool_size(&self) -> DepositPoolContractResult<U256>;

    /// Current sETH/ETH exchange rate, in wei per token.
    async fn get_seth_exchange_rate(&self) -> DepositPoolContractResult<U256>;

    async fn get_eth_value(&self, seth_amount: U256) -> DepositPoolContractResult<U256>;

    async fn get_seth_value(&self, eth_amount: U256) -> DepositPoolContractResult<U256>;

    /// Ether the vault holds on behalf of a network contract.
    async fn get_vault_balance(&self, network_contract_name: &str)
        -> DepositPoolContractResult<U256>;
}

impl<T: Config> DepositPoolChainReaderTrait for DepositPoolContractManager<T> {
    async fn get_balance(&self) -> DepositPoolContractResult<U256> {
        let deposit_pool =
            HarborDepositPool::new(self.deposit_pool_addr, self.eth_client_http.clone());
        deposit_pool
            .getBalance()
            .call()
            .await
            .map(|balance| balance._0)
            .map_err(HarborError::from)
    }

    async fn get_node_balance(&self) -> DepositPoolContractResult<U256> {
        let deposit_pool =
            HarborDepositPool::new(self.deposit_pool_addr, self.eth_client_http.clone());
        deposit_pool
            .getNodeBalance()
            .call()
            .await
            .map(|balance| balance._0)
            .map_err(HarborError::from)
    }

    async fn get_user_balance(&self) -> DepositPoolContractResult<I256> {
        let deposit_pool =
            HarborDepositPool::new(self.deposit_pool_addr, self.eth_client_http.clone());
        deposit_pool
            .getUserBalance()
            .call()
            .await
            .map(|balance| balance._0)
            .map_err(HarborError::from)
    }

    async fn get_excess_balance(&self) -> DepositPoolContractResult<U256> {
        let deposit_pool =
            HarborDepositPool::new(self.deposit_pool_addr, self.eth_client_http.clone());
        deposit_pool
            .getExcessBalance()
            .call()
            .await
            .map(|balance| balance._0)
            .map_err(HarborError::from)
    }

    async fn get_maximum_deposit_amount(&self) -> DepositPoolContractResult<U256> {
        let deposit_pool =
            HarborDepositPool::new(self.deposit_pool_addr, self.eth_client_http.clone());
        deposit_pool
            .getMaximumDepositAmount()
            .call()
            .await
            .map(|amount| amount._0)
            .map_err(HarborError::from)
    }

    async fn deposit_enabled(&self) -> DepositPoolContractResult<bool> {
        let settings =
            HarborDAOProtocolSettings::new(self.protocol_settings_addr, self.eth_client_http.clone());
        settings
            .getDepositEnabled()
            .call()
            .await
            .map(|enabled| enabled._0)
            .map_err(HarborError::from)
    }

    async fn assign_deposits_enabled(&self) -> DepositPoolContractResult<bool> {
        let settings =
            HarborDAOProtocolSettings::new(self.protocol_settings_addr, self.eth_client_http.clone());
        settings
            .getAssignDepositsEnabled()
            .call()
            .await
            .map(|enabled| enabled._0)
            .map_err(HarborError::from)
    }

    async fn get_minimum_deposit(&self) -> DepositPoolContractResult<U256> {
        let settings =
            HarborDAOProtocolSettings::new(self.protocol_settings_addr, self.eth_client_http.clone());
        settings
            .getMinimumDeposit()
            .call()
            .await
            .map(|minimum| minimum._0)
            .map_err(HarborError::from)
    }

    async fn get_maximum_deposit_pool_size(&self) -> DepositPoolContractResult<U256> {
        let settings =
            HarborDAOProtocolSettings::new(self.protocol_settings_addr, self.eth_client_http.clone());
        settings
            .getMaximumDepositPoolSize()
            .call()
            .await
            .map(|size| size._0)
            .map_err(HarborError::from)
    }

    async fn get_seth_exchange_rate(&self) -> DepositPoolContractResult<U256> {
        let token = HarborTokenSETH::new(self.token_seth_addr, self.eth_client_http.clone());
        token
            .getExchangeRate()
            .call()
            .await
            .map(|rate| rate._0)
            .map_err(HarborError::from)
    }

    async fn get_eth_value(&self, seth_amount: U256) -> DepositPoolContractResult<U256> {
        let token = HarborTokenSETH::new(self.token_seth_addr, self.eth_client_http.clone());
        token
            .getEthValue(seth_amount)
            .call()
            .await
            .map(|value| value._0)
            .map_err(HarborError::from)
    }

    async fn get_seth_value(&self, eth_amount: U256) -> DepositPoolContractResult<U256> {
        let token = HarborTokenSETH::new(self.token_seth_addr, self.eth_client_http.clone());
        token
            .getSethValue(eth_amount)
            .call()
            .await
            .map(|value| value._0)
            .map_err(HarborError::from)
    }

    async fn get_vault_balance(
        &self,
        network_contract_name: &str,
    ) -> DepositPoolContractResult<U256> {
        let vault = HarborVault::new(self.vault_addr, self.eth_client_http.clone());
        vault
            .balanceOf(network_contract_name.to_owned())
            .call()
            .await
            .map(|balance| balance._0)
            .map_err(HarborError::from)
    }
}
