#![allow(async_fn_in_trait)]
use alloy_primitives::{I256, U256};

use harbor_contracts::{
    HarborNetworkBalances, HarborNetworkFees, HarborNetworkPenalties, HarborNetworkPrices,
};

use crate::types::{HarborError, MinipoolAddr};
use crate::Config;

use super::{NetworkContractManager, NetworkContractResult};

pub trait NetworkChainReaderTrait {
    async fn get_balances_block(&self) -> NetworkContractResult<U256>;

    async fn get_total_eth_balance(&self) -> NetworkContractResult<U256>;

    async fn get_staking_eth_balance(&self) -> NetworkContractResult<U256>;

    async fn get_total_seth_supply(&self) -> NetworkContractResult<U256>;

    async fn get_eth_utilization_rate(&self) -> NetworkContractResult<U256>;

    async fn get_prices_block(&self) -> NetworkContractResult<U256>;

    async fn get_hbr_price(&self) -> NetworkContractResult<U256>;

    async fn get_node_demand(&self) -> NetworkContractResult<I256>;

    async fn get_node_fee(&self) -> NetworkContractResult<U256>;

    async fn get_node_fee_by_demand(&self, demand: I256) -> NetworkContractResult<U256>;

    async fn get_penalty_count(&self, minipool: MinipoolAddr) -> NetworkContractResult<U256>;
}

impl<T: Config> NetworkChainReaderTrait for NetworkContractManager<T> {
    async fn get_balances_block(&self) -> NetworkContractResult<U256> {
        let balances =
            HarborNetworkBalances::new(self.balances_addr, self.eth_client_http.clone());
        balances
            .getBalancesBlock()
            .call()
            .await
            .map(|block| block._0)
            .map_err(HarborError::from)
    }

    async fn get_total_eth_balance(&self) -> NetworkContractResult<U256> {
        let balances =
            HarborNetworkBalances::new(self.balances_addr, self.eth_client_http.clone());
        balances
            .getTotalETHBalance()
            .call()
            .await
            .map(|balance| balance._0)
            .map_err(HarborError::from)
    }

    async fn get_staking_eth_balance(&self) -> NetworkContractResult<U256> {
        let balances =
            HarborNetworkBalances::new(self.balances_addr, self.eth_client_http.clone());
        balances
            .getStakingETHBalance()
            .call()
            .await
            .map(|balance| balance._0)
            .map_err(HarborError::from)
    }

    async fn get_total_seth_supply(&self) -> NetworkContractResult<U256> {
        let balances =
            HarborNetworkBalances::new(self.balances_addr, self.eth_client_http.clone());
        balances
            .getTotalSETHSupply()
            .call()
            .await
            .map(|supply| supply._0)
            .map_err(HarborError::from)
    }

    async fn get_eth_utilization_rate(&self) -> NetworkContractResult<U256> {
        let balances =
            HarborNetworkBalances::new(self.balances_addr, self.eth_client_http.clone());
        balances
            .getETHUtilizationRate()
            .call()
            .await
            .map(|rate| rate._0)
            .map_err(HarborError::from)
    }

    async fn get_prices_block(&self) -> NetworkContractResult<U256> {
        let prices = HarborNetworkPrices::new(self.prices_addr, self.eth_client_http.clone());
        prices
            .getPricesBlock()
            .call()
            .await
            .map(|block| block._0)
            .map_err(HarborError::from)
    }

    async fn get_hbr_price(&self) -> NetworkContractResult<U256> {
        let prices = HarborNetworkPrices::new(self.prices_addr, self.eth_client_http.clone());
        prices
            .getHBRPrice()
            .call()
            .await
            .map(|price| price._0)
            .map_err(HarborError::from)
    }

    async fn get_node_demand(&self) -> NetworkContractResult<I256> {
        let fees = HarborNetworkFees::new(self.fees_addr, self.eth_client_http.clone());
        fees.getNodeDemand()
            .call()
            .await
            .map(|demand| demand._0)
            .map_err(HarborError::from)
    }

    async fn get_node_fee(&self) -> NetworkContractResult<U256> {
        let fees = HarborNetworkFees::new(self.fees_addr, self.eth_client_http.clone());
        fees.getNodeFee()
            .call()
            .await
            .map(|fee| fee._0)
            .map_err(HarborError::from)
    }

    async fn get_node_fee_by_demand(&self, demand: I256) -> NetworkContractResult<U256> {
        let fees = HarborNetworkFees::new(self.fees_addr, self.eth_client_http.clone());
        fees.getNodeFeeByDemand(demand)
            .call()
            .await
            .map(|fee| fee._0)
            .map_err(HarborError::from)
    }

    async fn get_penalty_count(&self, minipool: MinipoolAddr) -> NetworkContractResult<U256> {
        let penalties =
            HarborNetworkPenalties::new(self.penalties_addr, self.eth_client_http.clone());
        penalties
            .getPenaltyCount(minipool)
            .call()
            .await
            .map(|count| count._0)
            .map_err(HarborError::from)
    }
}
