use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use alloy_primitives::Address;

use harbor_contracts::HarborStorage;

use crate::types::HarborError;
use crate::utils::{contract_address_key, contract_exists_key};
use crate::Config;

pub type RegistryResult<T> = Result<T, HarborError>;

/// Resolves protocol contract addresses through the eternal-storage
/// contract. Upgrades re-register contracts under the same name, so the
/// cache can be dropped per-name with [`ContractRegistry::invalidate`].
#[derive(Clone)]
pub struct ContractRegistry<T: Config> {
    storage_addr: Address,
    eth_client_http: T::PH,
    cache: Arc<RwLock<HashMap<String, Address>>>,
}

impl<T: Config> ContractRegistry<T> {
    pub fn new(storage_addr: Address, eth_client_http: T::PH) -> Self {
        ContractRegistry {
            storage_addr,
            eth_client_http,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn storage_address(&self) -> Address {
        self.storage_addr
    }

    /// Looks up the deployed address registered under `name`, caching
    /// the result.
    pub async fn address_of(&self, name: &str) -> RegistryResult<Address> {
        if let Some(address) = self
            .cache
            .read()
            .expect("registry cache lock poisoned")
            .get(name)
        {
            return Ok(*address);
        }

        let storage = HarborStorage::new(self.storage_addr, self.eth_client_http.clone());
        let address = storage
            .getAddress(contract_address_key(name))
            .call()
            .await
            .map(|value| value._0)?;

        if address == Address::ZERO {
            return Err(HarborError::UnknownContract(name.to_owned()));
        }

        self.cache
            .write()
            .expect("registry cache lock poisoned")
            .insert(name.to_owned(), address);

        Ok(address)
    }

    /// Whether `address` is a registered network contract.
    pub async fn contract_exists(&self, address: Address) -> RegistryResult<bool> {
        let storage = HarborStorage::new(self.storage_addr, self.eth_client_http.clone());
        storage
            .getBool(contract_exists_key(address))
            .call()
            .await
            .map(|value| value._0)
            .map_err(HarborError::from)
    }

    pub async fn deployed(&self) -> RegistryResult<bool> {
        let storage = HarborStorage::new(self.storage_addr, self.eth_client_http.clone());
        storage
            .getDeployedStatus()
            .call()
            .await
            .map(|value| value._0)
            .map_err(HarborError::from)
    }

    pub async fn guardian(&self) -> RegistryResult<Address> {
        let storage = HarborStorage::new(self.storage_addr, self.eth_client_http.clone());
        storage
            .getGuardian()
            .call()
            .await
            .map(|value| value._0)
            .map_err(HarborError::from)
    }

    /// Drops the cached address for `name`, forcing the next lookup to
    /// hit the chain again.
    pub fn invalidate(&self, name: &str) {
        self.cache
            .write()
            .expect("registry cache lock poisoned")
            .remove(name);
    }
}
