use alloy_node_bindings::{Anvil, AnvilInstance};
use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;

use super::random_port::random_port;

/// A throwaway anvil-backed chain for exercising the contract managers.
pub struct LocalEvmChain {
    chain_id: u64,
    name: String,
    anvil_node_handle: AnvilInstance,
}

impl LocalEvmChain {
    pub fn new(chain_id: u64, name: String, port: Option<u16>) -> Self {
        let port = port.unwrap_or_else(random_port);
        let anvil_node_handle = Anvil::new().chain_id(chain_id).port(port).spawn();
        Self {
            chain_id,
            name,
            anvil_node_handle,
        }
    }

    /// Boots anvil from a previously dumped state file, so tests can
    /// start against an already deployed protocol.
    pub fn new_with_chain_state(
        chain_id: u64,
        name: String,
        state_path: &std::path::Path,
        port: Option<u16>,
    ) -> Self {
        let port = port.unwrap_or_else(random_port);
        let anvil_node_handle = Anvil::new()
            .chain_id(chain_id)
            .port(port)
            .arg("--load-state")
            .arg(state_path.display().to_string())
            .spawn();
        Self {
            chain_id,
            name,
            anvil_node_handle,
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn http_endpoint(&self) -> String {
        self.anvil_node_handle.endpoint()
    }

    pub fn ws_endpoint(&self) -> String {
        self.anvil_node_handle.ws_endpoint()
    }

    /// Pre-funded dev account addresses.
    pub fn addresses(&self) -> &[Address] {
        self.anvil_node_handle.addresses()
    }

    /// Signer for the pre-funded dev account at `index`.
    pub fn signer(&self, index: usize) -> PrivateKeySigner {
        self.anvil_node_handle.keys()[index].clone().into()
    }
}
