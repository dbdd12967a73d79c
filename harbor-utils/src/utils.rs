use alloy_network::EthereumWallet;
use alloy_primitives::{keccak256, Address, B256, U256};
use alloy_provider::{Provider, ProviderBuilder, RootProvider, WsConnect};
use alloy_transport::BoxTransport;
use lazy_static::lazy_static;

use crate::types::{HarborError, ValidatorPubkey, ValidatorSignature};

/// Names the managers resolve through [`crate::registry`]. These must
/// match the strings the contracts were registered under at deployment.
pub mod contract_names {
    pub const VAULT: &str = "harborVault";
    pub const DEPOSIT_POOL: &str = "harborDepositPool";
    pub const MINIPOOL_MANAGER: &str = "harborMinipoolManager";
    pub const MINIPOOL_QUEUE: &str = "harborMinipoolQueue";
    pub const NODE_MANAGER: &str = "harborNodeManager";
    pub const NODE_STAKING: &str = "harborNodeStaking";
    pub const NODE_DEPOSIT: &str = "harborNodeDeposit";
    pub const NETWORK_BALANCES: &str = "harborNetworkBalances";
    pub const NETWORK_PRICES: &str = "harborNetworkPrices";
    pub const NETWORK_FEES: &str = "harborNetworkFees";
    pub const NETWORK_PENALTIES: &str = "harborNetworkPenalties";
    pub const TOKEN_SETH: &str = "harborTokenSETH";
    pub const TOKEN_HBR: &str = "harborTokenHBR";
    pub const DAO_NODE_TRUSTED: &str = "harborDAONodeTrusted";
    pub const DAO_PROPOSAL: &str = "harborDAOProposal";
    pub const DAO_PROTOCOL_SETTINGS: &str = "harborDAOProtocolSettings";
    pub const REWARDS_POOL: &str = "harborRewardsPool";
    pub const MERKLE_DISTRIBUTOR: &str = "harborMerkleDistributor";
    pub const CLAIM_DAO: &str = "harborClaimDAO";
}

lazy_static! {
    static ref ETHER: U256 = U256::from(10u64).pow(U256::from(18u64));
}

/// Get the provider for a http endpoint
///
/// # Returns
/// - [`RootProvider<BoxTransport>`] - The provider
///
pub fn get_provider_http(http_endpoint: &str) -> RootProvider<BoxTransport> {
    ProviderBuilder::new()
        .with_recommended_fillers()
        .on_http(http_endpoint.parse().unwrap())
        .root()
        .clone()
        .boxed()
}

/// Get the provider for a http endpoint with the specified [`Wallet`](EthereumWallet)
///
/// # Returns
/// - [`RootProvider<BoxTransport>`] - The provider
///
pub fn get_wallet_provider_http(
    http_endpoint: &str,
    wallet: EthereumWallet,
) -> RootProvider<BoxTransport> {
    ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(http_endpoint.parse().unwrap())
        .root()
        .clone()
        .boxed()
}

/// Get the provider for a websocket endpoint
///
/// # Returns
/// - [`RootProvider<BoxTransport>`] - The provider
///
pub async fn get_provider_ws(ws_endpoint: &str) -> RootProvider<BoxTransport> {
    ProviderBuilder::new()
        .with_recommended_fillers()
        .on_ws(WsConnect::new(ws_endpoint))
        .await
        .unwrap()
        .root()
        .clone()
        .boxed()
}

/// Storage slot key of a network contract's address entry,
/// `keccak256("contract.address" ++ name)`.
pub fn contract_address_key(name: &str) -> B256 {
    keccak256([b"contract.address".as_slice(), name.as_bytes()].concat())
}

/// Storage slot key flagging an address as a registered network
/// contract, `keccak256("contract.exists" ++ address)`.
pub fn contract_exists_key(address: Address) -> B256 {
    keccak256([b"contract.exists".as_slice(), address.as_slice()].concat())
}

/// Key of a DAO-governed setting, `keccak256(namespace ++ path)`.
pub fn setting_key(namespace: &str, path: &str) -> B256 {
    keccak256([namespace.as_bytes(), path.as_bytes()].concat())
}

pub fn is_zero_address(address: Address) -> bool {
    address == Address::ZERO
}

/// Renders a wei amount as a decimal ether string, trimming trailing
/// zeros from the fractional part.
pub fn format_ether(wei: U256) -> String {
    let whole = wei / *ETHER;
    let frac = wei % *ETHER;
    if frac.is_zero() {
        return whole.to_string();
    }
    let padded = format!("{:0>18}", frac.to_string());
    let trimmed = padded.trim_end_matches('0');
    format!("{whole}.{trimmed}")
}

pub fn parse_validator_pubkey(raw: &str) -> Result<ValidatorPubkey, HarborError> {
    let bytes = hex::decode(raw.trim_start_matches("0x"))?;
    if bytes.len() != 48 {
        return Err(HarborError::InvalidValidatorPubkey(bytes.len()));
    }
    Ok(ValidatorPubkey::from_slice(&bytes))
}

pub fn parse_validator_signature(raw: &str) -> Result<ValidatorSignature, HarborError> {
    let bytes = hex::decode(raw.trim_start_matches("0x"))?;
    if bytes.len() != 96 {
        return Err(HarborError::InvalidValidatorSignature(bytes.len()));
    }
    Ok(ValidatorSignature::from_slice(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_keys_are_name_sensitive() {
        let a = contract_address_key(contract_names::DEPOSIT_POOL);
        let b = contract_address_key(contract_names::VAULT);
        assert_ne!(a, b);
        // Same name always hashes to the same slot.
        assert_eq!(a, contract_address_key("harborDepositPool"));
    }

    #[test]
    fn address_and_exists_namespaces_do_not_collide() {
        // "contract.address" + name vs "contract.exists" + address bytes
        // live in disjoint keyspaces for any realistic inputs.
        let name_key = contract_address_key("harborVault");
        let exists_key = contract_exists_key(Address::ZERO);
        assert_ne!(name_key, exists_key);
    }

    #[test]
    fn format_ether_renders_whole_and_fractional_amounts() {
        assert_eq!(format_ether(U256::ZERO), "0");
        assert_eq!(format_ether(U256::from(10u64).pow(U256::from(18u64))), "1");
        assert_eq!(
            format_ether(U256::from(1_500_000_000_000_000_000_u128)),
            "1.5"
        );
        assert_eq!(format_ether(U256::from(1u64)), "0.000000000000000001");
        assert_eq!(
            format_ether(U256::from(32_000_000_000_000_000_000_u128)),
            "32"
        );
    }

    #[test]
    fn validator_pubkey_parsing_enforces_length() {
        let ok = format!("0x{}", "ab".repeat(48));
        assert!(parse_validator_pubkey(&ok).is_ok());

        let short = format!("0x{}", "ab".repeat(20));
        assert!(matches!(
            parse_validator_pubkey(&short),
            Err(HarborError::InvalidValidatorPubkey(20))
        ));

        assert!(parse_validator_pubkey("0xzz").is_err());
    }

    #[test]
    fn validator_signature_parsing_enforces_length() {
        let ok = "cd".repeat(96);
        assert!(parse_validator_signature(&ok).is_ok());
        assert!(matches!(
            parse_validator_signature("cdcd"),
            Err(HarborError::InvalidValidatorSignature(2))
        ));
    }

    #[test]
    fn setting_keys_separate_namespaces() {
        assert_ne!(
            setting_key("dao.protocol.setting.deposit", "deposit.enabled"),
            setting_key("dao.trustednode.setting.members", "deposit.enabled"),
        );
    }
}
