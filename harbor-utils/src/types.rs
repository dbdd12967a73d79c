use alloy_primitives::{Address, FixedBytes, U256};
use alloy_transport::{RpcError, TransportErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use alloy_sol_types::SolInterface;
use harbor_contracts::{HarborNodeDeposit, HarborNodeManager};

pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

pub type NodeAddr = Address;
pub type MinipoolAddr = Address;
pub type BlockNum = u64;
pub type RewardIndex = u64;
pub type StakeAmount = U256;

/// BLS pubkey of the validator backing a minipool, as registered on the
/// beacon deposit contract.
pub type ValidatorPubkey = FixedBytes<48>;
pub type ValidatorSignature = FixedBytes<96>;

/// Client-side mirror of the on-chain minipool lifecycle enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinipoolStatus {
    Initialised,
    Prelaunch,
    Staking,
    Withdrawable,
    Dissolved,
}

impl MinipoolStatus {
    pub fn from_raw(raw: u8) -> Result<Self, HarborError> {
        match raw {
            0 => Ok(MinipoolStatus::Initialised),
            1 => Ok(MinipoolStatus::Prelaunch),
            2 => Ok(MinipoolStatus::Staking),
            3 => Ok(MinipoolStatus::Withdrawable),
            4 => Ok(MinipoolStatus::Dissolved),
            other => Err(HarborError::UnknownMinipoolStatus(other)),
        }
    }

    /// Whether the minipool still counts towards the node's active set.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            MinipoolStatus::Initialised
                | MinipoolStatus::Prelaunch
                | MinipoolStatus::Staking
        )
    }
}

impl fmt::Display for MinipoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MinipoolStatus::Initialised => "initialised",
            MinipoolStatus::Prelaunch => "prelaunch",
            MinipoolStatus::Staking => "staking",
            MinipoolStatus::Withdrawable => "withdrawable",
            MinipoolStatus::Dissolved => "dissolved",
        };
        write!(f, "{name}")
    }
}

/// Client-side mirror of the DAO proposal state enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalState {
    Pending,
    Active,
    Cancelled,
    Defeated,
    Succeeded,
    Expired,
    Executed,
}

impl ProposalState {
    pub fn from_raw(raw: u8) -> Result<Self, HarborError> {
        match raw {
            0 => Ok(ProposalState::Pending),
            1 => Ok(ProposalState::Active),
            2 => Ok(ProposalState::Cancelled),
            3 => Ok(ProposalState::Defeated),
            4 => Ok(ProposalState::Succeeded),
            5 => Ok(ProposalState::Expired),
            6 => Ok(ProposalState::Executed),
            other => Err(HarborError::UnknownProposalState(other)),
        }
    }
}

/// Aggregated per-node view assembled from the node manager contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDetails {
    pub node_address: NodeAddr,
    pub exists: bool,
    pub registration_time: U256,
    pub timezone_location: String,
    pub withdrawal_address: Address,
    pub pending_withdrawal_address: Address,
    pub hbr_stake: StakeAmount,
    pub effective_hbr_stake: StakeAmount,
    pub minimum_hbr_stake: StakeAmount,
    pub maximum_hbr_stake: StakeAmount,
    pub minipool_count: u64,
    pub balance_eth: U256,
    pub balance_hbr: U256,
    pub deposit_credit: U256,
    pub smoothing_pool_opted_in: bool,
}

impl From<HarborNodeManager::NodeDetails> for NodeDetails {
    fn from(details: HarborNodeManager::NodeDetails) -> Self {
        NodeDetails {
            node_address: details.nodeAddress,
            exists: details.exists,
            registration_time: details.registrationTime,
            timezone_location: details.timezoneLocation,
            withdrawal_address: details.withdrawalAddress,
            pending_withdrawal_address: details.pendingWithdrawalAddress,
            hbr_stake: details.hbrStake,
            effective_hbr_stake: details.effectiveHBRStake,
            minimum_hbr_stake: details.minimumHBRStake,
            maximum_hbr_stake: details.maximumHBRStake,
            minipool_count: u64::try_from(details.minipoolCount).unwrap_or(u64::MAX),
            balance_eth: details.balanceETH,
            balance_hbr: details.balanceHBR,
            deposit_credit: details.depositCreditBalance,
            smoothing_pool_opted_in: details.smoothingPoolRegistrationState,
        }
    }
}

#[derive(Error, Debug)]
pub enum HarborError {
    #[error("contract {0} is not registered in HarborStorage")]
    UnknownContract(String),
    #[error("invalid validator pubkey length {0}")]
    InvalidValidatorPubkey(usize),
    #[error("invalid validator signature length {0}")]
    InvalidValidatorSignature(usize),
    #[error("unknown minipool status {0}")]
    UnknownMinipoolStatus(u8),
    #[error("unknown proposal state {0}")]
    UnknownProposalState(u8),
    #[error("node deposits are disabled")]
    NodeDepositsDisabled,
    #[error("bond amount rejected by the node deposit contract")]
    BondAmountRejected,
    #[error("zero address where a contract address is required")]
    ZeroAddress,
    #[error("insufficient node balance: requested {requested}, available {available}")]
    InsufficientNodeBalance { requested: U256, available: U256 },
    #[error("validator pubkey already registered")]
    PubkeyInUse,
    #[error("invalid hex")]
    HexError(#[from] hex::FromHexError),
    #[error("invalid sol types")]
    InvalidSolTypes(#[from] alloy_sol_types::Error),
    #[error("alloy contract error")]
    ContractError(#[from] alloy_contract::Error),
    #[error("alloy signer error")]
    SignerError(#[from] alloy_signer::Error),
    #[error("rpc error")]
    RpcError(#[from] RpcError<TransportErrorKind>),
    #[error("pending transaction error")]
    PendingTransactionError(#[from] alloy_provider::PendingTransactionError),
    #[error("serde json error")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl HarborError {
    /// Maps revert data from the node deposit contract onto the typed
    /// variants above. Returns `None` when the data is not one of its
    /// custom errors.
    pub fn from_node_deposit_revert(data: &[u8]) -> Option<Self> {
        let decoded = HarborNodeDeposit::HarborNodeDepositErrors::abi_decode(data, true).ok()?;
        let mapped = match decoded {
            HarborNodeDeposit::HarborNodeDepositErrors::BadBondAmount(_) => {
                HarborError::BondAmountRejected
            }
            HarborNodeDeposit::HarborNodeDepositErrors::ZeroAddressError(_) => {
                HarborError::ZeroAddress
            }
            HarborNodeDeposit::HarborNodeDepositErrors::DepositsDisabled(_) => {
                HarborError::NodeDepositsDisabled
            }
            HarborNodeDeposit::HarborNodeDepositErrors::InsufficientBalance(e) => {
                HarborError::InsufficientNodeBalance {
                    requested: e.requested,
                    available: e.available,
                }
            }
            HarborNodeDeposit::HarborNodeDepositErrors::PubkeyAlreadyUsed(_) => {
                HarborError::PubkeyInUse
            }
        };
        Some(mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolError;

    #[test]
    fn minipool_status_maps_raw_values() {
        assert_eq!(MinipoolStatus::from_raw(2).unwrap(), MinipoolStatus::Staking);
        assert!(MinipoolStatus::from_raw(4).unwrap() == MinipoolStatus::Dissolved);
        assert!(matches!(
            MinipoolStatus::from_raw(9),
            Err(HarborError::UnknownMinipoolStatus(9))
        ));
    }

    #[test]
    fn active_statuses_exclude_terminal_states() {
        assert!(MinipoolStatus::Staking.is_active());
        assert!(MinipoolStatus::Prelaunch.is_active());
        assert!(!MinipoolStatus::Withdrawable.is_active());
        assert!(!MinipoolStatus::Dissolved.is_active());
    }

    #[test]
    fn node_deposit_reverts_map_to_typed_errors() {
        let data = HarborNodeDeposit::BadBondAmount {}.abi_encode();
        assert!(matches!(
            HarborError::from_node_deposit_revert(&data),
            Some(HarborError::BondAmountRejected)
        ));

        let data = HarborNodeDeposit::InsufficientBalance {
            requested: U256::from(8),
            available: U256::from(2),
        }
        .abi_encode();
        match HarborError::from_node_deposit_revert(&data) {
            Some(HarborError::InsufficientNodeBalance { requested, available }) => {
                assert_eq!(requested, U256::from(8));
                assert_eq!(available, U256::from(2));
            }
            _ => panic!("expected InsufficientNodeBalance"),
        }
    }

    #[test]
    fn unrelated_revert_data_is_ignored() {
        assert!(HarborError::from_node_deposit_revert(&[0xde, 0xad, 0xbe, 0xef]).is_none());
    }
}
