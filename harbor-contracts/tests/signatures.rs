//! Signature fidelity checks: selectors and event topics must match the
//! keccak-256 of the canonical signature strings emitted by the compiler.

use alloy_primitives::{b256, hex, keccak256};
use alloy_sol_types::{SolCall, SolError, SolEvent};

use harbor_contracts::{
    HarborDepositPool, HarborMerkleDistributor, HarborMinipool, HarborNetworkBalances,
    HarborNodeDeposit, HarborNodeStaking, HarborRewardsPool, HarborStorage, HarborTokenSETH,
};

fn selector_of(signature: &str) -> [u8; 4] {
    let digest = keccak256(signature.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

#[test]
fn erc20_selectors_match_known_bytes() {
    assert_eq!(HarborTokenSETH::transferCall::SELECTOR, hex!("a9059cbb"));
    assert_eq!(HarborTokenSETH::approveCall::SELECTOR, hex!("095ea7b3"));
    assert_eq!(HarborTokenSETH::transferFromCall::SELECTOR, hex!("23b872dd"));
    assert_eq!(HarborTokenSETH::balanceOfCall::SELECTOR, hex!("70a08231"));
    assert_eq!(HarborTokenSETH::totalSupplyCall::SELECTOR, hex!("18160ddd"));
    assert_eq!(HarborTokenSETH::allowanceCall::SELECTOR, hex!("dd62ed3e"));
}

#[test]
fn erc20_event_topics_match_known_bytes() {
    assert_eq!(
        HarborTokenSETH::Transfer::SIGNATURE_HASH,
        b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"),
    );
    assert_eq!(
        HarborTokenSETH::Approval::SIGNATURE_HASH,
        b256!("8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925"),
    );
}

#[test]
fn deposit_uses_canonical_parameterless_selector() {
    // Shared with every payable deposit() in the wild.
    assert_eq!(HarborDepositPool::depositCall::SELECTOR, hex!("d0e30db0"));
}

#[test]
fn call_signatures_are_canonical() {
    assert_eq!(HarborStorage::getAddressCall::SIGNATURE, "getAddress(bytes32)");
    assert_eq!(
        HarborNodeStaking::stakeHBRForCall::SIGNATURE,
        "stakeHBRFor(address,uint256)"
    );
    assert_eq!(
        HarborMinipool::stakeCall::SIGNATURE,
        "stake(bytes,bytes32)"
    );
    assert_eq!(
        HarborNodeDeposit::depositCall::SIGNATURE,
        "deposit(uint256,uint256,bytes,bytes,bytes32,uint256,address)"
    );
    assert_eq!(
        HarborNetworkBalances::submitBalancesCall::SIGNATURE,
        "submitBalances(uint256,uint256,uint256,uint256)"
    );
    assert_eq!(
        HarborMerkleDistributor::claimCall::SIGNATURE,
        "claim(address,uint256[],uint256[],uint256[],bytes32[][])"
    );
}

#[test]
fn struct_parameters_flatten_to_tuples_in_signatures() {
    assert_eq!(
        HarborRewardsPool::submitRewardSnapshotCall::SIGNATURE,
        "submitRewardSnapshot((uint256,uint256,uint256,bytes32,string,uint256,uint256,uint256[],uint256[],uint256[],uint256))"
    );
}

#[test]
fn selectors_derive_from_signatures() {
    assert_eq!(
        HarborStorage::getAddressCall::SELECTOR,
        selector_of(HarborStorage::getAddressCall::SIGNATURE),
    );
    assert_eq!(
        HarborNodeDeposit::depositWithCreditCall::SELECTOR,
        selector_of(HarborNodeDeposit::depositWithCreditCall::SIGNATURE),
    );
    assert_eq!(
        HarborMerkleDistributor::claimAndStakeCall::SELECTOR,
        selector_of(HarborMerkleDistributor::claimAndStakeCall::SIGNATURE),
    );
}

#[test]
fn event_topics_derive_from_signatures() {
    assert_eq!(
        HarborDepositPool::DepositReceived::SIGNATURE_HASH,
        keccak256(HarborDepositPool::DepositReceived::SIGNATURE.as_bytes()),
    );
    assert_eq!(
        HarborDepositPool::DepositReceived::SIGNATURE,
        "DepositReceived(address,uint256,uint256)"
    );
    assert_eq!(
        HarborMinipool::MinipoolPrestaked::SIGNATURE,
        "MinipoolPrestaked(bytes,bytes,bytes32,uint256,bytes,uint256)"
    );
    assert_eq!(
        HarborRewardsPool::RewardSnapshot::SIGNATURE_HASH,
        keccak256(HarborRewardsPool::RewardSnapshot::SIGNATURE.as_bytes()),
    );
}

#[test]
fn custom_error_selectors_are_stable() {
    assert_eq!(HarborNodeDeposit::BadBondAmount::SIGNATURE, "BadBondAmount()");
    assert_eq!(
        HarborNodeDeposit::BadBondAmount::SELECTOR,
        selector_of("BadBondAmount()"),
    );
    assert_eq!(
        HarborNodeDeposit::ZeroAddressError::SELECTOR,
        selector_of("ZeroAddressError()"),
    );
    assert_eq!(
        HarborNodeDeposit::InsufficientBalance::SIGNATURE,
        "InsufficientBalance(uint256,uint256)"
    );
    assert_eq!(
        HarborMinipool::OnlyMinipoolOwner::SIGNATURE,
        "OnlyMinipoolOwner(address)"
    );
}
