//! Encode/decode round trips through the generated bindings, plus
//! cross-checks against human-readable descriptors re-parsed with
//! `alloy-json-abi`.

use alloy_json_abi::{Event, Function};
use alloy_primitives::{address, b256, Bytes, U256};
use alloy_sol_types::{SolCall, SolError, SolEvent, SolInterface, SolValue};

use harbor_contracts::{
    HarborDepositPool, HarborMinipool, HarborNodeDeposit, HarborNodeStaking, HarborTokenSETH,
};

#[test]
fn node_deposit_call_round_trips() {
    let call = HarborNodeDeposit::depositCall {
        _bondAmount: U256::from(8_000_000_000_000_000_000_u128),
        _minimumNodeFee: U256::from(140_000_000_000_000_000_u128),
        _validatorPubkey: Bytes::from(vec![0xab; 48]),
        _validatorSignature: Bytes::from(vec![0xcd; 96]),
        _depositDataRoot: b256!("1111111111111111111111111111111111111111111111111111111111111111"),
        _salt: U256::from(42),
        _expectedMinipoolAddress: address!("7d1f1d09ae9bc49a2a757b87b45baca883bb7a92"),
    };

    let encoded = call.abi_encode();
    assert_eq!(encoded[..4], HarborNodeDeposit::depositCall::SELECTOR);

    let decoded = HarborNodeDeposit::depositCall::abi_decode(&encoded, true).unwrap();
    assert_eq!(decoded._bondAmount, call._bondAmount);
    assert_eq!(decoded._validatorPubkey, call._validatorPubkey);
    assert_eq!(decoded._expectedMinipoolAddress, call._expectedMinipoolAddress);
}

#[test]
fn view_return_values_decode() {
    let raw = U256::from(32_000_000_000_000_000_000_u128).abi_encode();
    let decoded = HarborDepositPool::getBalanceCall::abi_decode_returns(&raw, true).unwrap();
    assert_eq!(decoded._0, U256::from(32_000_000_000_000_000_000_u128));
}

#[test]
fn minipool_status_decodes_as_uint8() {
    let raw = U256::from(2u8).abi_encode();
    let decoded = HarborMinipool::getStatusCall::abi_decode_returns(&raw, true).unwrap();
    assert_eq!(decoded._0, 2);

    // Values past uint8 range are rejected at the ABI layer.
    let raw = U256::from(300u64).abi_encode();
    assert!(HarborMinipool::getStatusCall::abi_decode_returns(&raw, true).is_err());
}

#[test]
fn events_round_trip_through_log_data() {
    let event = HarborTokenSETH::TokensMinted {
        to: address!("2cac916b2a963bf162f076c0a8a4a8200bcfbfb4"),
        amount: U256::from(1_000_000_000_000_000_000_u128),
        ethAmount: U256::from(1_040_000_000_000_000_000_u128),
        time: U256::from(1_722_000_000_u64),
    };

    let log = event.encode_log_data();
    assert_eq!(log.topics()[0], HarborTokenSETH::TokensMinted::SIGNATURE_HASH);

    let decoded = HarborTokenSETH::TokensMinted::decode_log_data(&log, true).unwrap();
    assert_eq!(decoded.to, event.to);
    assert_eq!(decoded.amount, event.amount);
    assert_eq!(decoded.ethAmount, event.ethAmount);
}

#[test]
fn custom_errors_decode_from_revert_data() {
    let err = HarborNodeDeposit::InsufficientBalance {
        requested: U256::from(16_000_000_000_000_000_000_u128),
        available: U256::from(4_000_000_000_000_000_000_u128),
    };
    let data = err.abi_encode();
    assert_eq!(data[..4], HarborNodeDeposit::InsufficientBalance::SELECTOR);

    match HarborNodeDeposit::HarborNodeDepositErrors::abi_decode(&data, true).unwrap() {
        HarborNodeDeposit::HarborNodeDepositErrors::InsufficientBalance(decoded) => {
            assert_eq!(decoded.requested, err.requested);
            assert_eq!(decoded.available, err.available);
        }
        _ => panic!("decoded the wrong error variant"),
    }
}

#[test]
fn descriptors_match_json_abi_reparse() {
    let function = Function::parse("getNodeHBRStake(address _nodeAddress)").unwrap();
    assert_eq!(function.selector().0, HarborNodeStaking::getNodeHBRStakeCall::SELECTOR);

    let event = Event::parse(
        "event DepositReceived(address indexed from, uint256 amount, uint256 time)",
    )
    .unwrap();
    assert_eq!(event.selector(), HarborNodeDeposit::DepositReceived::SIGNATURE_HASH);
}

#[test]
fn descriptors_survive_json_serialization() {
    let function = Function::parse(
        "deposit(uint256 _bondAmount, uint256 _minimumNodeFee, bytes _validatorPubkey, bytes _validatorSignature, bytes32 _depositDataRoot, uint256 _salt, address _expectedMinipoolAddress)",
    )
    .unwrap();

    let json = serde_json::to_string(&function).unwrap();
    let reparsed: Function = serde_json::from_str(&json).unwrap();
    assert_eq!(function, reparsed);
    assert_eq!(reparsed.selector().0, HarborNodeDeposit::depositCall::SELECTOR);
}
