//! Smoke tests against a throwaway anvil chain. Ignored by default so
//! the suite stays green on machines without the anvil binary.

use alloy_primitives::Address;
use alloy_provider::Provider;

use harbor_utils::registry::ContractRegistry;
use harbor_utils::test_utils::LocalEvmChain;
use harbor_utils::utils::get_provider_http;
use harbor_utils::HarborClientConfig;

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a local anvil binary"]
async fn local_chain_serves_rpc() {
    let chain = LocalEvmChain::new(31337, "harbor-test".to_owned(), None);
    let provider = get_provider_http(&chain.http_endpoint());

    let block = provider.get_block_number().await.unwrap();
    assert_eq!(block, 0);
    assert!(!chain.addresses().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a local anvil binary"]
async fn registry_lookups_fail_without_a_deployed_protocol() {
    let chain = LocalEvmChain::new(31337, "harbor-test".to_owned(), None);
    let provider = get_provider_http(&chain.http_endpoint());

    let registry = ContractRegistry::<HarborClientConfig>::new(Address::ZERO, provider);
    assert!(registry.address_of("harborDepositPool").await.is_err());
}
