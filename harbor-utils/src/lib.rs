//! Typed chain clients for the Harbor liquid staking protocol, built on
//! the bindings in [`harbor_contracts`].

use alloy_network::Ethereum;
use alloy_provider::{Provider, RootProvider};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use alloy_transport::{BoxTransport, Transport};

pub mod dao;
pub mod deposit;
pub mod minipool;
pub mod network;
pub mod node;
pub mod registry;
pub mod rewards;
pub mod test_utils;
pub mod types;
pub mod utils;

/// Transport, provider and signer types a deployment runs with. `TH`/`PH`
/// carry the HTTP side, `TW`/`PW` the websocket side used for
/// subscriptions.
pub trait Config: Send + Sync + Clone + 'static {
    type TH: Transport + Clone + Send + Sync;
    type TW: Transport + Clone + Send + Sync;
    type PH: Provider<Self::TH, Ethereum> + Clone + Send + Sync;
    type PW: Provider<Self::TW, Ethereum> + Clone + Send + Sync;
    type S: Signer + Clone + Send + Sync;
}

/// Default [`Config`] backed by boxed transports and a local key, for
/// clients built with the helpers in [`utils`].
#[derive(Debug, Clone)]
pub struct HarborClientConfig {}

impl Config for HarborClientConfig {
    type TH = BoxTransport;
    type TW = BoxTransport;
    type PH = RootProvider<BoxTransport>;
    type PW = RootProvider<BoxTransport>;
    type S = PrivateKeySigner;
}
