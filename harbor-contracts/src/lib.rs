//! Contract bindings for the Harbor liquid staking protocol.
//!
//! Every binding is generated with [`alloy_sol_types::sol!`] from the
//! deployed contract interfaces, one module per protocol layer. The
//! bindings carry no logic of their own; they describe call, event and
//! error signatures for encoding transactions and decoding results.

pub mod dao;
pub mod deposit;
pub mod minipool;
pub mod network;
pub mod node;
pub mod rewards;
pub mod storage;
pub mod tokens;
pub mod vault;

pub use dao::{HarborDAONodeTrusted, HarborDAOProposal, HarborDAOProtocolSettings};
pub use deposit::HarborDepositPool;
pub use minipool::{HarborMinipool, HarborMinipoolManager, HarborMinipoolQueue};
pub use network::{
    HarborNetworkBalances, HarborNetworkFees, HarborNetworkPenalties, HarborNetworkPrices,
};
pub use node::{HarborNodeDeposit, HarborNodeManager, HarborNodeStaking};
pub use rewards::{HarborClaimDAO, HarborMerkleDistributor, HarborRewardsPool};
pub use storage::HarborStorage;
pub use tokens::{HarborTokenHBR, HarborTokenSETH};
pub use vault::HarborVault;
