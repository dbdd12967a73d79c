pub mod local_chain;
pub mod random_port;

pub use local_chain::LocalEvmChain;
pub use random_port::random_port;
