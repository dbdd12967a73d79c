use alloy_primitives::{Bytes, U256};
use alloy_rpc_types::TransactionReceipt;
use async_trait::async_trait;

use harbor_contracts::{HarborDAONodeTrusted, HarborDAOProposal};

use crate::types::{HarborError, NodeAddr};
use crate::Config;

use super::DaoContractManager;

#[async_trait]
pub trait DaoWriter: Send + Sync {
    async fn propose(
        &self,
        message: &str,
        payload: Bytes,
    ) -> Result<TransactionReceipt, HarborError>;

    async fn vote(
        &self,
        proposal_id: U256,
        support: bool,
    ) -> Result<TransactionReceipt, HarborError>;

    async fn execute(&self, proposal_id: U256) -> Result<TransactionReceipt, HarborError>;

    async fn cancel(&self, proposal_id: U256) -> Result<TransactionReceipt, HarborError>;

    /// Registers intent to join the oracle DAO; the bond is pulled by
    /// [`DaoWriter::action_join`] afterwards.
    async fn member_join_required(
        &self,
        id: &str,
        url: &str,
    ) -> Result<TransactionReceipt, HarborError>;

    async fn action_join(&self) -> Result<TransactionReceipt, HarborError>;

    async fn action_leave(
        &self,
        bond_refund_address: NodeAddr,
    ) -> Result<TransactionReceipt, HarborError>;
}

#[async_trait]
impl<T: Config> DaoWriter for DaoContractManager<T> {
    async fn propose(
        &self,
        message: &str,
        payload: Bytes,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!("submitting DAO proposal: {}", message);

        let proposals = HarborDAOProposal::new(self.proposal_addr, self.eth_client_http.clone());
        let receipt = proposals
            .propose(message.to_owned(), payload)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("proposal submitted, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn vote(
        &self,
        proposal_id: U256,
        support: bool,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!(
            "voting {} on proposal {}",
            if support { "for" } else { "against" },
            proposal_id
        );

        let proposals = HarborDAOProposal::new(self.proposal_addr, self.eth_client_http.clone());
        let receipt = proposals
            .vote(proposal_id, support)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("vote recorded, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn execute(&self, proposal_id: U256) -> Result<TransactionReceipt, HarborError> {
        log::info!("executing proposal {}", proposal_id);

        let proposals = HarborDAOProposal::new(self.proposal_addr, self.eth_client_http.clone());
        let receipt = proposals
            .execute(proposal_id)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("proposal executed, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn cancel(&self, proposal_id: U256) -> Result<TransactionReceipt, HarborError> {
        log::info!("cancelling proposal {}", proposal_id);

        let proposals = HarborDAOProposal::new(self.proposal_addr, self.eth_client_http.clone());
        let receipt = proposals
            .cancel(proposal_id)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("proposal cancelled, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn member_join_required(
        &self,
        id: &str,
        url: &str,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!("registering oracle DAO join intent for {}", id);

        let node_trusted =
            HarborDAONodeTrusted::new(self.node_trusted_addr, self.eth_client_http.clone());
        let receipt = node_trusted
            .memberJoinRequired(id.to_owned(), url.to_owned())
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("join intent recorded, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn action_join(&self) -> Result<TransactionReceipt, HarborError> {
        log::info!("joining the oracle DAO");

        let node_trusted =
            HarborDAONodeTrusted::new(self.node_trusted_addr, self.eth_client_http.clone());
        let receipt = node_trusted
            .actionJoin()
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("joined the oracle DAO, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }

    async fn action_leave(
        &self,
        bond_refund_address: NodeAddr,
    ) -> Result<TransactionReceipt, HarborError> {
        log::info!(
            "leaving the oracle DAO, refunding bond to {}",
            bond_refund_address
        );

        let node_trusted =
            HarborDAONodeTrusted::new(self.node_trusted_addr, self.eth_client_http.clone());
        let receipt = node_trusted
            .actionLeave(bond_refund_address)
            .send()
            .await?
            .get_receipt()
            .await?;

        log::info!("left the oracle DAO, txHash: {}", receipt.transaction_hash);

        Ok(receipt)
    }
}
