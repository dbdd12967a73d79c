#![allow(async_fn_in_trait)]
use alloy_primitives::{Bytes, U256};

use harbor_contracts::{HarborDAONodeTrusted, HarborDAOProposal, HarborDAOProtocolSettings};

use crate::types::{HarborError, NodeAddr, ProposalState};
use crate::Config;

use super::{DaoContractManager, DaoContractResult};

/// Vote tallies of a single proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposalVotes {
    pub votes_for: U256,
    pub votes_against: U256,
    pub votes_required: U256,
}

pub trait DaoChainReaderTrait {
    async fn get_member_count(&self) -> DaoContractResult<U256>;

    async fn get_member_at(&self, index: U256) -> DaoContractResult<NodeAddr>;

    async fn get_member_is_valid(&self, node: NodeAddr) -> DaoContractResult<bool>;

    async fn get_member_id(&self, node: NodeAddr) -> DaoContractResult<String>;

    async fn get_member_bond_amount(&self, node: NodeAddr) -> DaoContractResult<U256>;

    async fn get_member_is_challenged(&self, node: NodeAddr) -> DaoContractResult<bool>;

    async fn get_proposal_total(&self) -> DaoContractResult<U256>;

    async fn get_proposal_state(&self, proposal_id: U256) -> DaoContractResult<ProposalState>;

    async fn get_proposal_votes(&self, proposal_id: U256) -> DaoContractResult<ProposalVotes>;

    async fn get_proposal_payload(&self, proposal_id: U256) -> DaoContractResult<Bytes>;

    async fn get_proposal_message(&self, proposal_id: U256) -> DaoContractResult<String>;

    async fn has_voted(&self, proposal_id: U256, node: NodeAddr) -> DaoContractResult<bool>;

    async fn get_rewards_claim_interval_time(&self) -> DaoContractResult<U256>;
}

impl<T: Config> DaoChainReaderTrait for DaoContractManager<T> {
    async fn get_member_count(&self) -> DaoContractResult<U256> {
        let node_trusted =
            HarborDAONodeTrusted::new(self.node_trusted_addr, self.eth_client_http.clone());
        node_trusted
            .getMemberCount()
            .call()
            .await
            .map(|count| count._0)
            .map_err(HarborError::from)
    }

    async fn get_member_at(&self, index: U256) -> DaoContractResult<NodeAddr> {
        let node_trusted =
            HarborDAONodeTrusted::new(self.node_trusted_addr, self.eth_client_http.clone());
        node_trusted
            .getMemberAt(index)
            .call()
            .await
            .map(|member| member._0)
            .map_err(HarborError::from)
    }

    async fn get_member_is_valid(&self, node: NodeAddr) -> DaoContractResult<bool> {
        let node_trusted =
            HarborDAONodeTrusted::new(self.node_trusted_addr, self.eth_client_http.clone());
        node_trusted
            .getMemberIsValid(node)
            .call()
            .await
            .map(|valid| valid._0)
            .map_err(HarborError::from)
    }

    async fn get_member_id(&self, node: NodeAddr) -> DaoContractResult<String> {
        let node_trusted =
            HarborDAONodeTrusted::new(self.node_trusted_addr, self.eth_client_http.clone());
        node_trusted
            .getMemberID(node)
            .call()
            .await
            .map(|id| id._0)
            .map_err(HarborError::from)
    }

    async fn get_member_bond_amount(&self, node: NodeAddr) -> DaoContractResult<U256> {
        let node_trusted =
            HarborDAONodeTrusted::new(self.node_trusted_addr, self.eth_client_http.clone());
        node_trusted
            .getMemberHBRBondAmount(node)
            .call()
            .await
            .map(|bond| bond._0)
            .map_err(HarborError::from)
    }

    async fn get_member_is_challenged(&self, node: NodeAddr) -> DaoContractResult<bool> {
        let node_trusted =
            HarborDAONodeTrusted::new(self.node_trusted_addr, self.eth_client_http.clone());
        node_trusted
            .getMemberIsChallenged(node)
            .call()
            .await
            .map(|challenged| challenged._0)
            .map_err(HarborError::from)
    }

    async fn get_proposal_total(&self) -> DaoContractResult<U256> {
        let proposals = HarborDAOProposal::new(self.proposal_addr, self.eth_client_http.clone());
        proposals
            .getTotal()
            .call()
            .await
            .map(|total| total._0)
            .map_err(HarborError::from)
    }

    async fn get_proposal_state(&self, proposal_id: U256) -> DaoContractResult<ProposalState> {
        let proposals = HarborDAOProposal::new(self.proposal_addr, self.eth_client_http.clone());
        let raw = proposals
            .getState(proposal_id)
            .call()
            .await
            .map(|state| state._0)
            .map_err(HarborError::from)?;
        ProposalState::from_raw(raw)
    }

    async fn get_proposal_votes(&self, proposal_id: U256) -> DaoContractResult<ProposalVotes> {
        let proposals = HarborDAOProposal::new(self.proposal_addr, self.eth_client_http.clone());
        let votes_for = proposals
            .getVotesFor(proposal_id)
            .call()
            .await
            .map(|votes| votes._0)?;
        let votes_against = proposals
            .getVotesAgainst(proposal_id)
            .call()
            .await
            .map(|votes| votes._0)?;
        let votes_required = proposals
            .getVotesRequired(proposal_id)
            .call()
            .await
            .map(|votes| votes._0)?;

        Ok(ProposalVotes {
            votes_for,
            votes_against,
            votes_required,
        })
    }

    async fn get_proposal_payload(&self, proposal_id: U256) -> DaoContractResult<Bytes> {
        let proposals = HarborDAOProposal::new(self.proposal_addr, self.eth_client_http.clone());
        proposals
            .getPayload(proposal_id)
            .call()
            .await
            .map(|payload| payload._0)
            .map_err(HarborError::from)
    }

    async fn get_proposal_message(&self, proposal_id: U256) -> DaoContractResult<String> {
        let proposals = HarborDAOProposal::new(self.proposal_addr, self.eth_client_http.clone());
        proposals
            .getMessage(proposal_id)
            .call()
            .await
            .map(|message| message._0)
            .map_err(HarborError::from)
    }

    async fn has_voted(&self, proposal_id: U256, node: NodeAddr) -> DaoContractResult<bool> {
        let proposals = HarborDAOProposal::new(self.proposal_addr, self.eth_client_http.clone());
        proposals
            .getReceiptHasVoted(proposal_id, node)
            .call()
            .await
            .map(|voted| voted._0)
            .map_err(HarborError::from)
    }

    async fn get_rewards_claim_interval_time(&self) -> DaoContractResult<U256> {
        let settings = HarborDAOProtocolSettings::new(
            self.protocol_settings_addr,
            self.eth_client_http.clone(),
        );
        settings
            .getRewardsClaimIntervalTime()
            .call()
            .await
            .map(|time| time._0)
            .map_err(HarborError::from)
    }
}
