use alloy_network::Ethereum;
use alloy_provider::Provider;
use alloy_pubsub::Subscription;
use alloy_rpc_types::{Filter, Log};
use alloy_sol_types::SolEvent;
use alloy_transport::Transport;
use futures::{Stream, StreamExt};

use harbor_contracts::{HarborMinipool, HarborMinipoolManager};

use crate::types::{HarborError, MinipoolAddr};

type MinipoolSubscriberResult<T> = Result<T, HarborError>;

/// Websocket subscriptions over the minipool registry and individual
/// minipool delegates.
#[derive(Debug, Clone)]
pub struct MinipoolChainSubscriber<T, P>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Clone,
{
    minipool_manager: HarborMinipoolManager::HarborMinipoolManagerInstance<T, P>,
    eth_client: P,
}

impl<T, P> MinipoolChainSubscriber<T, P>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Clone,
{
    pub fn new(
        minipool_manager: HarborMinipoolManager::HarborMinipoolManagerInstance<T, P>,
        eth_client: P,
    ) -> Self {
        Self {
            minipool_manager,
            eth_client,
        }
    }

    pub async fn subscribe_to_minipool_created(
        &self,
    ) -> MinipoolSubscriberResult<Subscription<Log>> {
        let filter = Filter::new()
            .address(*self.minipool_manager.address())
            .event(HarborMinipoolManager::MinipoolCreated::SIGNATURE);
        let subscription = self.eth_client.subscribe_logs(&filter).await?;
        Ok(subscription)
    }

    pub async fn subscribe_to_minipool_destroyed(
        &self,
    ) -> MinipoolSubscriberResult<Subscription<Log>> {
        let filter = Filter::new()
            .address(*self.minipool_manager.address())
            .event(HarborMinipoolManager::MinipoolDestroyed::SIGNATURE);
        let subscription = self.eth_client.subscribe_logs(&filter).await?;
        Ok(subscription)
    }

    /// Decoded stream of minipool creations; undecodable logs are
    /// dropped.
    pub async fn minipool_created_stream(
        &self,
    ) -> MinipoolSubscriberResult<impl Stream<Item = HarborMinipoolManager::MinipoolCreated>> {
        let subscription = self.subscribe_to_minipool_created().await?;
        Ok(subscription.into_stream().filter_map(|log: Log| async move {
            HarborMinipoolManager::MinipoolCreated::decode_log_data(&log.inner.data, true).ok()
        }))
    }

    pub async fn subscribe_to_status_updates(
        &self,
        minipool: MinipoolAddr,
    ) -> MinipoolSubscriberResult<Subscription<Log>> {
        let filter = Filter::new()
            .address(minipool)
            .event(HarborMinipool::StatusUpdated::SIGNATURE);
        let subscription = self.eth_client.subscribe_logs(&filter).await?;
        Ok(subscription)
    }
}
