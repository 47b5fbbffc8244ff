//! Gateway: the main event loop connecting channels to the progression core.
//!
//! Every inbound update is handled on its own task. Updates for the same
//! user are serialized by the profile store, not here.

mod pipeline;


use funbot_core::{message::IncomingMessage, traits::Channel};
use funbot_progress::Orchestrator;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

/// Routes updates from channels to command and action handlers.
pub struct Gateway {
    pub(super) channels: HashMap<String, Arc<dyn Channel>>,
    pub(super) orchestrator: Orchestrator,
}

impl Gateway {
    /// Create a new gateway.
    pub fn new(channels: HashMap<String, Arc<dyn Channel>>, orchestrator: Orchestrator) -> Self {
        Self {
            channels,
            orchestrator,
        }
    }

    /// Run the main event loop until every channel closes or Ctrl-C.
    pub async fn run(self: Arc<Self>) -> anyhow::Result<()> {
        info!(
            "funbot gateway running | channels: {}",
            self.channels.keys().cloned().collect::<Vec<_>>().join(", "),
        );

        let (tx, mut rx) = mpsc::channel::<IncomingMessage>(256);

        for (name, channel) in &self.channels {
            let mut channel_rx = channel
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("failed to start channel {name}: {e}"))?;
            let tx = tx.clone();
            let channel_name = name.clone();

            tokio::spawn(async move {
                while let Some(msg) = channel_rx.recv().await {
                    if tx.send(msg).await.is_err() {
                        info!("gateway receiver dropped, stopping {channel_name} forwarder");
                        break;
                    }
                }
            });

            info!("Channel started: {name}");
        }

        drop(tx);

        let mut handlers = JoinSet::new();
        loop {
            tokio::select! {
                maybe = rx.recv() => {
                    let Some(incoming) = maybe else {
                        info!("all channels closed");
                        break;
                    };
                    let gw = self.clone();
                    handlers.spawn(async move {
                        gw.handle_message(incoming).await;
                    });
                    while let Some(done) = handlers.try_join_next() {
                        log_handler_exit(done);
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        if !handlers.is_empty() {
            info!("waiting for {} in-flight handlers", handlers.len());
        }
        while let Some(done) = handlers.join_next().await {
            log_handler_exit(done);
        }

        self.shutdown().await;
        Ok(())
    }

    /// Stop all channels.
    async fn shutdown(&self) {
        info!(
            "Shutting down... ({} profiles in memory)",
            self.orchestrator.store().len()
        );

        for (name, channel) in &self.channels {
            if let Err(e) = channel.stop().await {
                warn!("failed to stop channel {name}: {e}");
            }
        }

        info!("Shutdown complete.");
    }
}

fn log_handler_exit(result: Result<(), tokio::task::JoinError>) {
    if let Err(e) = result {
        error!("update handler failed: {e}");
    }
}
