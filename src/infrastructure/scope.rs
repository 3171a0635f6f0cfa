//! Fetches bound to the lifetime of the view that consumes them
//!
//! Every load is spawned inside a [`ViewScope`]. Closing or dropping the scope cancels
//! whatever is still in flight: the fetch future is dropped and its handle settles on
//! [`FetchState::Cancelled`], so a torn-down view can never receive a late value.
//! Fetches in one scope are independent and complete in no particular order.

use crate::error::{Error, Result};
use crate::infrastructure::log_messages::scope as messages;
use serde::Serialize;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

/// Observable progress of one fetch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
    Cancelled,
}

impl<T> FetchState<T> {
    pub fn is_settled(&self) -> bool {
        !matches!(self, FetchState::Loading)
    }
}

/// Receiving end of a scoped fetch
#[derive(Debug)]
pub struct FetchHandle<T> {
    asset: String,
    state: watch::Receiver<FetchState<T>>,
}

impl<T: Clone> FetchHandle<T> {
    pub fn asset(&self) -> &str {
        &self.asset
    }

    /// Current state without waiting
    pub fn state(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }

    /// Waits until the fetch settles
    pub async fn settled(mut self) -> FetchState<T> {
        loop {
            let current = self.state.borrow_and_update().clone();
            if current.is_settled() {
                return current;
            }
            if self.state.changed().await.is_err() {
                // Task went away without settling
                return FetchState::Cancelled;
            }
        }
    }

    /// Waits for the value, mapping failure and cancellation to errors
    pub async fn value(self) -> Result<T> {
        let asset = self.asset.clone();
        match self.settled().await {
            FetchState::Ready(value) => Ok(value),
            FetchState::Failed(message) => Err(Error::FetchFailed { asset, message }),
            FetchState::Cancelled | FetchState::Loading => Err(Error::cancelled(asset)),
        }
    }
}

/// Owner of the fetches issued on behalf of one view
#[derive(Debug)]
pub struct ViewScope {
    name: String,
    shutdown_tx: broadcast::Sender<()>,
    closed: Arc<AtomicBool>,
}

impl ViewScope {
    pub fn new(name: impl Into<String>) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            name: name.into(),
            shutdown_tx,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Runs `fetch` on the runtime until it completes or the scope closes
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T, F>(&self, asset: impl Into<String>, fetch: F) -> FetchHandle<T>
    where
        T: Clone + Send + Sync + 'static,
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let asset = asset.into();
        let (state_tx, state_rx) = watch::channel(FetchState::Loading);
        let handle = FetchHandle {
            asset: asset.clone(),
            state: state_rx,
        };

        // Subscribe before checking `closed` so a concurrent close is never missed
        let mut shutdown_rx = self.shutdown_tx.subscribe();
        if self.is_closed() {
            let _ = state_tx.send(FetchState::Cancelled);
            return handle;
        }

        let scope = self.name.clone();
        let closed = Arc::clone(&self.closed);
        debug!(scope = %scope, asset = %asset, "{}", messages::FETCH_STARTED);
        tokio::spawn(async move {
            // Shutdown is polled first: a scope closed before the first poll never yields Ready
            let settled = tokio::select! {
                biased;
                _ = shutdown_rx.recv() => FetchState::Cancelled,
                result = fetch => match result {
                    Ok(value) => FetchState::Ready(value),
                    Err(e) => {
                        warn!(
                            scope = %scope,
                            asset = %asset,
                            error = %e,
                            "{}",
                            messages::FETCH_FAILED
                        );
                        FetchState::Failed(e.to_string())
                    }
                },
            };
            let settled = match settled {
                FetchState::Ready(_) if closed.load(Ordering::Acquire) => FetchState::Cancelled,
                other => other,
            };
            match &settled {
                FetchState::Ready(_) => {
                    debug!(scope = %scope, asset = %asset, "{}", messages::FETCH_COMPLETED)
                }
                FetchState::Cancelled => {
                    info!(scope = %scope, asset = %asset, "{}", messages::FETCH_CANCELLED)
                }
                FetchState::Loading | FetchState::Failed(_) => {}
            }
            let _ = state_tx.send(settled);
        });

        handle
    }

    /// Cancels every fetch still in flight; later spawns are cancelled immediately
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            debug!(scope = %self.name, "{}", messages::SCOPE_CLOSED);
            let _ = self.shutdown_tx.send(());
        }
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.close();
    }
}
