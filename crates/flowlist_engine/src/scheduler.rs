use std::sync::Arc;
use std::time::Duration;

use list_logging::list_debug;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{DataSource, FetchRequest, FetchResponse, FetchToken, SourceError};

#[derive(Debug, Clone)]
pub struct SchedulerSettings {
    /// Quiet interval between the last debounced change and dispatch.
    pub quiet_interval: Duration,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            quiet_interval: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchTiming {
    /// Wait out the quiet interval before dispatching.
    Debounced,
    /// Dispatch without delay.
    Immediate,
}

/// Completion of a dispatched fetch, delivered back to the driver loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettledFetch {
    pub token: FetchToken,
    pub result: Result<FetchResponse, SourceError>,
}

/// Single-slot fetch scheduler.
///
/// At most one fetch is pending (scheduled but not yet dispatched) at a
/// time; arming a new one cancels the previous slot first, so a replaced
/// pending fetch never reaches the data source even if its timer already
/// started. A fetch that has dispatched runs to completion; its result is
/// discarded downstream by the token rule, never aborted mid-flight.
pub struct FetchScheduler {
    source: Arc<dyn DataSource>,
    settings: SchedulerSettings,
    settled_tx: mpsc::UnboundedSender<SettledFetch>,
    pending: Option<CancellationToken>,
}

impl FetchScheduler {
    pub fn new(
        source: Arc<dyn DataSource>,
        settings: SchedulerSettings,
        settled_tx: mpsc::UnboundedSender<SettledFetch>,
    ) -> Self {
        Self {
            source,
            settings,
            settled_tx,
            pending: None,
        }
    }

    /// Arms a fetch for `request`, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, token: FetchToken, request: FetchRequest, timing: DispatchTiming) {
        self.cancel();

        let cancel = CancellationToken::new();
        self.pending = Some(cancel.clone());

        let source = self.source.clone();
        let settled_tx = self.settled_tx.clone();
        let quiet_interval = self.settings.quiet_interval;
        list_debug!(
            "schedule fetch token={} page={} filter_len={} timing={:?}",
            token,
            request.page,
            request.flow_name.len(),
            timing
        );

        tokio::spawn(async move {
            match timing {
                DispatchTiming::Debounced => {
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            list_debug!("fetch token={} cancelled before dispatch", token);
                            return;
                        }
                        _ = tokio::time::sleep(quiet_interval) => {}
                    }
                }
                DispatchTiming::Immediate => {
                    if cancel.is_cancelled() {
                        return;
                    }
                }
            }

            // Dispatched. From here on cancellation no longer applies.
            let result = source.fetch(&request).await;
            let _ = settled_tx.send(SettledFetch { token, result });
        });
    }

    /// Clears the pending slot without replacement (teardown, or an
    /// explicit cancellation before a new schedule).
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

impl Drop for FetchScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
