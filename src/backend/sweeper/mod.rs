//! Inactivity Sweeper
//!
//! A single background task that, on every tick, evicts participants who
//! have been silent for longer than the idle timeout and appends a
//! departure notice for each of them.
//!
//! # Cycle
//!
//! 1. Select and delete stale participants in one store operation
//! 2. Append one `status` departure notice per evicted name; the appends run
//!    concurrently and are unordered relative to each other
//! 3. Wait for every append to finish before the cycle ends
//!
//! The next tick is not processed until the current cycle has ended, so
//! cycles never overlap however slow the store is. Store failures are
//! logged and the loop carries on; the next tick is the retry.

use std::time::Duration;

use futures_util::future::join_all;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::backend::error::BackendError;
use crate::backend::messages::MessageLog;
use crate::backend::presence::PresenceRegistry;
use crate::shared::clock::{clock_time, now_millis};
use crate::shared::Message;

/// Outcome of one sweep cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Participants removed this cycle
    pub evicted: Vec<String>,
    /// Evicted participants whose departure notice could not be stored
    pub failed_notices: Vec<String>,
}

#[derive(Clone)]
pub struct Sweeper {
    presence: PresenceRegistry,
    messages: MessageLog,
    interval: Duration,
    idle_timeout: Duration,
}

impl Sweeper {
    pub fn new(
        presence: PresenceRegistry,
        messages: MessageLog,
        interval: Duration,
        idle_timeout: Duration,
    ) -> Self {
        Self {
            presence,
            messages,
            interval,
            idle_timeout,
        }
    }

    /// Run one cycle as of `now_ms`.
    ///
    /// Fails only if eviction itself fails. A failed departure notice is
    /// logged and reported in [`SweepReport::failed_notices`]; the
    /// participant stays evicted.
    pub async fn sweep_once(&self, now_ms: i64) -> Result<SweepReport, BackendError> {
        let evicted = self.presence.evict_stale(self.idle_timeout, now_ms).await?;
        if evicted.is_empty() {
            return Ok(SweepReport::default());
        }

        let time = clock_time(now_ms);
        let messages = &self.messages;
        let notices = evicted.iter().map(|name| {
            let notice = Message::departure(name.as_str(), time.as_str());
            async move { (name, messages.append(&notice).await) }
        });

        let mut failed_notices = Vec::new();
        for (name, result) in join_all(notices).await {
            match result {
                Ok(()) => tracing::info!("{} left the room (inactive)", name),
                Err(e) => {
                    tracing::error!("Failed to record departure of {}: {}", name, e);
                    failed_notices.push(name.clone());
                }
            }
        }

        Ok(SweepReport {
            evicted,
            failed_notices,
        })
    }

    /// Sweep forever, one cycle per interval.
    ///
    /// The first cycle runs one full interval after start.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;

        tracing::info!(
            "Inactivity sweeper started (every {:?}, idle timeout {:?})",
            self.interval,
            self.idle_timeout
        );

        loop {
            ticker.tick().await;
            match self.sweep_once(now_millis()).await {
                Ok(report) if !report.evicted.is_empty() => {
                    tracing::debug!("Sweep evicted {} participant(s)", report.evicted.len());
                }
                Ok(_) => {}
                Err(e) => tracing::error!("Sweep cycle failed, retrying next tick: {}", e),
            }
        }
    }

    /// Spawn [`Sweeper::run`] on the tokio runtime
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
