//! Dashboard streaming
//!
//! Produces the periodic status frame the dashboard renders: server count,
//! bot status, process uptime, and a wall-clock timestamp. The stream owns
//! only what it reads (guild repository, liveness source, process clock),
//! so one instance can be built per connection without touching the rest
//! of the service context.
//!
//! The transport is abstracted behind [`FrameSink`]; the API layer adapts
//! a WebSocket connection to it. A closed sink ends the stream as a normal
//! disconnect, and a shutdown signal ends it as a cancellation. Only a
//! failed read is an error.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, instrument};

use steward_common::ProcessClock;
use steward_core::{BotLiveness, GuildRepository};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// One status frame, serialized as-is onto the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardFrame {
    pub server_count: i64,
    pub bot_status: &'static str,
    pub uptime: u64,
    pub timestamp: DateTime<Utc>,
}

/// Returned by a sink whose peer is gone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkClosed;

/// Destination for dashboard frames
#[async_trait]
pub trait FrameSink: Send {
    /// Deliver one frame; `Err(SinkClosed)` means the peer disconnected
    async fn send(&mut self, frame: DashboardFrame) -> Result<(), SinkClosed>;
}

/// How a dashboard stream ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// The peer went away
    Disconnected,
    /// The server asked the stream to stop
    Cancelled,
}

/// Periodic dashboard frame producer for one connection
pub struct DashboardStream {
    guilds: Arc<dyn GuildRepository>,
    liveness: Arc<dyn BotLiveness>,
    clock: ProcessClock,
    interval: Duration,
}

impl DashboardStream {
    /// Create a stream over explicit sources
    pub fn new(
        guilds: Arc<dyn GuildRepository>,
        liveness: Arc<dyn BotLiveness>,
        clock: ProcessClock,
        interval: Duration,
    ) -> Self {
        Self {
            guilds,
            liveness,
            clock,
            interval,
        }
    }

    /// Create a stream backed by the shared service context
    pub fn from_context(ctx: &ServiceContext, clock: ProcessClock, interval: Duration) -> Self {
        Self::new(
            ctx.guild_repo_handle(),
            ctx.bot_liveness_handle(),
            clock,
            interval,
        )
    }

    /// Read the current state into one frame
    async fn frame(&self) -> ServiceResult<DashboardFrame> {
        let server_count = self.guilds.count().await?;
        let bot_status = if self.liveness.is_online().await {
            "online"
        } else {
            "offline"
        };

        Ok(DashboardFrame {
            server_count,
            bot_status,
            uptime: self.clock.uptime_seconds(),
            timestamp: Utc::now(),
        })
    }

    /// Push frames into the sink until disconnect, shutdown, or a read error
    ///
    /// The first tick fires immediately, so a new connection sees a frame
    /// without waiting out a full period.
    #[instrument(skip(self, sink, shutdown))]
    pub async fn run<S: FrameSink>(
        &self,
        sink: &mut S,
        mut shutdown: watch::Receiver<bool>,
    ) -> ServiceResult<StreamEnd> {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let frame = self.frame().await?;
                    if sink.send(frame).await.is_err() {
                        debug!("Dashboard client went away");
                        return Ok(StreamEnd::Disconnected);
                    }
                }
                res = shutdown.changed() => {
                    // A dropped sender counts as shutdown too.
                    if res.is_err() || *shutdown.borrow() {
                        debug!("Dashboard stream cancelled");
                        return Ok(StreamEnd::Cancelled);
                    }
                }
            }
        }
    }
}
