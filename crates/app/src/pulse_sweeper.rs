//! Pulse sweeper — background task that expires pulses.
//!
//! Every `interval` the sweeper asks the [`PointService`] to revert pulses
//! whose deadline has passed. A late tick only delays an expiry; nothing is
//! lost, so missed ticks are not replayed.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::ports::{Clock, EventLog};
use crate::services::point_service::PointService;

/// Periodic pulse-expiry driver.
pub struct PulseSweeper<C, L> {
    points: Arc<PointService<C, L>>,
    interval: Duration,
}

impl<C, L> PulseSweeper<C, L>
where
    C: Clock + Send + Sync + 'static,
    L: EventLog + Send + Sync + 'static,
{
    /// Spawn the sweep loop on the current runtime.
    ///
    /// The task runs until the returned handle is aborted.
    pub fn start(points: Arc<PointService<C, L>>, interval: Duration) -> JoinHandle<()> {
        let sweeper = Self { points, interval };
        tokio::spawn(sweeper.run())
    }

    async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let expired = self.points.tick();
            if expired > 0 {
                tracing::debug!(expired, "pulse sweep reverted points");
            }
        }
    }
}
