//! Background docker feed
//!
//! Lists containers and samples their stats on a fixed interval. Container
//! lists travel through the display's event queue so only the display loop
//! mutates the grid; stats go straight into the [`MetricsStore`], which the
//! display reads on its next frame.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::core::metrics::MetricsStore;
use crate::docker::client::{ContainerStats, DockerCli};
use crate::tui::event::AppEvent;

/// Periodic container/stats poller
pub struct Collector {
    docker: DockerCli,
    poll_interval: Duration,
    show_all: bool,
    events: mpsc::Sender<AppEvent>,
    store: MetricsStore,
}

impl Collector {
    /// Create a new collector
    pub fn new(
        docker: DockerCli,
        poll_interval: Duration,
        show_all: bool,
        events: mpsc::Sender<AppEvent>,
        store: MetricsStore,
    ) -> Self {
        Self {
            docker,
            poll_interval,
            show_all,
            events,
            store,
        }
    }

    /// Run the poller until the event queue is closed
    ///
    /// The first poll happens one interval from now; startup has already
    /// listed the containers once.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = self.ticker();

            loop {
                ticker.tick().await;
                if !self.poll_once().await {
                    tracing::debug!("event queue closed, stopping collector");
                    break;
                }
            }
        })
    }

    fn ticker(&self) -> Interval {
        let mut ticker = interval_at(Instant::now() + self.poll_interval, self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }

    /// Take one sample. Returns `false` once nobody is listening anymore.
    pub async fn poll_once(&self) -> bool {
        let event = match self.docker.list_containers(self.show_all).await {
            Ok(containers) => {
                tracing::trace!(count = containers.len(), "containers listed");
                AppEvent::Containers(containers)
            }
            Err(e) => {
                tracing::warn!("Container listing failed: {}", e);
                AppEvent::SourceError(first_line(&e.to_string()))
            }
        };

        if self.events.send(event).await.is_err() {
            return false;
        }

        match self.docker.stats().await {
            Ok(stats) => {
                tracing::trace!(count = stats.len(), "stats sampled");
                self.store
                    .replace(stats.into_iter().map(ContainerStats::into_metrics));
            }
            Err(e) => tracing::warn!("Stats sampling failed: {}", e),
        }

        true
    }
}

fn first_line(message: &str) -> String {
    message.lines().next().unwrap_or_default().to_string()
}
