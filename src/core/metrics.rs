//! Live container metrics
//!
//! The collector writes samples into a [`MetricsStore`]; the display only
//! ever reads them back through [`MetricsProvider`] while drawing a frame.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use bytesize::ByteSize;

/// Placeholder shown for a column with no sample yet
pub const MISSING: &str = "-";

/// One resource sample for a container
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    /// CPU usage in percent of one host CPU
    pub cpu_percent: f64,
    /// Resident memory in bytes
    pub mem_usage: u64,
    /// Memory limit in bytes
    pub mem_limit: u64,
    /// Bytes received
    pub net_rx: u64,
    /// Bytes transmitted
    pub net_tx: u64,
}

impl Metrics {
    pub fn cpu_text(&self) -> String {
        format!("{:.1}%", self.cpu_percent)
    }

    pub fn mem_text(&self) -> String {
        format!(
            "{} / {}",
            ByteSize::b(self.mem_usage),
            ByteSize::b(self.mem_limit)
        )
    }

    pub fn net_text(&self) -> String {
        format!("{} / {}", ByteSize::b(self.net_rx), ByteSize::b(self.net_tx))
    }
}

/// Read-only lookup of the latest sample for a container id
#[cfg_attr(test, mockall::automock)]
pub trait MetricsProvider: Send + Sync {
    fn metrics(&self, id: &str) -> Option<Metrics>;
}

/// Provider with no samples; every column renders as missing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetrics;

impl MetricsProvider for NoMetrics {
    fn metrics(&self, _id: &str) -> Option<Metrics> {
        None
    }
}

/// Shared snapshot of the most recent sample per container
#[derive(Debug, Clone, Default)]
pub struct MetricsStore {
    inner: Arc<RwLock<HashMap<String, Metrics>>>,
}

impl MetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot; containers absent from `samples` are dropped.
    pub fn replace(&self, samples: impl IntoIterator<Item = (String, Metrics)>) {
        let fresh: HashMap<String, Metrics> = samples.into_iter().collect();
        match self.inner.write() {
            Ok(mut map) => *map = fresh,
            Err(poisoned) => *poisoned.into_inner() = fresh,
        }
    }

}

impl MetricsProvider for MetricsStore {
    fn metrics(&self, id: &str) -> Option<Metrics> {
        self.inner.read().ok()?.get(id).cloned()
    }
}
