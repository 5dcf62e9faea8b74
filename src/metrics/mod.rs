//! Metrics collection for the four gauge domains.

pub mod battery;
pub mod cpu;
pub mod disk;
pub mod filter;
pub mod memory;
#[cfg(test)]
pub mod mock;
pub mod source;

use crate::config::ActiveMetricSet;
use crate::format::human_readable;
use crate::gauge::Polarity;
use source::HostSource;
use std::io;
use thiserror::Error;

/// Failure of one metric domain
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("failed to read mount table {path}: {source}")]
    MountTable {
        path: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("failed to get statfs for {mountpoint}: {source}")]
    BlockStats {
        mountpoint: String,
        #[source]
        source: io::Error,
    },

    #[error("size of {mountpoint} does not fit in 64 bits")]
    SizeOverflow { mountpoint: String },

    #[error("failed to get virtual memory information from {path}: {reason}")]
    Memory { path: &'static str, reason: String },

    #[error("failed to get CPU load average from {path}: {reason}")]
    LoadAverage { path: &'static str, reason: String },

    #[error("no logical CPU cores reported")]
    NoCores,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Disk,
    Ram,
    Cpu,
    Battery,
}

/// One gauge line worth of data
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub kind: MetricKind,
    pub label: String,
    /// Human-readable capacity (disks, RAM)
    pub size_text: Option<String>,
    pub usage_percent: f64,
    /// Load window for CPU, charge status for battery
    pub status_text: Option<String>,
}

impl MetricSample {
    /// Text for the column between label and gauge
    pub fn detail(&self) -> &str {
        self.size_text
            .as_deref()
            .or(self.status_text.as_deref())
            .unwrap_or("")
    }

    /// Battery gauges run red at the low end
    pub fn polarity(&self) -> Polarity {
        match self.kind {
            MetricKind::Battery => Polarity::Inverted,
            _ => Polarity::Normal,
        }
    }
}

/// Samples of one cycle: disks, RAM, CPU 1/5/15, battery
pub type Snapshot = Vec<MetricSample>;

/// Queries the enabled domains of a host
pub struct MetricsCollector<H> {
    host: H,
}

impl<H: HostSource> MetricsCollector<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Collect one snapshot.
    ///
    /// A failing domain is logged and left out of the snapshot. The only
    /// error returned is an unreadable mount table with `strict_mounts` set.
    pub fn collect(&self, active: &ActiveMetricSet) -> Result<Snapshot, CollectError> {
        let mut snapshot = Snapshot::new();

        if active.disks {
            match disk::collect(&self.host) {
                Ok(disks) => snapshot.extend(disks.into_iter().map(|d| MetricSample {
                    kind: MetricKind::Disk,
                    label: d.mountpoint,
                    size_text: Some(human_readable(d.total_bytes)),
                    usage_percent: d.used_percent,
                    status_text: None,
                })),
                Err(e) if active.strict_mounts => return Err(e),
                Err(e) => log::warn!("{e}"),
            }
        }

        if active.ram {
            match memory::collect(&self.host) {
                Ok(mem) => snapshot.push(MetricSample {
                    kind: MetricKind::Ram,
                    label: "RAM".to_string(),
                    size_text: Some(human_readable(mem.total)),
                    usage_percent: mem.used_percent,
                    status_text: None,
                }),
                Err(e) => log::warn!("{e}"),
            }
        }

        if active.cpu {
            match cpu::collect(&self.host) {
                Ok(windows) => snapshot.extend(windows.into_iter().map(|w| MetricSample {
                    kind: MetricKind::Cpu,
                    label: "CPU".to_string(),
                    size_text: None,
                    usage_percent: w.percent,
                    status_text: Some(w.window.to_string()),
                })),
                Err(e) => log::warn!("{e}"),
            }
        }

        if active.battery {
            if let Some(bat) = battery::collect(&self.host) {
                snapshot.push(MetricSample {
                    kind: MetricKind::Battery,
                    label: "Battery".to_string(),
                    size_text: None,
                    usage_percent: bat.capacity,
                    status_text: Some(bat.status),
                });
            }
        }

        Ok(snapshot)
    }
}
