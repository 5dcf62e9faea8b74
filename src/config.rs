//! Resolution of command-line flags into the set of gauges to show.

use clap::Args;
use std::time::Duration;

/// Metric selection flags as given on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct MetricFlags {
    /// Display output in monochrome without colors
    #[arg(short, long)]
    pub monochrome: bool,

    /// Display file systems metrics
    #[arg(short, long)]
    pub disks: bool,

    /// Display RAM metrics
    #[arg(short, long)]
    pub ram: bool,

    /// Display CPU load metrics
    #[arg(short, long)]
    pub cpu: bool,

    /// Display battery metrics (if any)
    #[arg(short, long)]
    pub battery: bool,

    /// Display all metrics
    #[arg(short, long)]
    pub all: bool,

    /// Refresh every N seconds (0 = run once)
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    pub watch: u64,

    /// Exit with an error if the mount table cannot be read
    #[arg(long)]
    pub strict_mounts: bool,
}

/// Which gauges to render and how often, fixed for the life of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveMetricSet {
    pub disks: bool,
    pub ram: bool,
    pub cpu: bool,
    pub battery: bool,
    pub monochrome: bool,
    /// 0 runs a single cycle
    pub watch_seconds: u64,
    pub strict_mounts: bool,
}

impl ActiveMetricSet {
    /// Resolve flags: `-a`, or no per-metric flag at all, selects everything
    pub fn resolve(flags: &MetricFlags) -> Self {
        let none_selected = !(flags.disks || flags.ram || flags.cpu || flags.battery);
        let all = flags.all || none_selected;

        Self {
            disks: all || flags.disks,
            ram: all || flags.ram,
            cpu: all || flags.cpu,
            battery: all || flags.battery,
            monochrome: flags.monochrome,
            watch_seconds: flags.watch,
            strict_mounts: flags.strict_mounts,
        }
    }

    /// Time between redraws, `None` for a single run
    pub fn watch_period(&self) -> Option<Duration> {
        (self.watch_seconds > 0).then(|| Duration::from_secs(self.watch_seconds))
    }
}
