//! sysgauge - disk, RAM, CPU load and battery gauges for the terminal.
//!
//! Prints one color-coded ASCII gauge per metric, once or on a fixed
//! refresh interval.

mod config;
mod display;
mod format;
mod gauge;
mod metrics;
mod scheduler;

use anyhow::Result;
use clap::Parser;
use config::{ActiveMetricSet, MetricFlags};
use metrics::source::LinuxHost;
use metrics::MetricsCollector;
use scheduler::Scheduler;
use std::io;

/// Show system resource usage as ASCII gauges
#[derive(Parser, Debug)]
#[command(name = "sysgauge")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    metrics: MetricFlags,
}

/// Resolves when the user presses Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let active = ActiveMetricSet::resolve(&args.metrics);
    log::debug!("active metrics: {active:?}");

    let scheduler = Scheduler::new(MetricsCollector::new(LinuxHost), active);
    let mut stdout = io::stdout().lock();
    scheduler.run(&mut stdout, shutdown_signal()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_short_flags() {
        let args = Args::try_parse_from(["sysgauge", "-m", "-b", "-w", "3"]).unwrap();
        let active = ActiveMetricSet::resolve(&args.metrics);
        assert!(active.monochrome && active.battery);
        assert!(!active.disks && !active.ram && !active.cpu);
        assert_eq!(active.watch_seconds, 3);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["sysgauge", "-x"]).is_err());
    }
}
