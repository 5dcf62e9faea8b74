//! Single-shot and watch-mode drivers for collect+render cycles.

use crate::config::ActiveMetricSet;
use crate::display::format_snapshot;
use crate::metrics::source::HostSource;
use crate::metrics::MetricsCollector;
use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::future::Future;
use std::io::Write;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

pub struct Scheduler<H> {
    collector: MetricsCollector<H>,
    active: ActiveMetricSet,
}

impl<H: HostSource> Scheduler<H> {
    pub fn new(collector: MetricsCollector<H>, active: ActiveMetricSet) -> Self {
        Self { collector, active }
    }

    /// Run once, or redraw on every tick until `shutdown` resolves
    pub async fn run<W, F>(&self, out: &mut W, shutdown: F) -> Result<()>
    where
        W: Write,
        F: Future<Output = ()>,
    {
        match self.active.watch_period() {
            None => self.cycle(out),
            Some(period) => self.watch(period, out, shutdown).await,
        }
    }

    async fn watch<W, F>(&self, period: Duration, out: &mut W, shutdown: F) -> Result<()>
    where
        W: Write,
        F: Future<Output = ()>,
    {
        // The first tick completes immediately
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    log::debug!("watch loop stopped");
                    return Ok(());
                }
                _ = ticker.tick() => self.redraw(out)?,
            }
        }
    }

    /// Collect and print one snapshot
    fn cycle<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut buf = Vec::new();
        self.render_into(&mut buf)?;
        write_all(out, &buf)
    }

    /// Clear the screen, print the header and one snapshot
    fn redraw<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut buf = Vec::new();
        queue!(buf, MoveTo(0, 0), Clear(ClearType::All))?;
        writeln!(
            buf,
            "Refreshing every {} second(s). Press Ctrl+C to exit. Last update: {}",
            self.active.watch_seconds,
            Local::now().format("%H:%M:%S")
        )?;
        self.render_into(&mut buf)?;
        write_all(out, &buf)
    }

    fn render_into(&self, buf: &mut Vec<u8>) -> Result<()> {
        let snapshot = self
            .collector
            .collect(&self.active)
            .context("Failed to collect metrics")?;
        buf.extend_from_slice(format_snapshot(&snapshot, self.active.monochrome).as_bytes());
        Ok(())
    }
}

fn write_all<W: Write>(out: &mut W, buf: &[u8]) -> Result<()> {
    out.write_all(buf).context("Failed to write to stdout")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
