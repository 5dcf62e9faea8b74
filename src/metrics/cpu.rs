//! CPU load from /proc/loadavg, normalized by the logical core count.

use super::source::HostSource;
use super::CollectError;
use std::path::Path;

pub const LOADAVG_PATH: &str = "/proc/loadavg";

/// Load averages (1min, 5min, 15min)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

/// Load of one averaging window as a share of the available cores
#[derive(Debug, Clone, PartialEq)]
pub struct WindowLoad {
    /// Window label, e.g. "5 mn"
    pub window: &'static str,
    /// Can exceed 100 when the run queue is longer than the core count
    pub percent: f64,
}

/// Collect the 1, 5 and 15 minute loads, in that order
pub fn collect(host: &impl HostSource) -> Result<[WindowLoad; 3], CollectError> {
    let cores = host.logical_cores();
    if cores == 0 {
        return Err(CollectError::NoCores);
    }

    let load = read_load_average(host)?;
    let percent = |load: f64| load / cores as f64 * 100.0;

    Ok([
        WindowLoad {
            window: "1 mn",
            percent: percent(load.one),
        },
        WindowLoad {
            window: "5 mn",
            percent: percent(load.five),
        },
        WindowLoad {
            window: "15 mn",
            percent: percent(load.fifteen),
        },
    ])
}

fn read_load_average(host: &impl HostSource) -> Result<LoadAverage, CollectError> {
    let content = host
        .read_to_string(Path::new(LOADAVG_PATH))
        .map_err(|e| CollectError::LoadAverage {
            path: LOADAVG_PATH,
            reason: e.to_string(),
        })?;

    parse_load_average(&content)
}

fn parse_load_average(content: &str) -> Result<LoadAverage, CollectError> {
    let parts: Vec<f64> = content
        .split_whitespace()
        .take(3)
        .map_while(|s| s.parse().ok())
        .filter(|v: &f64| v.is_finite() && *v >= 0.0)
        .collect();

    match parts[..] {
        [one, five, fifteen] => Ok(LoadAverage { one, five, fifteen }),
        _ => Err(CollectError::LoadAverage {
            path: LOADAVG_PATH,
            reason: format!("expected three load values, got {:?}", content.trim()),
        }),
    }
}
