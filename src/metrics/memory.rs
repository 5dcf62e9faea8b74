//! Memory metrics collection from /proc/meminfo.

use super::source::HostSource;
use super::CollectError;
use std::path::Path;

pub const MEMINFO_PATH: &str = "/proc/meminfo";

/// Memory metrics
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryUsage {
    /// Total system RAM in bytes
    pub total: u64,
    /// Used memory percentage
    pub used_percent: f64,
}

/// Collect current memory usage
pub fn collect(host: &impl HostSource) -> Result<MemoryUsage, CollectError> {
    let meminfo = host
        .read_to_string(Path::new(MEMINFO_PATH))
        .map_err(|e| CollectError::Memory {
            path: MEMINFO_PATH,
            reason: e.to_string(),
        })?;

    parse_meminfo(&meminfo)
}

fn parse_meminfo(meminfo: &str) -> Result<MemoryUsage, CollectError> {
    let mut total: Option<u64> = None;
    let mut free: u64 = 0;
    let mut buffers: u64 = 0;
    let mut cached: u64 = 0;
    let mut reclaimable: u64 = 0;

    for line in meminfo.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            continue;
        }

        let value: u64 = parts[1].parse::<u64>().unwrap_or(0).saturating_mul(1024); // kB to bytes

        match parts[0] {
            "MemTotal:" => total = Some(value),
            "MemFree:" => free = value,
            "Buffers:" => buffers = value,
            "Cached:" => cached = value,
            "SReclaimable:" => reclaimable = value,
            _ => {}
        }
    }

    let total = total.ok_or_else(|| CollectError::Memory {
        path: MEMINFO_PATH,
        reason: "no MemTotal entry".to_string(),
    })?;

    // Reclaimable slab counts as cache; used memory excludes buffers and cache
    let cached = cached.saturating_add(reclaimable);
    let used = total.saturating_sub(free.saturating_add(buffers).saturating_add(cached));
    let used_percent = if total > 0 {
        100.0 * used as f64 / total as f64
    } else {
        0.0
    };

    Ok(MemoryUsage {
        total,
        used_percent,
    })
}
