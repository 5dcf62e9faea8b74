//! Filesystem usage from the mount table and statvfs.

use super::filter;
use super::source::{BlockStats, HostSource};
use super::CollectError;
use std::path::Path;

pub const MOUNTINFO_PATH: &str = "/proc/self/mountinfo";

/// One line of the mount table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountEntry {
    pub mountpoint: String,
    pub fs_type: String,
}

/// Space usage of one mounted filesystem
#[derive(Debug, Clone, PartialEq)]
pub struct DiskUsage {
    pub mountpoint: String,
    pub total_bytes: u64,
    pub used_percent: f64,
}

impl DiskUsage {
    /// Byte totals are exact; a size that does not fit in `u64` is an error
    pub fn from_block_stats(mountpoint: &str, stats: BlockStats) -> Result<Self, CollectError> {
        let overflow = || CollectError::SizeOverflow {
            mountpoint: mountpoint.to_string(),
        };
        let total_bytes = stats.blocks.checked_mul(stats.block_size).ok_or_else(overflow)?;
        let free_bytes = stats
            .free_blocks
            .checked_mul(stats.block_size)
            .ok_or_else(overflow)?;
        let used_bytes = total_bytes.saturating_sub(free_bytes);
        let used_percent = if total_bytes > 0 {
            100.0 * used_bytes as f64 / total_bytes as f64
        } else {
            0.0
        };

        Ok(Self {
            mountpoint: mountpoint.to_string(),
            total_bytes,
            used_percent,
        })
    }
}

/// Enumerate mounts in kernel order
pub fn read_mounts(host: &impl HostSource) -> Result<Vec<MountEntry>, CollectError> {
    let content = host
        .read_to_string(Path::new(MOUNTINFO_PATH))
        .map_err(|source| CollectError::MountTable {
            path: MOUNTINFO_PATH,
            source,
        })?;

    Ok(parse_mountinfo(&content))
}

/// Usage of every reportable mount.
///
/// Fails only when the mount table itself cannot be read; a mountpoint
/// whose statistics cannot be queried is logged and left out.
pub fn collect(host: &impl HostSource) -> Result<Vec<DiskUsage>, CollectError> {
    let mounts = read_mounts(host)?;
    let mut disks = Vec::new();

    for mount in mounts.iter().filter(|m| filter::keep(&m.fs_type)) {
        let usage = host
            .block_stats(&mount.mountpoint)
            .map_err(|source| CollectError::BlockStats {
                mountpoint: mount.mountpoint.clone(),
                source,
            })
            .and_then(|stats| DiskUsage::from_block_stats(&mount.mountpoint, stats));

        match usage {
            Ok(usage) => disks.push(usage),
            Err(err) => log::warn!("{err}"),
        }
    }

    Ok(disks)
}

/// Parse `/proc/self/mountinfo`.
///
/// Line format: `id parent maj:min root mountpoint options [optional...] - fstype source superoptions`
fn parse_mountinfo(content: &str) -> Vec<MountEntry> {
    let mut mounts = Vec::new();

    for line in content.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 7 {
            continue;
        }

        let fs_type = parts[6..]
            .iter()
            .position(|p| *p == "-")
            .and_then(|sep| parts.get(6 + sep + 1));

        match fs_type {
            Some(fs_type) => mounts.push(MountEntry {
                mountpoint: unescape_octal(parts[4]),
                fs_type: unescape_octal(fs_type),
            }),
            None => log::debug!("skipping malformed mountinfo line: {line}"),
        }
    }

    mounts
}

/// Decode the `\NNN` octal escapes the kernel uses for whitespace and backslashes
fn unescape_octal(s: &str) -> String {
    if !s.contains('\\') {
        return s.to_string();
    }

    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 3 < bytes.len() && is_octal_escape(&bytes[i + 1..i + 4]) {
            let value = bytes[i + 1..i + 4]
                .iter()
                .fold(0u32, |acc, b| acc * 8 + (b - b'0') as u32);
            if let Ok(byte) = u8::try_from(value) {
                out.push(byte);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn is_octal_escape(digits: &[u8]) -> bool {
    digits.len() == 3 && digits.iter().all(|b| (b'0'..=b'7').contains(b))
}
