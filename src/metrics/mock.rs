//! In-memory host for exercising collectors without a real `/proc`.

use super::source::{BlockStats, HostSource};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct MockHost {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    block_stats: HashMap<String, BlockStats>,
    cores: usize,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            cores: 4,
            ..Default::default()
        }
    }

    /// Add a file; its parent directories start to exist too
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref().to_path_buf();
        let mut parent = path.parent();
        while let Some(p) = parent {
            if !p.as_os_str().is_empty() {
                self.directories.insert(p.to_path_buf());
            }
            parent = p.parent();
        }
        self.files.insert(path, content.into());
    }

    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        self.directories.insert(path.as_ref().to_path_buf());
    }

    /// Register statvfs results for a mountpoint; unregistered ones fail
    pub fn add_block_stats(&mut self, mountpoint: &str, blocks: u64, free_blocks: u64, block_size: u64) {
        self.block_stats.insert(
            mountpoint.to_string(),
            BlockStats {
                blocks,
                free_blocks,
                block_size,
            },
        );
    }

    pub fn set_cores(&mut self, cores: usize) {
        self.cores = cores;
    }
}

impl HostSource for MockHost {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }

    fn block_stats(&self, mountpoint: &str) -> io::Result<BlockStats> {
        self.block_stats
            .get(mountpoint)
            .copied()
            .ok_or_else(|| io::Error::from_raw_os_error(libc::EACCES))
    }

    fn logical_cores(&self) -> usize {
        self.cores
    }
}

/// A `/proc/self/mountinfo` line for `mountpoint`
pub fn mountinfo_line(id: u32, mountpoint: &str, fs_type: &str) -> String {
    format!(
        "{id} 1 0:{id} / {mountpoint} rw,relatime shared:{id} - {fs_type} /dev/sda{id} rw\n"
    )
}

/// A minimal `/proc/meminfo` with the given sizes in kB
pub fn meminfo(total_kb: u64, free_kb: u64, buffers_kb: u64, cached_kb: u64) -> String {
    format!(
        "MemTotal:       {total_kb} kB\n\
         MemFree:        {free_kb} kB\n\
         MemAvailable:   {free_kb} kB\n\
         Buffers:        {buffers_kb} kB\n\
         Cached:         {cached_kb} kB\n\
         SwapCached:            0 kB\n\
         SwapTotal:             0 kB\n"
    )
}
