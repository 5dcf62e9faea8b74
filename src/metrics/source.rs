//! Access to the host's raw data.
//!
//! Collectors read everything through [`HostSource`] so the whole pipeline
//! can run against an in-memory host in tests.

use std::ffi::CString;
use std::io;
use std::mem::MaybeUninit;
use std::path::Path;

/// Block-level statistics for one mounted filesystem
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockStats {
    /// Total data blocks
    pub blocks: u64,
    /// Free blocks (including those reserved for root)
    pub free_blocks: u64,
    /// Size of the unit `blocks` and `free_blocks` are counted in
    pub block_size: u64,
}

/// Raw data the collectors need from the operating system
pub trait HostSource {
    /// Read a whole procfs/sysfs file
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Whether a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Block statistics for the filesystem mounted at `mountpoint`
    fn block_stats(&self, mountpoint: &str) -> io::Result<BlockStats>;

    /// Number of logical cores available to this process
    fn logical_cores(&self) -> usize;
}

/// The running Linux system
#[derive(Debug, Default, Clone, Copy)]
pub struct LinuxHost;

impl HostSource for LinuxHost {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn block_stats(&self, mountpoint: &str) -> io::Result<BlockStats> {
        let c_path = CString::new(mountpoint)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let mut statvfs = MaybeUninit::<libc::statvfs>::uninit();

        let result = unsafe { libc::statvfs(c_path.as_ptr(), statvfs.as_mut_ptr()) };
        if result != 0 {
            return Err(io::Error::last_os_error());
        }

        let statvfs = unsafe { statvfs.assume_init() };
        Ok(BlockStats {
            blocks: statvfs.f_blocks as u64,
            free_blocks: statvfs.f_bfree as u64,
            block_size: statvfs.f_frsize as u64,
        })
    }

    fn logical_cores(&self) -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(0)
    }
}
