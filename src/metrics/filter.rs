//! Filesystem type filtering for disk gauges.

/// Pseudo and virtual filesystems that never get a gauge
pub const IGNORED_FS_TYPES: &[&str] = &[
    "tmpfs",
    "devtmpfs",
    "proc",
    "sysfs",
    "cgroup2",
    "securityfs",
    "pstore",
    "efivarfs",
    "bpf",
    "configfs",
    "autofs",
    "debugfs",
    "hugetlbfs",
    "tracefs",
    "mqueue",
    "fusectl",
    "binfmt_misc",
    "rpc_pipefs",
    "overlay",         // container layers
    "squashfs",        // snap packages
    "nsfs",            // namespaces
    "fuse.gvfsd-fuse", // GNOME virtual file system
    "fuse.portal",     // GNOME portal
    "devpts",
    "selinuxfs",
];

/// Whether a mount of this filesystem type is worth reporting.
///
/// Other `fuse.*` mounts (encfs, sshfs, ...) are kept, except for mounted
/// AppImages.
pub fn keep(fs_type: &str) -> bool {
    if IGNORED_FS_TYPES.contains(&fs_type) {
        return false;
    }
    !(fs_type.starts_with("fuse.") && fs_type.contains("AppImage"))
}
