//! Human-readable size formatting.

const UNIT: u64 = 1000;
const UNITS: [&str; 6] = ["kB", "MB", "GB", "TB", "PB", "EB"];

/// Format bytes using decimal (1000-based) units, e.g. "1.5 MB"
pub fn human_readable(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let mut div = UNIT;
    let mut exp = 0;
    while bytes / div >= UNIT && exp < UNITS.len() - 1 {
        div *= UNIT;
        exp += 1;
    }

    format!("{:.1} {}", bytes as f64 / div as f64, UNITS[exp])
}
