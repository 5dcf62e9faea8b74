//! Battery charge from the power_supply sysfs class.

use super::source::HostSource;
use std::path::Path;

pub const BATTERY_DIR: &str = "/sys/class/power_supply/BAT0";

#[derive(Debug, Clone, PartialEq)]
pub struct BatteryState {
    /// Charge percentage, 0 when unreadable
    pub capacity: f64,
    /// e.g. "Charging", "Discharging", empty when unreadable
    pub status: String,
}

/// Current battery state, or `None` on machines without a battery
pub fn collect(host: &impl HostSource) -> Option<BatteryState> {
    let dir = Path::new(BATTERY_DIR);
    if !host.exists(dir) {
        log::debug!("no battery at {BATTERY_DIR}");
        return None;
    }

    let capacity = host
        .read_to_string(&dir.join("capacity"))
        .ok()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|c| c.is_finite())
        .map(|c| c.clamp(0.0, 100.0))
        .unwrap_or(0.0);

    let status = host
        .read_to_string(&dir.join("status"))
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    Some(BatteryState { capacity, status })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::mock::MockHost;

    #[test]
    fn absent_battery_is_none() {
        assert_eq!(collect(&MockHost::new()), None);
    }

    #[test]
    fn reads_capacity_and_status() {
        let mut host = MockHost::new();
        host.add_file(format!("{BATTERY_DIR}/capacity"), "76\n");
        host.add_file(format!("{BATTERY_DIR}/status"), "Discharging\n");

        let state = collect(&host).unwrap();
        assert_eq!(state.capacity, 76.0);
        assert_eq!(state.status, "Discharging");
    }

    #[test]
    fn unreadable_values_default() {
        let mut host = MockHost::new();
        host.add_dir(BATTERY_DIR);

        let state = collect(&host).unwrap();
        assert_eq!(state.capacity, 0.0);
        assert_eq!(state.status, "");
    }

    #[test]
    fn garbled_capacity_defaults_to_zero() {
        let mut host = MockHost::new();
        host.add_file(format!("{BATTERY_DIR}/capacity"), "full\n");
        host.add_file(format!("{BATTERY_DIR}/status"), "Full\n");

        let state = collect(&host).unwrap();
        assert_eq!(state.capacity, 0.0);
        assert_eq!(state.status, "Full");
    }
}
