//! Line formatting for gauge output.

use crate::gauge::{self, COLOR_RESET, GAUGE_WIDTH};
use crate::metrics::{MetricSample, Snapshot};

/// Format one sample as `label | detail | gauge | percentage`
pub fn format_line(sample: &MetricSample, monochrome: bool) -> String {
    let gauge = gauge::render(sample.usage_percent, GAUGE_WIDTH, monochrome, sample.polarity());
    let reset = if monochrome { "" } else { COLOR_RESET };

    format!(
        "{:<25} {:>15} {} {}{:5.2}%{}",
        sample.label,
        sample.detail(),
        gauge.bar,
        gauge.color,
        sample.usage_percent,
        reset
    )
}

/// Format a whole snapshot, one newline-terminated line per sample
pub fn format_snapshot(snapshot: &Snapshot, monochrome: bool) -> String {
    snapshot
        .iter()
        .map(|sample| format_line(sample, monochrome) + "\n")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauge::{COLOR_GREEN, COLOR_RED};
    use crate::metrics::MetricKind;

    fn sample(kind: MetricKind, label: &str, detail: &str, percent: f64) -> MetricSample {
        let is_size = matches!(kind, MetricKind::Disk | MetricKind::Ram);
        MetricSample {
            kind,
            label: label.to_string(),
            size_text: is_size.then(|| detail.to_string()),
            usage_percent: percent,
            status_text: (!is_size).then(|| detail.to_string()),
        }
    }

    #[test]
    fn monochrome_line_layout() {
        let line = format_line(&sample(MetricKind::Disk, "/", "512.1 GB", 50.0), true);
        let expected = format!(
            "{:<25} {:>15} [{}{}] 50.00%",
            "/",
            "512.1 GB",
            "#".repeat(15),
            "-".repeat(15)
        );
        assert_eq!(line, expected);
    }

    #[test]
    fn colored_line_ends_with_reset() {
        let line = format_line(&sample(MetricKind::Ram, "RAM", "16.7 GB", 30.0), false);
        assert!(line.starts_with("RAM "));
        assert!(line.ends_with(&format!("{}30.00%{}", COLOR_GREEN, COLOR_RESET)));
    }

    #[test]
    fn battery_uses_inverted_colors() {
        let line = format_line(&sample(MetricKind::Battery, "Battery", "Discharging", 10.0), false);
        assert!(line.contains("Discharging"));
        assert!(line.ends_with(&format!("{}10.00%{}", COLOR_RED, COLOR_RESET)));
    }

    #[test]
    fn percentage_is_padded_to_five_columns() {
        let line = format_line(&sample(MetricKind::Cpu, "CPU", "1 mn", 3.5), true);
        assert!(line.ends_with("]  3.50%"));
        let line = format_line(&sample(MetricKind::Cpu, "CPU", "1 mn", 150.0), true);
        assert!(line.ends_with("] 150.00%"));
        assert!(line.contains(&format!("[{}]", "#".repeat(GAUGE_WIDTH))));
    }

    #[test]
    fn snapshot_lines_are_newline_terminated() {
        let snapshot = vec![
            sample(MetricKind::Ram, "RAM", "8.0 GB", 12.0),
            sample(MetricKind::Cpu, "CPU", "5 mn", 40.0),
        ];
        let out = format_snapshot(&snapshot, true);
        assert_eq!(out.lines().count(), 2);
        assert!(out.ends_with('\n'));
        assert_eq!(format_snapshot(&Snapshot::new(), true), "");
    }
}
