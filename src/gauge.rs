//! Fixed-width ASCII gauges with threshold-based ANSI coloring.

pub const COLOR_GREEN: &str = "\x1b[32m";
pub const COLOR_YELLOW: &str = "\x1b[33m";
pub const COLOR_RED: &str = "\x1b[31m";
pub const COLOR_RESET: &str = "\x1b[0m";

/// Default number of cells between the brackets
pub const GAUGE_WIDTH: usize = 30;

/// Which end of the scale is bad.
///
/// `Normal` turns red as usage grows (disks, RAM, CPU). `Inverted` turns red
/// as the value shrinks, which suits battery charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Normal,
    Inverted,
}

/// A rendered gauge and the color for its printed percentage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gauge {
    pub bar: String,
    /// Empty in monochrome mode
    pub color: &'static str,
}

/// Number of `#` cells for a usage percentage, always within `0..=width`
pub fn filled_cells(usage_percent: f64, width: usize) -> usize {
    let filled = (usage_percent / 100.0 * width as f64).floor();
    if filled.is_nan() || filled <= 0.0 {
        0
    } else {
        (filled as usize).min(width)
    }
}

/// Render `usage_percent` as a bracketed bar of `width` cells.
///
/// In color mode each filled cell is colored by the position it represents
/// rather than by the overall value, so a bar shows a left-to-right gradient.
pub fn render(usage_percent: f64, width: usize, monochrome: bool, polarity: Polarity) -> Gauge {
    let filled = filled_cells(usage_percent, width);
    let mut bar = String::with_capacity(width * 10 + 8);
    bar.push('[');

    for i in 0..width {
        if i >= filled {
            bar.push('-');
        } else if monochrome {
            bar.push('#');
        } else {
            let segment_end = (i + 1) as f64 / width as f64 * 100.0;
            bar.push_str(segment_color(segment_end, polarity));
            bar.push('#');
            bar.push_str(COLOR_RESET);
        }
    }

    bar.push(']');
    if monochrome {
        return Gauge { bar, color: "" };
    }

    bar.push_str(COLOR_RESET);
    Gauge {
        bar,
        color: overall_color(usage_percent, polarity),
    }
}

/// Color of a single cell whose right edge sits at `segment_end` percent
fn segment_color(segment_end: f64, polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Normal => {
            if segment_end <= 50.0 {
                COLOR_GREEN
            } else if segment_end <= 80.0 {
                COLOR_YELLOW
            } else {
                COLOR_RED
            }
        }
        Polarity::Inverted => {
            if segment_end <= 20.0 {
                COLOR_RED
            } else if segment_end <= 80.0 {
                COLOR_YELLOW
            } else {
                COLOR_GREEN
            }
        }
    }
}

/// Color for the printed percentage, from the aggregate value.
///
/// The top band of an inverted gauge is green: a full battery is good news.
fn overall_color(usage_percent: f64, polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Normal => {
            if usage_percent < 50.0 {
                COLOR_GREEN
            } else if usage_percent < 80.0 {
                COLOR_YELLOW
            } else {
                COLOR_RED
            }
        }
        Polarity::Inverted => {
            if usage_percent < 20.0 {
                COLOR_RED
            } else if usage_percent < 80.0 {
                COLOR_YELLOW
            } else {
                COLOR_GREEN
            }
        }
    }
}
