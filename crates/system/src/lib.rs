//! Host metrics for the dashboard, plus the icon command launcher.

pub mod battery;
pub mod launch;

pub use launch::{launch, split_command};

use dash_core::{MetricsSource, StatSample};
use sysinfo::System;

/// [`MetricsSource`] backed by `sysinfo` and the sysfs battery interface.
///
/// CPU usage is a delta between two refreshes, so the same `System` must be
/// kept alive across samples; the very first sample reports `0%` CPU.
pub struct SysinfoMetrics {
    sys: System,
}

impl SysinfoMetrics {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory();
        Self { sys }
    }
}

impl Default for SysinfoMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for SysinfoMetrics {
    fn sample(&mut self) -> StatSample {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();

        StatSample {
            cpu_percent:     self.sys.global_cpu_usage().clamp(0.0, 100.0),
            ram_percent:     ram_percent(self.sys.used_memory(), self.sys.total_memory()),
            battery_percent: battery::read_battery(),
        }
    }
}

/// RAM usage as a percentage; `0` when the total is unknown.
fn ram_percent(used: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (used as f64 / total as f64 * 100.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ram_percent_handles_unknown_total() {
        assert_eq!(ram_percent(10, 0), 0.0);
    }

    #[test]
    fn ram_percent_is_a_percentage() {
        assert_eq!(ram_percent(1 << 30, 4 << 30), 25.0);
    }

    #[test]
    fn live_sample_stays_in_range() {
        let mut metrics = SysinfoMetrics::new();
        let sample = metrics.sample();
        assert!((0.0..=100.0).contains(&sample.cpu_percent));
        assert!((0.0..=100.0).contains(&sample.ram_percent));
        if let Some(battery) = sample.battery_percent {
            assert!((0.0..=100.0).contains(&battery));
        }
    }
}
