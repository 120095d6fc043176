/// A point-in-time sample of the host metrics shown on the dashboard.
///
/// Produced fresh on every tick and never stored beyond it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatSample {
    /// Average CPU load across all cores (0.0 – 100.0).
    pub cpu_percent: f32,
    /// RAM in use (0.0 – 100.0).
    pub ram_percent: f32,
    /// Battery charge (0.0 – 100.0), `None` when it cannot be determined.
    pub battery_percent: Option<f32>,
}

impl StatSample {
    pub fn new(cpu_percent: f32, ram_percent: f32, battery_percent: Option<f32>) -> Self {
        Self {
            cpu_percent,
            ram_percent,
            battery_percent,
        }
    }
}

/// Anything that can produce a [`StatSample`] on demand.
///
/// Implementations must not fail: a metric that cannot be read is reported
/// through its sentinel (`None` for the battery, `0.0` otherwise).
pub trait MetricsSource {
    fn sample(&mut self) -> StatSample;
}

impl<F> MetricsSource for F
where
    F: FnMut() -> StatSample,
{
    fn sample(&mut self) -> StatSample {
        self()
    }
}
