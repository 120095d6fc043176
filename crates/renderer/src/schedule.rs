use crate::{publisher::publish, state::DashboardState};
use dash_core::{MetricsSource, StatSample};
use std::time::Duration;
use tracing::trace;

/// Default period between two stats refreshes.
pub const STATS_INTERVAL: Duration = Duration::from_secs(1);

/// The recurring stats refresh: sample the metrics source, write the result
/// into the dashboard's labels.
///
/// The task does not own a timer; the window's subscription calls
/// [`StatsTask::tick`] every [`StatsTask::interval`].  Ticks run on the UI
/// thread and never overlap.
pub struct StatsTask<M> {
    source:   M,
    interval: Duration,
    last:     Option<StatSample>,
}

impl<M: MetricsSource> StatsTask<M> {
    pub fn new(source: M) -> Self {
        Self::with_interval(source, STATS_INTERVAL)
    }

    pub fn with_interval(source: M, interval: Duration) -> Self {
        Self {
            source,
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Most recent sample, if any tick has run.
    pub fn last_sample(&self) -> Option<StatSample> {
        self.last
    }

    /// Take one sample and publish it.  Infallible by construction.
    pub fn tick(&mut self, state: &mut DashboardState) {
        let sample = self.source.sample();
        trace!(?sample, "stats tick");
        publish(&mut state.widgets, &sample);
        self.last = Some(sample);
    }
}
