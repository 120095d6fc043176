//! Layout and stats engine for the dashboard.
//!
//! - [`grid`]: sizes the icon/label grid and the window around it
//! - [`state`]: the dashboard's explicit state, built once from the config
//! - [`publisher`]: maps a metrics sample onto label cells
//! - [`schedule`]: the once-per-second refresh task

pub mod grid;
pub mod publisher;
pub mod schedule;
pub mod state;

pub use grid::{calculate_grid_size, cell_of, GridGeometry};
pub use publisher::{format_stats, publish, STAT_SLOTS};
pub use schedule::{StatsTask, STATS_INTERVAL};
pub use state::DashboardState;
