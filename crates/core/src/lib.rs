pub mod error;
pub mod event;
pub mod state;
pub mod widget;

pub use error::{ConfigError, DashError, Result};
pub use event::Message;
pub use state::{MetricsSource, StatSample};
pub use widget::{IconCell, LabelCell, RenderedKind, RenderedWidget};
