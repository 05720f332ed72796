pub mod agent;
pub mod coverage_day;
pub mod filter;
pub mod period;
pub mod snapshot;
pub mod ticket;
pub mod timeline_item;

pub use agent::{AgentConfig, AgentShift};
pub use coverage_day::{CoverageDay, FilteredDay};
pub use filter::FilterState;
pub use period::Period;
pub use snapshot::{AgentTimelineData, Snapshot};
pub use ticket::{TicketEvent, TicketStatus};
pub use timeline_item::{Marker, MarkerKind, TimelineItem};
