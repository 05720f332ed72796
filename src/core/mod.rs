pub mod calculator;
pub mod logic;

pub use logic::{Core, TimelineTotals, TimelineView, ViewRequest};
