pub mod colors;
pub mod date;
pub mod formatting;
pub mod time;

pub use formatting::pluralize;
pub use time::parse_hhmm;
