pub mod day;
pub mod resolved;
pub mod section;
pub mod session;
pub mod session_kind;
pub mod time_slot;
pub mod year_filter;

pub use day::Weekday;
pub use resolved::ResolvedSession;
pub use section::{Group, SectionId};
pub use session::SessionEntry;
pub use session_kind::SessionKind;
pub use time_slot::TimeSlot;
pub use year_filter::YearFilter;
