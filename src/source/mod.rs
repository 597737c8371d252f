//! Schedule source: decoding of the generator's JSON responses and the
//! on-disk copy of the currently held schedule.

pub mod envelope;
pub mod store;

pub use envelope::{DataSummary, ServiceEnvelope, ValidationReport, decode_schedule};
pub use store::ScheduleStore;
