pub mod color;
pub mod context;
pub mod layout;
pub mod resolver;
pub mod stats;
pub mod views;

pub use context::ScheduleContext;
