pub mod messages;
pub mod session;

pub use messages::{AppMessage, LogEntry, LogLevel};
pub use session::{LoadState, Session};
