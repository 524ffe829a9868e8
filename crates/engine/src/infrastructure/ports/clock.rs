//! Time source port.

use chrono::{DateTime, Utc};

/// Supplies "now" so timestamps are deterministic under test.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
