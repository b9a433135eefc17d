//! Clock port trait

use chrono::{DateTime, Utc};

/// Source of the current time, injected so relative times are testable
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
