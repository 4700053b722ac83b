//! # Sked Core Library
//!
//! The date engine behind the sked task tracker: it turns a compact repeat
//! rule into the next calendar day a task is due.
//!
//! ## Core Modules
//!
//! - [`calendar`]: leap years, month lengths and the `YYYYMMDD` date format
//! - [`rule`]: repeat rule grammar (`d 3`, `y`, `w 1,3`, `m -1,15 1,6`)
//! - [`recurrence`]: next due date computation
//! - [`normalize`]: date rules for new and edited tasks
//! - [`models`]: the task record and completion outcome
//! - [`query`]: free-text search over tasks
//! - [`error`]: error type shared by all of the above
//!
//! Everything here is a pure function of its arguments; the crate does no
//! I/O and keeps no state.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sked_core::recurrence::next_date;
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! assert_eq!(next_date(now, "20240101", "m -1").unwrap(), "20240131");
//! assert_eq!(next_date(now, "20240101", "d 7").unwrap(), "20240115");
//! ```

pub mod calendar;
pub mod error;
pub mod models;
pub mod normalize;
pub mod query;
pub mod recurrence;
pub mod rule;

pub use error::CoreError;
pub use models::{Completion, Task};
pub use rule::Rule;
