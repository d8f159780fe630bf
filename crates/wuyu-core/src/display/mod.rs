//! Markdown formatting for terminal output.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation results are formatted through newtype wrappers so the same
//! entity can be shown in full or as a list entry.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │ (Activity, ...) │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: Activities, Templates, SemesterView, ObservationPoints
//! - [`results`]: CreateResult, UpdateResult, DeleteResult
//! - [`datetime`]: LocalDateTime, Schedule

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Activities, ObservationPoints, SemesterView, Templates};
pub use datetime::{LocalDateTime, Schedule};
pub use results::{CreateResult, DeleteResult, UpdateResult};
