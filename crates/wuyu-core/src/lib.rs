//! Core library for Five Educations activity management.
//!
//! This crate holds everything behind the `wuyu` front end: the fixed
//! category and observation-point catalogs, the entity store for activities,
//! semester plans and templates, the ordered process-step model, and the
//! authoring wizard that turns a draft into store writes.
//!
//! # Layers
//!
//! - [`catalog`]: read-only taxonomy and status vocabularies
//! - [`models`] and [`steps`]: the data types and step-list invariants
//! - [`store`]: CRUD surface over in-memory collections; user templates are
//!   mirrored through a [`persistence::Persistence`] back-end ([`db`] for
//!   SQLite)
//! - [`wizard`]: phase navigation, typed draft, template hydration, submit
//! - [`display`]: markdown `Display` output for the terminal
//!
//! # Quick Start
//!
//! ```rust
//! use wuyu_core::{
//!     catalog::Category,
//!     wizard::{Author, DraftAction, Wizard},
//!     StoreBuilder,
//! };
//!
//! # fn example() -> wuyu_core::Result<()> {
//! let mut store = StoreBuilder::new().in_memory().build()?;
//!
//! // Start an activity from a shipped template and give it a new title.
//! let mut wizard = Wizard::new_activity(Author::new("teacher-1", "Ms. Li"));
//! wizard.use_template(&store, "system-sports-day")?;
//! wizard.dispatch(DraftAction::SetTitle("Spring Festival Run".into()));
//!
//! let outcome = wizard.submit(&mut store)?;
//! let activity = store.get_activity_by_id(&outcome.id).expect("just created");
//! assert_eq!(activity.process_steps.len(), 5);
//!
//! // The activity now shows up under its plan direction.
//! let plans = store.get_plans_with_actual_activities("2024-2025-2");
//! assert!(plans
//!     .iter()
//!     .flat_map(|p| &p.directions)
//!     .any(|d| d.activities.iter().any(|a| a.id == outcome.id)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod persistence;
pub mod steps;
pub mod store;
pub mod wizard;

// Re-export commonly used types
pub use catalog::{ActivityStatus, Category, ObservationPoint, PlanItemStatus};
pub use db::Database;
pub use display::{
    Activities, CreateResult, DeleteResult, SemesterView, Templates, UpdateResult,
};
pub use error::{Result, WuyuError};
pub use models::{Activity, ActivityFilter, CategoryPlan, ProcessStep, StepKind, Template};
pub use params::{ActivityPatch, NewActivity, NewPlan, NewTemplate};
pub use persistence::{MemoryPersistence, Persistence};
pub use steps::{StepEditor, StepList};
pub use store::{Store, StoreBuilder};
pub use wizard::{Author, Wizard};
