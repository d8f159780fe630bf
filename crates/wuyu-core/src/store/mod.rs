//! The entity store: activities, semester plans and templates.
//!
//! [`Store`] owns the canonical in-memory collections and exposes the CRUD
//! surface used by the wizard and the front end. Each instance is
//! independent, so tests build isolated stores instead of sharing global
//! state.
//!
//! # Failure contract
//!
//! Expected conditions never surface as errors: a lookup miss returns `None`,
//! a mutation of a missing entity returns `false`, and persistence failures
//! are logged and swallowed while the in-memory copy stays authoritative for
//! the session. Callers decide how to present those outcomes.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Activities    │    │  Semester Plans │    │    Templates    │
//! │ (activities.rs) │───▶│   (plans.rs)    │    │ (templates.rs)  │
//! └─────────────────┘    └─────────────────┘    └────────┬────────┘
//!     in memory           projected on read              │
//!                                                        ▼
//!                                               Persistence (user list)
//! ```
//!
//! # Example
//!
//! ```rust
//! use wuyu_core::{catalog::Category, params::NewActivity, StoreBuilder};
//!
//! # fn example() -> wuyu_core::Result<()> {
//! let mut store = StoreBuilder::new().in_memory().with_seed_data(false).build()?;
//!
//! let id = store
//!     .add_new_activity(
//!         NewActivity {
//!             title: "Spring Festival Run".to_string(),
//!             categories: vec![Category::PhysicalHealth],
//!             ..Default::default()
//!         },
//!         "teacher-1",
//!     )
//!     .expect("in-memory insert");
//!
//! let activity = store.get_activity_by_id(&id).expect("just created");
//! assert_eq!(activity.participants, 0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::collections::BTreeMap;

use crate::{
    catalog::{self, Category, ObservationPoint},
    models::{Activity, CategoryPlan, Template},
    persistence::Persistence,
};

pub mod activities;
pub mod builder;
pub mod plans;
pub mod seed;
pub mod templates;


pub use builder::{StoreBuilder, DEFAULT_SEMESTER};

/// Plans of one semester, keyed by category.
pub type SemesterPlans = BTreeMap<Category, CategoryPlan>;

/// Canonical collections plus the persistence used for user templates.
pub struct Store {
    pub(crate) activities: Vec<Activity>,
    pub(crate) plans: BTreeMap<String, SemesterPlans>,
    pub(crate) system_templates: Vec<Template>,
    pub(crate) user_templates: Vec<Template>,
    pub(crate) persistence: Box<dyn Persistence>,
    pub(crate) current_semester: String,
}

impl Store {
    /// Creates an empty store with no seeded data.
    pub fn new(persistence: Box<dyn Persistence>, current_semester: impl Into<String>) -> Self {
        Self {
            activities: Vec::new(),
            plans: BTreeMap::new(),
            system_templates: Vec::new(),
            user_templates: Vec::new(),
            persistence,
            current_semester: current_semester.into(),
        }
    }

    /// Semester that plan writes without an explicit semester go to.
    pub fn current_semester(&self) -> &str {
        &self.current_semester
    }

    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    pub fn observation_points(&self) -> &'static [ObservationPoint] {
        catalog::observation_points()
    }

    pub fn observation_point(&self, id: &str) -> Option<&'static ObservationPoint> {
        catalog::observation_point(id)
    }

    pub fn observation_points_by_category(&self, category: Category) -> Vec<&'static ObservationPoint> {
        catalog::observation_points_by_category(category).collect()
    }
}
