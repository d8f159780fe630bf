//! Parameter structures for store operations.
//!
//! These are the plain request types passed into [`crate::store::Store`]
//! mutations. They are shared by the wizard and the command-line front end,
//! which converts its own argument structs into them with `From` impls:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Wizard Draft   │    │  Core Params    │
//! │  (clap derives) │───▶│ (typed actions) │───▶│ (this module)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Update types use `Option` per field; `None` always means "keep the
//! current value".

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::Category,
    models::{Direction, TemplateData},
    steps::StepList,
};

/// Data for creating a new activity.
///
/// Identity, status and participant count are assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NewActivity {
    pub title: String,
    pub description: String,
    pub categories: Vec<Category>,
    pub start_date: Option<DateTime>,
    pub end_date: Option<DateTime>,
    pub location: String,
    pub max_participants: u32,
    /// Display name of the creator
    pub creator: String,
    pub cover_image: Option<String>,
    pub activity_direction: String,
    pub activity_plan: String,
    pub grades: Vec<String>,
    pub classes: Vec<String>,
    pub responsible_teacher: String,
    pub require_registration: bool,
    pub process_steps: StepList,
    pub observation_points: Vec<String>,
}

/// Partial update of an activity. Id, status and participants are not
/// editable through this path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub categories: Option<Vec<Category>>,
    /// `Some(None)` clears the start date
    pub start_date: Option<Option<DateTime>>,
    /// `Some(None)` clears the end date
    pub end_date: Option<Option<DateTime>>,
    pub location: Option<String>,
    pub max_participants: Option<u32>,
    pub creator: Option<String>,
    /// Replaces the cover image when set; there is no way to remove one
    pub cover_image: Option<String>,
    pub activity_direction: Option<String>,
    pub activity_plan: Option<String>,
    pub grades: Option<Vec<String>>,
    pub classes: Option<Vec<String>>,
    pub responsible_teacher: Option<String>,
    pub require_registration: Option<bool>,
    pub process_steps: Option<StepList>,
    pub observation_points: Option<Vec<String>>,
}

impl ActivityPatch {
    /// True when applying the patch cannot change anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Data for creating a category plan inside a semester.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPlan {
    /// Target semester; the store's current semester when `None`
    #[serde(default)]
    pub semester: Option<String>,
    pub category: Category,
    pub title: String,
    #[serde(default)]
    pub directions: Vec<Direction>,
}

/// Data for creating a user template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NewTemplate {
    pub name: String,
    pub description: String,
    pub categories: Vec<Category>,
    pub cover_image: Option<String>,
    pub created_by: String,
    pub template_data: TemplateData,
}
