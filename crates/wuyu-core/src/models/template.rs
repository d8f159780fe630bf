//! Template model: a reusable activity blueprint.

use jiff::{civil::DateTime, Timestamp};
use serde::{Deserialize, Serialize};

use crate::{catalog::Category, steps::StepList};

/// Everything needed to pre-fill an activity draft.
///
/// Every field has a default so that records persisted by older versions
/// still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateData {
    pub title: String,
    pub description: String,
    pub grades: Vec<String>,
    pub classes: Vec<String>,
    pub location: String,
    pub start_date: Option<DateTime>,
    pub end_date: Option<DateTime>,
    pub max_participants: u32,
    pub responsible_teacher: String,
    pub require_registration: bool,
    pub activity_direction: String,
    pub observation_points: Vec<String>,
    pub process_steps: StepList,
    pub selected_plans: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub created_by: String,
    pub created_at: Timestamp,
    #[serde(default)]
    pub template_data: TemplateData,
    /// Seeded templates ship with the application and are never persisted
    #[serde(default)]
    pub is_system: bool,
}

impl Template {
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}
