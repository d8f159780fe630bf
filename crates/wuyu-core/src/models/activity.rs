//! Activity model definition and related functionality.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{ActivityStatus, Category},
    steps::StepList,
};

/// A concrete schedulable event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Sequential identifier, rendered as a decimal string
    pub id: String,

    pub title: String,

    pub description: String,

    /// Non-empty; the first entry is the primary category used for plans
    pub categories: Vec<Category>,

    pub start_date: Option<DateTime>,

    pub end_date: Option<DateTime>,

    pub location: String,

    pub max_participants: u32,

    /// Current number of registered participants
    #[serde(default)]
    pub participants: u32,

    #[serde(default)]
    pub status: ActivityStatus,

    /// Display name of the creator
    pub creator: String,

    /// Owner user id
    pub created_by: String,

    pub cover_image: Option<String>,

    /// Free text matched against plan direction names
    #[serde(default)]
    pub activity_direction: String,

    #[serde(default)]
    pub activity_plan: String,

    #[serde(default)]
    pub grades: Vec<String>,

    #[serde(default)]
    pub classes: Vec<String>,

    #[serde(default)]
    pub responsible_teacher: String,

    #[serde(default)]
    pub require_registration: bool,

    #[serde(default)]
    pub process_steps: StepList,

    /// Observation point ids
    #[serde(default)]
    pub observation_points: Vec<String>,
}

impl Activity {
    /// Category used to place the activity into semester plans.
    pub fn primary_category(&self) -> Option<Category> {
        self.categories.first().copied()
    }

    /// Whether `user_id` acting as `role` may edit or delete this activity.
    ///
    /// Advisory only: the store does not consult this.
    pub fn can_be_managed_by(&self, user_id: &str, role: Role) -> bool {
        self.created_by == user_id || role.is_privileged()
    }
}

/// User roles known to the presentation shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    Teacher,
    GroupLeader,
    Principal,
}

impl Role {
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::GroupLeader | Role::Principal)
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "teacher" => Ok(Role::Teacher),
            "group-leader" | "leader" => Ok(Role::GroupLeader),
            "principal" => Ok(Role::Principal),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}
