//! Semester plan model: category plans made of named directions.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, PlanItemStatus};

/// Lightweight reference to an activity listed under a direction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: PlanItemStatus,
}

/// A named sub-track inside a category plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Direction {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub activities: Vec<ActivityRef>,
}

impl Direction {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            activities: Vec::new(),
        }
    }
}

/// The plan of one category within one semester.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryPlan {
    pub category: Category,
    pub title: String,
    #[serde(default)]
    pub directions: Vec<Direction>,
}

impl CategoryPlan {
    pub fn direction(&self, name: &str) -> Option<&Direction> {
        self.directions.iter().find(|d| d.name == name)
    }

    /// Number of activity references across all directions.
    pub fn activity_count(&self) -> usize {
        self.directions.iter().map(|d| d.activities.len()).sum()
    }
}
