//! Status vocabularies for activities and plan entries.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of activity statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// Scheduled but not started; every new activity starts here
    #[default]
    Upcoming,

    /// Currently running
    Ongoing,

    /// Finished
    Completed,

    /// Called off
    Cancelled,
}

impl FromStr for ActivityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(ActivityStatus::Upcoming),
            "ongoing" => Ok(ActivityStatus::Ongoing),
            "completed" => Ok(ActivityStatus::Completed),
            "cancelled" | "canceled" => Ok(ActivityStatus::Cancelled),
            _ => Err(format!("Invalid activity status: {s}")),
        }
    }
}

impl ActivityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Upcoming => "upcoming",
            ActivityStatus::Ongoing => "ongoing",
            ActivityStatus::Completed => "completed",
            ActivityStatus::Cancelled => "cancelled",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wuyu_core::catalog::ActivityStatus;
    ///
    /// assert_eq!(ActivityStatus::Upcoming.with_icon(), "○ Upcoming");
    /// assert_eq!(ActivityStatus::Completed.with_icon(), "✓ Completed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ActivityStatus::Upcoming => "○ Upcoming",
            ActivityStatus::Ongoing => "➤ Ongoing",
            ActivityStatus::Completed => "✓ Completed",
            ActivityStatus::Cancelled => "✗ Cancelled",
        }
    }
}

/// Status of an activity reference inside a plan direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanItemStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

impl PlanItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanItemStatus::Planned => "PLANNED",
            PlanItemStatus::InProgress => "IN_PROGRESS",
            PlanItemStatus::Completed => "COMPLETED",
            PlanItemStatus::Cancelled => "CANCELLED",
        }
    }
}

impl From<ActivityStatus> for PlanItemStatus {
    fn from(status: ActivityStatus) -> Self {
        match status {
            ActivityStatus::Upcoming => PlanItemStatus::Planned,
            ActivityStatus::Ongoing => PlanItemStatus::InProgress,
            ActivityStatus::Completed => PlanItemStatus::Completed,
            ActivityStatus::Cancelled => PlanItemStatus::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_status_parse() {
        assert_eq!("Ongoing".parse::<ActivityStatus>(), Ok(ActivityStatus::Ongoing));
        assert_eq!("canceled".parse::<ActivityStatus>(), Ok(ActivityStatus::Cancelled));
        assert!("paused".parse::<ActivityStatus>().is_err());
    }

    #[test]
    fn test_plan_item_status_from_activity_status() {
        assert_eq!(PlanItemStatus::from(ActivityStatus::Upcoming), PlanItemStatus::Planned);
        assert_eq!(PlanItemStatus::from(ActivityStatus::Ongoing), PlanItemStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&PlanItemStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
    }
}
