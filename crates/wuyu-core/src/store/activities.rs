//! Activity CRUD operations.

use log::{debug, info, warn};

use super::Store;
use crate::{
    catalog::ActivityStatus,
    models::{Activity, ActivityFilter},
    params::{ActivityPatch, NewActivity},
};

impl Store {
    /// All activities in insertion order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Activities matching `filter`, in insertion order.
    pub fn filter_activities(&self, filter: &ActivityFilter) -> Vec<&Activity> {
        self.activities.iter().filter(|a| filter.matches(a)).collect()
    }

    pub fn get_activity_by_id(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Next sequential id: one past the highest numeric id in use.
    fn next_activity_id(&self) -> String {
        let highest = self
            .activities
            .iter()
            .filter_map(|a| a.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (highest.max(self.activities.len() as u64) + 1).to_string()
    }

    /// Creates an activity owned by `owner_id` and returns its id.
    ///
    /// Status is always [`ActivityStatus::Upcoming`] and the participant
    /// count starts at zero, whatever the input.
    pub fn add_new_activity(&mut self, data: NewActivity, owner_id: &str) -> Option<String> {
        let id = self.next_activity_id();
        let mut process_steps = data.process_steps;
        process_steps.normalize_order();

        let activity = Activity {
            id: id.clone(),
            title: data.title,
            description: data.description,
            categories: data.categories,
            start_date: data.start_date,
            end_date: data.end_date,
            location: data.location,
            max_participants: data.max_participants,
            participants: 0,
            status: ActivityStatus::Upcoming,
            creator: data.creator,
            created_by: owner_id.to_string(),
            cover_image: data.cover_image,
            activity_direction: data.activity_direction,
            activity_plan: data.activity_plan,
            grades: data.grades,
            classes: data.classes,
            responsible_teacher: data.responsible_teacher,
            require_registration: data.require_registration,
            process_steps,
            observation_points: data.observation_points,
        };

        info!("Activity {id} '{}' created by {owner_id}", activity.title);
        self.activities.push(activity);
        Some(id)
    }

    /// Shallow-merges `patch` into the activity. Returns `false` when no
    /// activity has this id.
    pub fn update_activity(&mut self, id: &str, patch: ActivityPatch) -> bool {
        let Some(activity) = self.activities.iter_mut().find(|a| a.id == id) else {
            warn!("Cannot update activity {id}: not found");
            return false;
        };

        if patch.is_empty() {
            debug!("Empty patch for activity {id}, nothing to do");
            return true;
        }

        let ActivityPatch {
            title,
            description,
            categories,
            start_date,
            end_date,
            location,
            max_participants,
            creator,
            cover_image,
            activity_direction,
            activity_plan,
            grades,
            classes,
            responsible_teacher,
            require_registration,
            process_steps,
            observation_points,
        } = patch;

        if let Some(title) = title {
            activity.title = title;
        }
        if let Some(description) = description {
            activity.description = description;
        }
        if let Some(categories) = categories {
            activity.categories = categories;
        }
        if let Some(start_date) = start_date {
            activity.start_date = start_date;
        }
        if let Some(end_date) = end_date {
            activity.end_date = end_date;
        }
        if let Some(location) = location {
            activity.location = location;
        }
        if let Some(max_participants) = max_participants {
            activity.max_participants = max_participants;
        }
        if let Some(creator) = creator {
            activity.creator = creator;
        }
        if cover_image.is_some() {
            activity.cover_image = cover_image;
        }
        if let Some(direction) = activity_direction {
            activity.activity_direction = direction;
        }
        if let Some(plan) = activity_plan {
            activity.activity_plan = plan;
        }
        if let Some(grades) = grades {
            activity.grades = grades;
        }
        if let Some(classes) = classes {
            activity.classes = classes;
        }
        if let Some(teacher) = responsible_teacher {
            activity.responsible_teacher = teacher;
        }
        if let Some(require_registration) = require_registration {
            activity.require_registration = require_registration;
        }
        if let Some(mut steps) = process_steps {
            steps.normalize_order();
            activity.process_steps = steps;
        }
        if let Some(points) = observation_points {
            activity.observation_points = points;
        }

        info!("Activity {id} updated");
        true
    }

    /// Removes the activity. Returns `false` when no activity has this id.
    pub fn delete_activity(&mut self, id: &str) -> bool {
        match self.activities.iter().position(|a| a.id == id) {
            Some(index) => {
                let removed = self.activities.remove(index);
                info!("Activity {id} '{}' deleted", removed.title);
                true
            }
            None => {
                warn!("Cannot delete activity {id}: not found");
                false
            }
        }
    }
}
